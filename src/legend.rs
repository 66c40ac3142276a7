//! Colorbar legend.
//!
//! The bar is split into one segment per stop, lowest value at the
//! bottom.  Each segment carries the label of its stop value, centered
//! vertically on the segment.

use std::path::Path;

use image::{Rgba as Pixel, RgbaImage};
use tracing::info;

use crate::stops::ColorStops;
use crate::{css_string, to_rgba8, Result, Rgba, ViewerError};

/// One colored rectangle of the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub value: f64,
    pub color: Rgba,
    /// Top of the rectangle, from the top of the bar.
    pub y: f64,
    pub height: f64,
    pub label: String,
    /// Vertical center of the label.
    pub label_y: f64,
}

impl Segment {
    /// Fill style, in CSS notation.
    pub fn fill_style(&self) -> String { css_string(&self.color) }
}

#[derive(Debug, Clone)]
pub struct Legend {
    stops: ColorStops,
    bar_width: u32,
    bar_height: u32,
    segments: Vec<Segment>,
}

/// Shortest decimal representation, `4` rather than `4.0`.
fn format_value(v: f64) -> String { format!("{}", v) }

impl Legend {
    pub fn new(stops: ColorStops, bar_width: u32, bar_height: u32) -> Self {
        let n = stops.len();
        let height = bar_height as f64 / n as f64;
        let segments = stops.iter().enumerate().map(|(i, s)| {
            let y = bar_height as f64 - (i + 1) as f64 * height;
            Segment { value: s.value, color: s.color, y, height,
                      label: format_value(s.value),
                      label_y: y + height / 2. }
        }).collect();
        Legend { stops, bar_width, bar_height, segments }
    }

    #[inline]
    pub fn stops(&self) -> &ColorStops { &self.stops }

    /// Segments, lowest value first.
    #[inline]
    pub fn segments(&self) -> &[Segment] { &self.segments }

    #[inline]
    pub fn bar_width(&self) -> u32 { self.bar_width }

    #[inline]
    pub fn bar_height(&self) -> u32 { self.bar_height }

    /// Draw the bar.  A pixel row belongs to the segment containing
    /// its center.
    pub fn render(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.bar_width, self.bar_height);
        for seg in &self.segments {
            let c = to_rgba8(&seg.color);
            let top = (seg.y - 0.5).ceil().max(0.) as u32;
            let bottom = ((seg.y + seg.height - 0.5).ceil() as u32)
                .min(self.bar_height);
            for row in top .. bottom {
                for col in 0 .. self.bar_width {
                    img.put_pixel(col, row, Pixel([c.r, c.g, c.b, c.a]));
                }
            }
        }
        img
    }

    /// Write the rendered bar as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if self.bar_width == 0 || self.bar_height == 0 {
            return Err(ViewerError::Render(
                format!("empty legend {}x{}", self.bar_width,
                        self.bar_height)));
        }
        self.render().save(path)?;
        info!(path = %path.display(), steps = self.segments.len(),
              "Wrote legend");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_stops;

    fn legend() -> Legend {
        Legend::new(generate_stops("RdBu", 1., 20., 11, 0.5).unwrap(), 20, 200)
    }

    #[test]
    fn segments_bottom_to_top() {
        let legend = legend();
        let segs = legend.segments();
        assert_eq!(segs.len(), 11);
        let h = 200. / 11.;
        assert_eq!(segs[0].y, 200. - h);
        assert_eq!(segs[0].height, h);
        assert_eq!(segs[0].label, "1");
        assert_eq!(segs[1].label, "2");
        assert_eq!(segs[10].label, "20");
        assert!(segs[10].y.abs() < 1e-9);
        assert!(segs.windows(2).all(|w| w[0].y > w[1].y));
        assert_eq!(segs[3].label_y, segs[3].y + h / 2.);
    }

    #[test]
    fn labels_keep_fractions() {
        let legend = Legend::new(
            generate_stops("RdBu", 0.1, 5., 11, 0.6).unwrap(), 20, 200);
        let labels: Vec<_> = legend.segments().iter()
            .map(|s| s.label.as_str()).collect();
        assert_eq!(labels[0], "0.1");
        assert_eq!(labels[1], "0.5");
        assert_eq!(labels[10], "5");
    }

    #[test]
    fn render_fills_every_row() {
        let legend = legend();
        let img = legend.render();
        assert_eq!(img.dimensions(), (20, 200));
        let bottom = to_rgba8(&legend.segments()[0].color);
        let top = to_rgba8(&legend.segments()[10].color);
        assert_eq!(img.get_pixel(0, 199).0, [bottom.r, bottom.g, bottom.b, bottom.a]);
        assert_eq!(img.get_pixel(19, 0).0, [top.r, top.g, top.b, top.a]);
        assert!(img.pixels().all(|p| p.0[3] == 128));
    }

    #[test]
    fn fill_style_is_css() {
        let legend = legend();
        assert_eq!(legend.segments()[0].fill_style(), "rgba(5, 10, 172, 0.5)");
    }
}
