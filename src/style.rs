//! Raster rendering style built from color stops.
//!
//! [`RampStyle::expression`] produces the style expression handed to
//! the WebGL tile layer; [`RampStyle::color_at`] evaluates the same
//! expression for one band value.

use serde_json::{json, Value};

use crate::stops::{ColorStops, StopItem};
use crate::{lerp, to_rgba8, Rgba, TRANSPARENT};

/// A piecewise-linear color ramp over one raster band.
///
/// Values below the first stop (the display threshold) are fully
/// transparent.
#[derive(Debug, Clone)]
pub struct RampStyle {
    stops: ColorStops,
    band: u32,
}

fn color_json(c: &Rgba) -> Value { json!([c.r, c.g, c.b, c.a]) }

impl RampStyle {
    /// Style reading band `band` (1-based, as in the GeoTIFF source).
    pub fn new(stops: ColorStops, band: u32) -> Self {
        RampStyle { stops, band }
    }

    /// The stops the style was built from.
    #[inline]
    pub fn stops(&self) -> &ColorStops { &self.stops }

    #[inline]
    pub fn band(&self) -> u32 { self.band }

    /// Return the style as a JSON expression:
    ///
    /// ```text
    /// {"color": ["case", ["<", ["band", b], min], [0, 0, 0, 0],
    ///            ["interpolate", ["linear"], ["band", b], v0, c0, …]]}
    /// ```
    pub fn expression(&self) -> Value {
        let data = json!(["band", self.band]);
        let mut interpolate = vec![json!("interpolate"), json!(["linear"]),
                                   data.clone()];
        interpolate.extend(self.stops.flatten().map(|item| match item {
            StopItem::Value(v) => json!(v),
            StopItem::Color(c) => color_json(&c),
        }));
        json!({
            "color": [
                "case",
                ["<", data, self.stops.threshold()],
                [0, 0, 0, 0],
                interpolate,
            ]
        })
    }

    /// Color of a pixel whose band value is `value`.
    pub fn color_at(&self, value: f64) -> Rgba {
        if value.is_nan() || value < self.stops.threshold() {
            return TRANSPARENT;
        }
        let stops = &self.stops;
        let first = stops[0];
        let last = stops[stops.len() - 1];
        if value <= first.value { return first.color }
        if value >= last.value { return last.color }
        // First stop strictly above `value`; exists since value < last.
        let i = stops.partition_point(|s| s.value <= value);
        let (s0, s1) = (stops[i - 1], stops[i]);
        let t = (value - s0.value) / (s1.value - s0.value);
        let (c0, c1) = (s0.color, s1.color);
        Rgba { r: lerp(c0.r, c1.r, t),
               g: lerp(c0.g, c1.g, t),
               b: lerp(c0.b, c1.b, t),
               a: c0.a + (c1.a - c0.a) * t }
    }

    /// Map band values to an RGBA8 pixel buffer (row-major, 4 bytes
    /// per pixel).
    pub fn apply(&self, data: &[f32]) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(data.len() * 4);
        for &value in data {
            let c = to_rgba8(&self.color_at(value as f64));
            pixels.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        pixels
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_stops;

    fn style() -> RampStyle {
        RampStyle::new(generate_stops("RdBu", 1., 20., 11, 0.5).unwrap(), 1)
    }

    #[test]
    fn expression_shape() {
        let style = style();
        let e = style.expression();
        let color = e["color"].as_array().unwrap();
        assert_eq!(color[0], "case");
        assert_eq!(color[1], json!(["<", ["band", 1], 1.0]));
        assert_eq!(color[2], json!([0, 0, 0, 0]));
        let interp = color[3].as_array().unwrap();
        assert_eq!(interp[0], "interpolate");
        assert_eq!(interp[1], json!(["linear"]));
        assert_eq!(interp.len(), 3 + 2 * 11);
        assert_eq!(interp[3], json!(1.0));
        assert_eq!(interp[4], json!([5, 10, 172, 0.5]));
    }

    #[test]
    fn expression_stops_match_legend_stops() {
        let style = style();
        let e = style.expression();
        let interp = e["color"][3].as_array().unwrap();
        let legend = crate::Legend::new(
            generate_stops("RdBu", 1., 20., 11, 0.5).unwrap(), 20, 200);
        for (pair, seg) in interp[3..].chunks(2).zip(legend.segments()) {
            assert_eq!(pair[0].as_f64().unwrap(), seg.value);
            assert_eq!(pair[1], color_json(&seg.color));
        }
    }

    #[test]
    fn below_threshold_is_transparent() {
        let style = style();
        assert_eq!(style.color_at(0.), TRANSPARENT);
        assert_eq!(style.color_at(0.999), TRANSPARENT);
        assert_eq!(style.color_at(f64::NAN), TRANSPARENT);
        assert_eq!(style.color_at(1.), style.stops()[0].color);
    }

    #[test]
    fn interpolates_between_stops() {
        let style = style();
        let s = style.stops();
        assert_eq!(style.color_at(4.), s[2].color);
        assert_eq!(style.color_at(100.), s[10].color);
        let c = style.color_at(5.);
        let (c0, c1) = (s[2].color, s[3].color);
        assert_eq!(c.r, lerp(c0.r, c1.r, 0.5));
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn apply_writes_rgba8() {
        let style = style();
        let pixels = style.apply(&[0., 20., f32::NAN]);
        assert_eq!(pixels.len(), 12);
        assert_eq!(&pixels[0..4], &[0, 0, 0, 0]);
        assert_eq!(&pixels[4..8], &[178, 10, 28, 128]);
        assert_eq!(&pixels[8..12], &[0, 0, 0, 0]);
    }
}
