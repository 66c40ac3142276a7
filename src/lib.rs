//! Color ramps, legends and time-step navigation for a series of
//! SO2 column-mass forecast rasters.
//!
//! - [`Palette`]: named color scales sampled into RGBA shades.
//! - [`generate_stops`]: evenly spaced `(value, color)` breakpoints
//!   shared by the per-pixel [`RampStyle`] and the [`Legend`].
//! - [`Navigator`], [`LayerGroup`] and [`SourceCache`]: the state a
//!   viewer keeps while stepping through a [`ForecastSeries`].
//! - [`Viewer`] wires all of the above together.
//!
//! # Example
//!
//! ```
//! use so2_viewer::generate_stops;
//! let stops = generate_stops("RdBu", 1., 20., 11, 0.5).unwrap();
//! assert_eq!(stops.len(), 11);
//! assert_eq!(stops[0].value, 1.);
//! assert_eq!(stops[1].value, 2.);
//! ```

use rgb::RGBA;

pub mod cache;
pub mod config;
pub mod error;
pub mod legend;
pub mod metadata;
pub mod navigator;
mod palettes;
pub mod series;
pub mod stops;
pub mod style;
pub mod viewer;

use palettes::ty::PaletteData;
pub use palettes::ty::PaletteType;

pub use cache::SourceCache;
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use legend::Legend;
pub use metadata::{MetadataReader, RasterMetadata, TiffMetadataReader};
pub use navigator::{Navigator, Position};
pub use series::{ForecastSeries, LayerGroup, RasterLayer};
pub use stops::{generate_stops, ColorStop, ColorStops, Domain};
pub use style::RampStyle;
pub use viewer::{Action, RasterInfo, Viewer};

/// An RGB color with 8 bits channels and an opacity in \[0, 1\].
pub type Rgba = RGBA<u8, f64>;

/// Fully transparent black, used for values below the display
/// threshold.
pub const TRANSPARENT: Rgba = RGBA { r: 0, g: 0, b: 0, a: 0. };

/// Return the CSS `rgba(…)` notation of `c`.
pub fn css_string(c: &Rgba) -> String {
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a)
}

/// Convert `c` to 8 bits RGBA, scaling the opacity to \[0, 255\].
#[inline]
pub fn to_rgba8(c: &Rgba) -> rgb::RGBA8 {
    let a = (c.a.clamp(0., 1.) * 255.).round() as u8;
    rgb::RGBA8 { r: c.r, g: c.g, b: c.b, a }
}

#[inline]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (a as f64, b as f64);
    (a + (b - a) * t).round() as u8
}


/// A named colormap.
///
/// Created by [`Palette::by_name`].
#[derive(Clone, Copy)]
pub struct Palette {
    palette: &'static PaletteData,
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette").field("name", &self.name()).finish()
    }
}

impl Palette {
    /// Look up a palette by its identifier, ignoring ASCII case.
    ///
    /// ```
    /// use so2_viewer::Palette;
    /// assert_eq!(Palette::by_name("rdbu").unwrap().name(), "RdBu");
    /// assert!(Palette::by_name("nope").is_err());
    /// ```
    pub fn by_name(name: &str) -> Result<Self> {
        palettes::ALL_PALETTES.iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|&palette| Palette { palette })
            .ok_or_else(|| ViewerError::UnknownPalette(name.to_string()))
    }

    /// Return an iterator on the identifiers of all known palettes.
    pub fn names() -> impl Iterator<Item = &'static str> {
        palettes::ALL_PALETTES.iter().map(|p| p.name)
    }

    /// The canonical identifier of the palette.
    #[inline]
    pub fn name(&self) -> &'static str { self.palette.name }

    /// Says whether the palette is `Seq`uential or `Div`ergent.
    #[inline]
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Returns the number of control points of the palette.
    ///
    /// Palettes contain at least 2 control points.
    #[inline]
    pub fn len(&self) -> usize { self.palette.points.len() }

    /// The smallest number of shades [`Palette::shades`] accepts.
    #[inline]
    pub fn min_shades(&self) -> usize { self.len() - 1 }

    /// Sample `n` colors from the palette, all with opacity `alpha`.
    ///
    /// Every control point is pinned to the shade closest to its
    /// position and the shades in between are linear interpolations
    /// in RGB.  The first and last shades are the end colors of the
    /// palette.
    ///
    /// # Errors
    ///
    /// [`ViewerError::TooFewShades`] if `n` is too small to place all
    /// control points and [`ViewerError::InvalidArgument`] if `n < 2`
    /// or `alpha` is not in \[0, 1\].
    pub fn shades(&self, n: usize, alpha: f64) -> Result<Vec<Rgba>> {
        if n < 2 {
            return Err(ViewerError::InvalidArgument(
                format!("at least 2 shades are required, got {n}")));
        }
        if !(0. ..= 1.).contains(&alpha) {
            return Err(ViewerError::InvalidArgument(
                format!("alpha must be in [0, 1], got {alpha}")));
        }
        let points = &self.palette.points;
        if points.len() > n + 1 {
            return Err(ViewerError::TooFewShades {
                name: self.name(), required: self.min_shades(),
                requested: n });
        }
        let last = (n - 1) as f64;
        let positions: Vec<usize> = points.iter()
            .map(|&(t, _)| (t * last).round() as usize)
            .collect();
        let mut colors = Vec::with_capacity(n);
        for (k, w) in points.windows(2).enumerate() {
            let (c0, c1) = (w[0].1, w[1].1);
            let nsteps = positions[k + 1] - positions[k];
            for j in 0 .. nsteps {
                let t = j as f64 / nsteps as f64;
                colors.push(RGBA { r: lerp(c0.r, c1.r, t),
                                   g: lerp(c0.g, c1.g, t),
                                   b: lerp(c0.b, c1.b, t),
                                   a: alpha });
            }
        }
        let c = points[points.len() - 1].1;
        colors.push(RGBA { r: c.r, g: c.g, b: c.b, a: alpha });
        Ok(colors)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shades_have_requested_length() {
        for name in Palette::names() {
            let p = Palette::by_name(name).unwrap();
            for n in p.min_shades().max(2) ..= 40 {
                let shades = p.shades(n, 0.5).unwrap();
                assert_eq!(shades.len(), n, "{name} with {n} shades");
                assert!(shades.iter().all(|c| c.a == 0.5));
            }
        }
    }

    #[test]
    fn shades_end_on_palette_colors() {
        let p = Palette::by_name("RdBu").unwrap();
        let s = p.shades(11, 0.6).unwrap();
        assert_eq!(s[0], RGBA { r: 5, g: 10, b: 172, a: 0.6 });
        assert_eq!(s[10], RGBA { r: 178, g: 10, b: 28, a: 0.6 });
        // 0.5 * 10 lands exactly on the grey control point.
        assert_eq!(s[5], RGBA { r: 190, g: 190, b: 190, a: 0.6 });
    }

    #[test]
    fn shades_interpolate_linearly() {
        let p = Palette::by_name("greys").unwrap();
        let s = p.shades(3, 1.).unwrap();
        assert_eq!(s[1], RGBA { r: 128, g: 128, b: 128, a: 1. });
    }

    #[test]
    fn too_few_shades() {
        let p = Palette::by_name("RdBu").unwrap();
        assert!(matches!(p.shades(4, 0.5),
                         Err(ViewerError::TooFewShades { required: 5, .. })));
        assert!(p.shades(5, 0.5).is_ok());
    }

    #[test]
    fn invalid_alpha() {
        let p = Palette::by_name("jet").unwrap();
        assert!(matches!(p.shades(10, 1.5),
                         Err(ViewerError::InvalidArgument(_))));
    }

    #[test]
    fn css() {
        let c = RGBA { r: 5, g: 10, b: 172, a: 0.5 };
        assert_eq!(css_string(&c), "rgba(5, 10, 172, 0.5)");
        assert_eq!(to_rgba8(&c).a, 128);
    }
}
