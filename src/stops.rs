//! Color ramp stops.
//!
//! A ramp is described by a [`Domain`] and a [`Palette`].  The same
//! [`ColorStops`] must feed both the per-pixel style and the legend so
//! that the two stay visually synchronized.

use std::ops::Deref;

use tracing::debug;

use crate::{Palette, Result, Rgba, ViewerError};

/// A `(value, color)` breakpoint of a piecewise-linear color ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub value: f64,
    pub color: Rgba,
}

/// The numeric range of a ramp and its number of stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Display threshold: values below are not drawn.
    pub min: f64,
    pub max: f64,
    pub steps: usize,
}

impl Domain {
    /// Create a domain, checking `0 ≤ min < max` and `steps ≥ 2`.
    pub fn new(min: f64, max: f64, steps: usize) -> Result<Self> {
        let d = Domain { min, max, steps };
        d.validate()?;
        Ok(d)
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps < 2 {
            return Err(ViewerError::InvalidArgument(
                format!("steps must be at least 2, got {}", self.steps)));
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ViewerError::InvalidArgument(
                format!("non-finite domain [{}, {}]", self.min, self.max)));
        }
        if self.min < 0. {
            return Err(ViewerError::InvalidArgument(
                format!("min must be non-negative, got {}", self.min)));
        }
        if self.max <= self.min {
            return Err(ViewerError::InvalidArgument(
                format!("max ({}) must exceed min ({})", self.max, self.min)));
        }
        Ok(())
    }

    /// Spacing between two consecutive stops.
    #[inline]
    pub fn delta(&self) -> f64 { self.max / (self.steps - 1) as f64 }
}

/// An ordered sequence of [`ColorStop`]s.
///
/// Dereferences to a slice of stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStops {
    stops: Vec<ColorStop>,
}

impl ColorStops {
    /// Compute the stops of `domain` with colors sampled from
    /// `palette` at opacity `alpha`.
    ///
    /// Values are `i * delta` with `delta = max / (steps - 1)`, except
    /// that the first value is lowered to `min` when `min < delta`.
    pub fn new(palette: &Palette, domain: Domain, alpha: f64)
               -> Result<Self> {
        domain.validate()?;
        let delta = domain.delta();
        let colors = palette.shades(domain.steps, alpha)?;
        let mut stops: Vec<ColorStop> = colors.into_iter().enumerate()
            .map(|(i, color)| ColorStop { value: i as f64 * delta, color })
            .collect();
        if domain.min < delta {
            stops[0].value = domain.min;
        }
        debug!(palette = palette.name(), min = domain.min,
               max = domain.max, steps = domain.steps, delta,
               "Computed color stops");
        Ok(ColorStops { stops })
    }

    /// Display threshold: the value of the first stop.
    #[inline]
    pub fn threshold(&self) -> f64 { self.stops[0].value }

    /// Values and colors interleaved, `v0, c0, v1, c1, …`.
    pub fn flatten(&self) -> impl Iterator<Item = StopItem> + '_ {
        self.stops.iter().flat_map(|s| {
            [StopItem::Value(s.value), StopItem::Color(s.color)]
        })
    }

    pub fn into_vec(self) -> Vec<ColorStop> { self.stops }
}

impl Deref for ColorStops {
    type Target = [ColorStop];
    fn deref(&self) -> &[ColorStop] { &self.stops }
}

/// An item of [`ColorStops::flatten`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopItem {
    Value(f64),
    Color(Rgba),
}

/// Compute `steps` stops for `palette` over `[0, max]`, clamping the
/// first one to `min`.  See [`ColorStops::new`].
///
/// # Errors
///
/// [`ViewerError::InvalidArgument`] if `steps < 2`, `min < 0`,
/// `max <= min` or `alpha` ∉ \[0, 1\]; [`ViewerError::UnknownPalette`]
/// if `palette` is not known.
pub fn generate_stops(palette: &str, min: f64, max: f64, steps: usize,
                      alpha: f64) -> Result<ColorStops> {
    let palette = Palette::by_name(palette)?;
    ColorStops::new(&palette, Domain::new(min, max, steps)?, alpha)
}
