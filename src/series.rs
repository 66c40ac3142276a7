//! Raster layer descriptors for a forecast series.

use serde::{Deserialize, Serialize};

use crate::{Result, ViewerError};

/// A single time step of the series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RasterLayer {
    /// Display name, e.g. `SO2 column mass [DU] +06h FCST`.
    pub name: String,
    /// File name of the raster, e.g. `SO2_col_mass_006.tif`.
    pub base: String,
    pub forecast_hour: u32,
}

impl RasterLayer {
    pub fn new(title: &str, prefix: &str, forecast_hour: u32) -> Self {
        RasterLayer {
            name: format!("{title} +{forecast_hour:02}h FCST"),
            base: format!("{prefix}{forecast_hour:03}.tif"),
            forecast_hour,
        }
    }
}

/// Forecast hours of the SO2 runs: every 6 h up to +48 h.
pub const DEFAULT_FORECAST_HOURS: [u32; 9] = [0, 6, 12, 18, 24, 30, 36, 42, 48];

/// An ordered, non-empty list of raster layers.
#[derive(Debug, Clone)]
pub struct ForecastSeries {
    layers: Vec<RasterLayer>,
}

impl ForecastSeries {
    pub fn new(layers: Vec<RasterLayer>) -> Result<Self> {
        if layers.is_empty() { return Err(ViewerError::EmptySeries) }
        Ok(ForecastSeries { layers })
    }

    /// One layer per forecast hour, in the given order.
    pub fn from_hours(title: &str, prefix: &str, hours: &[u32])
                      -> Result<Self> {
        Self::new(hours.iter().map(|&h| RasterLayer::new(title, prefix, h))
                  .collect())
    }

    /// The SO2 column mass series, `SO2_col_mass_000.tif` to
    /// `SO2_col_mass_048.tif`.
    pub fn so2() -> Self {
        let layers = DEFAULT_FORECAST_HOURS.iter()
            .map(|&h| RasterLayer::new("SO2 column mass [DU]",
                                       "SO2_col_mass_", h))
            .collect();
        ForecastSeries { layers }
    }

    #[inline]
    pub fn len(&self) -> usize { self.layers.len() }

    #[inline]
    pub fn layers(&self) -> &[RasterLayer] { &self.layers }

    pub fn get(&self, index: usize) -> Result<&RasterLayer> {
        self.layers.get(index).ok_or(ViewerError::IndexOutOfRange {
            index, len: self.layers.len() })
    }
}

/// Visibility flags of the raster layers stacked on the basemap.
///
/// Navigation only toggles visibility; layers are never rebuilt.
#[derive(Debug, Clone)]
pub struct LayerGroup {
    visible: Vec<bool>,
}

impl LayerGroup {
    /// A group of `len` layers where only the first one is visible.
    pub fn new(len: usize) -> Self {
        let mut visible = vec![false; len];
        if let Some(v) = visible.first_mut() { *v = true; }
        LayerGroup { visible }
    }

    /// Make layer `index` the only visible one.
    pub fn show_only(&mut self, index: usize) -> Result<()> {
        if index >= self.visible.len() {
            return Err(ViewerError::IndexOutOfRange {
                index, len: self.visible.len() });
        }
        for (i, v) in self.visible.iter_mut().enumerate() {
            *v = i == index;
        }
        Ok(())
    }

    #[inline]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Indices of the visible layers.
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().enumerate().filter(|(_, v)| **v).map(|(i, _)| i)
    }
}
