//! Viewer configuration.
//!
//! Loaded from a JSON file; every field has a default so a partial (or
//! empty) document is valid.  Secrets such as the basemap API key are
//! never stored in the file, only the name of the environment variable
//! holding them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::series::{ForecastSeries, DEFAULT_FORECAST_HOURS};
use crate::stops::{ColorStops, Domain};
use crate::{Palette, Result, ViewerError};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub ramp: RampConfig,
    pub legend: LegendConfig,
    pub series: SeriesConfig,
    pub basemap: BasemapConfig,
    pub view: ViewConfig,
}

/// Color ramp of the raster layers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RampConfig {
    pub palette: String,
    /// Display threshold; lower values are transparent.
    pub min: f64,
    pub max: f64,
    pub steps: usize,
    /// Opacity of the raster colors.
    pub alpha: f64,
    /// 1-based raster band the ramp reads.
    pub band: u32,
}

impl Default for RampConfig {
    fn default() -> Self {
        RampConfig { palette: "RdBu".to_string(), min: 1., max: 20.,
                     steps: 11, alpha: 0.5, band: 1 }
    }
}

impl RampConfig {
    pub fn domain(&self) -> Result<Domain> {
        Domain::new(self.min, self.max, self.steps)
    }

    pub fn stops(&self) -> Result<ColorStops> {
        ColorStops::new(&Palette::by_name(&self.palette)?, self.domain()?,
                        self.alpha)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LegendConfig {
    pub bar_width: u32,
    pub bar_height: u32,
}

impl Default for LegendConfig {
    fn default() -> Self { LegendConfig { bar_width: 20, bar_height: 200 } }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub title: String,
    /// File name prefix, followed by the 3-digit forecast hour.
    pub prefix: String,
    pub raster_dir: PathBuf,
    pub forecast_hours: Vec<u32>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            title: "SO2 column mass [DU]".to_string(),
            prefix: "SO2_col_mass_".to_string(),
            raster_dir: PathBuf::from("."),
            forecast_hours: DEFAULT_FORECAST_HOURS.to_vec(),
        }
    }
}

impl SeriesConfig {
    pub fn series(&self) -> Result<ForecastSeries> {
        ForecastSeries::from_hours(&self.title, &self.prefix,
                                   &self.forecast_hours)
    }
}

/// Basemap tile service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BasemapConfig {
    /// XYZ URL template; `{key}` is replaced by the API key.
    pub url: String,
    pub attribution: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for BasemapConfig {
    fn default() -> Self {
        BasemapConfig {
            url: "https://api.maptiler.com/maps/dataviz/{z}/{x}/{y}.png?key={key}"
                .to_string(),
            attribution: "© MapTiler © OpenStreetMap contributors".to_string(),
            api_key_env: "MAPTILER_API_KEY".to_string(),
        }
    }
}

impl BasemapConfig {
    /// The tile URL template with the API key filled in from the
    /// environment.
    pub fn tile_url(&self) -> Result<String> {
        self.tile_url_with(|name| std::env::var(name).ok())
    }

    /// Same as [`BasemapConfig::tile_url`] with an explicit lookup.
    pub fn tile_url_with(&self, lookup: impl Fn(&str) -> Option<String>)
                         -> Result<String> {
        if !self.url.contains("{key}") { return Ok(self.url.clone()) }
        let key = lookup(&self.api_key_env)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ViewerError::Config(format!(
                "basemap API key not set: {}", self.api_key_env)))?;
        Ok(self.url.replace("{key}", &key))
    }
}

/// Initial map view.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    /// `[longitude, latitude]` in degrees.
    pub center: [f64; 2],
    pub zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self { ViewConfig { center: [-18., 65.], zoom: 4. } }
}

impl ViewerConfig {
    /// Load configuration from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ViewerError::Config(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Check the ramp can be built and the series is not empty.
    pub fn validate(&self) -> Result<()> {
        self.ramp.stops()?;
        if self.series.forecast_hours.is_empty() {
            return Err(ViewerError::EmptySeries);
        }
        if self.legend.bar_width == 0 || self.legend.bar_height == 0 {
            return Err(ViewerError::Config("legend bar must not be empty".into()));
        }
        Ok(())
    }
}
