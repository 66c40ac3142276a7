//! Headless viewer state.
//!
//! A [`Viewer`] owns everything the page keeps between two user
//! actions: the series, which layer is visible, the current position,
//! the color stops shared by style and legend, and the cache of
//! already opened raster sources.

use tracing::info;

use crate::cache::SourceCache;
use crate::config::ViewerConfig;
use crate::legend::Legend;
use crate::metadata::{MetadataReader, RasterMetadata, TiffMetadataReader};
use crate::navigator::{Navigator, Position};
use crate::series::{ForecastSeries, LayerGroup, RasterLayer};
use crate::style::RampStyle;
use crate::Result;

/// A user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    GoTo(usize),
}

impl Action {
    /// Keyboard bindings: `ArrowLeft` goes back, `ArrowRight` and
    /// Space go forward.
    pub fn from_key(key: &str) -> Option<Action> {
        match key {
            "ArrowLeft" => Some(Action::Previous),
            "ArrowRight" | " " | "Space" => Some(Action::Next),
            _ => None,
        }
    }

    /// Navigation buttons, by element id.
    pub fn from_button(id: &str) -> Option<Action> {
        match id {
            "prevBtn" => Some(Action::Previous),
            "nextBtn" => Some(Action::Next),
            _ => None,
        }
    }
}

/// Text of the raster information panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterInfo {
    pub name: String,
    /// `Valid: <time>`.
    pub description: String,
    /// `i / n`, 1-based.
    pub index: String,
}

pub struct Viewer<R = TiffMetadataReader> {
    series: ForecastSeries,
    layers: LayerGroup,
    navigator: Navigator,
    style: RampStyle,
    legend: Legend,
    sources: SourceCache<RasterMetadata>,
    reader: R,
}

impl Viewer<TiffMetadataReader> {
    /// A viewer reading rasters from the configured directory.
    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        let reader = TiffMetadataReader::new(&config.series.raster_dir);
        Viewer::new(config, config.series.series()?, reader)
    }
}

impl<R: MetadataReader> Viewer<R> {
    pub fn new(config: &ViewerConfig, series: ForecastSeries, reader: R)
               -> Result<Self> {
        let stops = config.ramp.stops()?;
        let navigator = Navigator::new(series.len())?;
        let layers = LayerGroup::new(series.len());
        let legend = Legend::new(stops.clone(), config.legend.bar_width,
                                 config.legend.bar_height);
        let style = RampStyle::new(stops, config.ramp.band);
        Ok(Viewer { series, layers, navigator, style, legend,
                    sources: SourceCache::unbounded(), reader })
    }

    /// Replace the unbounded source cache.
    pub fn with_cache(mut self, sources: SourceCache<RasterMetadata>) -> Self {
        self.sources = sources;
        self
    }

    #[inline]
    pub fn series(&self) -> &ForecastSeries { &self.series }

    #[inline]
    pub fn layers(&self) -> &LayerGroup { &self.layers }

    #[inline]
    pub fn style(&self) -> &RampStyle { &self.style }

    #[inline]
    pub fn legend(&self) -> &Legend { &self.legend }

    #[inline]
    pub fn sources(&self) -> &SourceCache<RasterMetadata> { &self.sources }

    #[inline]
    pub fn position(&self) -> Position { self.navigator.position() }

    pub fn current_layer(&self) -> &RasterLayer {
        &self.series.layers()[self.navigator.index()]
    }

    /// Apply `action` and show the resulting layer.
    pub fn handle(&mut self, action: Action) -> Result<Position> {
        let position = match action {
            Action::Next => self.navigator.next(),
            Action::Previous => self.navigator.previous(),
            Action::GoTo(i) => self.navigator.go_to(i)?,
        };
        self.layers.show_only(position.index)?;
        info!(index = position.index, layer = %self.current_layer().name,
              "Switched raster");
        Ok(position)
    }

    /// Apply the action bound to `key`, if any.
    pub fn handle_key(&mut self, key: &str) -> Result<Option<Position>> {
        Action::from_key(key).map(|a| self.handle(a)).transpose()
    }

    /// Metadata of the current raster, read on first display only.
    pub fn metadata(&mut self) -> Result<&RasterMetadata> {
        let index = self.navigator.index();
        let layer = &self.series.layers()[index];
        let reader = &self.reader;
        self.sources.get_or_try_insert_with(index, || reader.read(layer))
    }

    /// Contents of the information panel for the current raster.
    pub fn info(&mut self) -> Result<RasterInfo> {
        let position = self.position();
        let name = self.current_layer().name.clone();
        let description = self.metadata()?.description();
        Ok(RasterInfo { name, description, index: position.to_string() })
    }
}
