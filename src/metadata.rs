//! Embedded raster metadata.
//!
//! The forecast rasters carry their validity time in the GDAL metadata
//! TIFF tag, an XML document of the form:
//!
//! ```xml
//! <GDALMetadata>
//!   <Item name="time">2024-05-30 06:00 UTC</Item>
//!   <Item name="created">2024-05-29 23:14 UTC</Item>
//!   <Item name="STATISTICS_MAX" sample="0">18.2</Item>
//! </GDALMetadata>
//! ```
//!
//! Only dataset-level items (without a `sample` attribute) are kept.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tiff::decoder::Decoder;
use tiff::tags::Tag;
use tracing::{debug, warn};

use crate::series::RasterLayer;
use crate::{Result, ViewerError};

/// TIFF tag holding the GDAL metadata XML.
pub const GDAL_METADATA_TAG: u16 = 42112;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterMetadata {
    /// Validity time of the forecast step.
    pub time: String,
    /// Production time of the forecast run.
    pub created: Option<String>,
    /// All dataset-level items, by name.
    pub items: BTreeMap<String, String>,
}

impl RasterMetadata {
    /// Parse a GDAL metadata document.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Metadata`] on malformed XML and
    /// [`ViewerError::MissingMetadata`] if there is no `time` item.
    pub fn from_gdal_xml(xml: &str) -> Result<Self> {
        let items = parse_items(xml)?;
        let time = items.get("time").cloned()
            .ok_or(ViewerError::MissingMetadata("time"))?;
        let created = items.get("created").cloned();
        Ok(RasterMetadata { time, created, items })
    }

    /// Label shown under the layer name.
    pub fn description(&self) -> String { format!("Valid: {}", self.time) }
}

struct Item {
    name: Option<String>,
    band_level: bool,
    value: String,
}

fn start_item(e: &BytesStart) -> Result<Item> {
    let mut item = Item { name: None, band_level: false, value: String::new() };
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ViewerError::Metadata(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => item.name = Some(attr.unescape_value()?.into_owned()),
            b"sample" => item.band_level = true,
            _ => {}
        }
    }
    Ok(item)
}

fn parse_items(xml: &str) -> Result<BTreeMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut items = BTreeMap::new();
    let mut current: Option<Item> = None;
    let mut keep = |item: Item| match item {
        Item { name: Some(name), band_level: false, value } => {
            items.insert(name, value);
        }
        Item { name: None, .. } => warn!("GDAL metadata item without a name"),
        _ => {}
    };
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"Item" => {
                current = Some(start_item(&e)?);
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"Item" => {
                keep(start_item(&e)?);
            }
            Ok(Event::Text(t)) => {
                if let Some(item) = current.as_mut() {
                    item.value.push_str(&t.unescape()?);
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"Item" => {
                if let Some(item) = current.take() { keep(item); }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ViewerError::Metadata(format!(
                "XML parsing error at position {}: {}",
                reader.buffer_position(), e))),
            _ => {}
        }
    }
    drop(keep);
    Ok(items)
}

/// Reads the metadata of a raster layer.
pub trait MetadataReader {
    fn read(&self, layer: &RasterLayer) -> Result<RasterMetadata>;
}

/// Reads the GDAL metadata tag of GeoTIFF files under a directory.
#[derive(Debug, Clone)]
pub struct TiffMetadataReader {
    root: PathBuf,
}

impl TiffMetadataReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        TiffMetadataReader { root: root.into() }
    }

    /// Location of the raster file of `layer`.
    pub fn path(&self, layer: &RasterLayer) -> PathBuf {
        self.root.join(&layer.base)
    }

    /// Read the GDAL metadata XML of the first image of `path`.
    pub fn read_xml(path: &Path) -> Result<String> {
        let file = File::open(path).map_err(|source| ViewerError::Fetch {
            path: path.to_path_buf(), source })?;
        let mut decoder = Decoder::new(BufReader::new(file))?;
        let tag = Tag::from_u16_exhaustive(GDAL_METADATA_TAG);
        match decoder.find_tag(tag)? {
            Some(value) => Ok(value.into_string()?),
            None => Err(ViewerError::MissingMetadata("GDAL_METADATA")),
        }
    }
}

impl MetadataReader for TiffMetadataReader {
    fn read(&self, layer: &RasterLayer) -> Result<RasterMetadata> {
        let path = self.path(layer);
        debug!(path = %path.display(), "Reading raster metadata");
        let xml = Self::read_xml(&path)?;
        RasterMetadata::from_gdal_xml(&xml)
    }
}
