//! Browse a series of GeoTIFF files written to a temporary directory.

use std::fs::File;
use std::path::Path;

use tempfile::TempDir;
use tiff::encoder::{colortype, TiffEncoder};
use tiff::tags::Tag;

use so2_viewer::metadata::GDAL_METADATA_TAG;
use so2_viewer::{Action, MetadataReader, RasterLayer, TiffMetadataReader,
                 Viewer, ViewerConfig, ViewerError};

fn write_raster(path: &Path, metadata: Option<&str>) {
    let mut file = File::create(path).unwrap();
    let mut tiff = TiffEncoder::new(&mut file).unwrap();
    let mut image = tiff.new_image::<colortype::Gray8>(2, 2).unwrap();
    if let Some(xml) = metadata {
        image.encoder()
            .write_tag(Tag::Unknown(GDAL_METADATA_TAG), xml)
            .unwrap();
    }
    image.write_data(&[0u8, 1, 2, 3]).unwrap();
}

fn gdal_xml(time: &str) -> String {
    format!("<GDALMetadata>\n  <Item name=\"time\">{time}</Item>\n  \
             <Item name=\"created\">2024-05-29 23:14 UTC</Item>\n\
             </GDALMetadata>\n")
}

fn config_for(dir: &TempDir, hours: &[u32]) -> ViewerConfig {
    let mut config = ViewerConfig::default();
    config.series.raster_dir = dir.path().to_path_buf();
    config.series.forecast_hours = hours.to_vec();
    config
}

#[test]
fn reads_gdal_metadata_tag() {
    let dir = TempDir::new().unwrap();
    let layer = RasterLayer::new("SO2 column mass [DU]", "SO2_col_mass_", 6);
    write_raster(&dir.path().join(&layer.base),
                 Some(&gdal_xml("2024-05-30 06:00 UTC")));

    let reader = TiffMetadataReader::new(dir.path());
    let m = reader.read(&layer).unwrap();
    assert_eq!(m.time, "2024-05-30 06:00 UTC");
    assert_eq!(m.created.as_deref(), Some("2024-05-29 23:14 UTC"));
}

#[test]
fn raster_without_metadata_tag() {
    let dir = TempDir::new().unwrap();
    let layer = RasterLayer::new("SO2", "SO2_col_mass_", 0);
    write_raster(&dir.path().join(&layer.base), None);
    let reader = TiffMetadataReader::new(dir.path());
    assert!(matches!(reader.read(&layer),
                     Err(ViewerError::MissingMetadata(_))));
}

#[test]
fn not_a_tiff() {
    let dir = TempDir::new().unwrap();
    let layer = RasterLayer::new("SO2", "SO2_col_mass_", 0);
    std::fs::write(dir.path().join(&layer.base), b"<html>404</html>").unwrap();
    let reader = TiffMetadataReader::new(dir.path());
    assert!(matches!(reader.read(&layer), Err(ViewerError::Metadata(_))));
}

#[test]
fn browse_series_from_config() {
    let dir = TempDir::new().unwrap();
    let hours = [0, 6, 12];
    for h in hours {
        write_raster(&dir.path().join(format!("SO2_col_mass_{h:03}.tif")),
                     Some(&gdal_xml(&format!("day 1 +{h}h"))));
    }
    let mut viewer = Viewer::from_config(&config_for(&dir, &hours)).unwrap();

    let info = viewer.info().unwrap();
    assert_eq!(info.name, "SO2 column mass [DU] +00h FCST");
    assert_eq!(info.description, "Valid: day 1 +0h");
    assert_eq!(info.index, "1 / 3");

    viewer.handle_key("ArrowLeft").unwrap();
    let info = viewer.info().unwrap();
    assert_eq!(info.index, "3 / 3");
    assert_eq!(info.description, "Valid: day 1 +12h");

    viewer.handle_key(" ").unwrap();
    assert_eq!(viewer.info().unwrap().index, "1 / 3");
    assert_eq!(viewer.sources().len(), 2);
}

#[test]
fn missing_raster_is_a_fetch_error() {
    let dir = TempDir::new().unwrap();
    write_raster(&dir.path().join("SO2_col_mass_000.tif"),
                 Some(&gdal_xml("t0")));
    let mut viewer = Viewer::from_config(&config_for(&dir, &[0, 6])).unwrap();
    assert!(viewer.info().is_ok());
    viewer.handle(Action::Next).unwrap();
    match viewer.info() {
        Err(ViewerError::Fetch { path, .. }) => {
            assert!(path.ends_with("SO2_col_mass_006.tif"));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[test]
fn config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("viewer.json");
    std::fs::write(&path, r#"{
        "ramp": {"palette": "YlOrRd", "min": 0.1, "alpha": 0.6},
        "legend": {"bar_height": 110},
        "series": {"forecast_hours": [0, 3, 6]}
    }"#).unwrap();
    let config = ViewerConfig::from_file(&path).unwrap();
    assert_eq!(config.series.series().unwrap().len(), 3);

    let mut viewer = Viewer::from_config(&config).unwrap();
    let legend = viewer.legend();
    assert_eq!(legend.segments()[0].label, "0.1");
    assert_eq!(legend.segments()[0].height, 10.);
    assert_eq!(viewer.style().stops(), legend.stops());
    assert_eq!(viewer.handle(Action::GoTo(2)).unwrap().to_string(), "3 / 3");
}
