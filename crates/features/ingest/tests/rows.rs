use chrono::{TimeZone, Utc};
use fp_domain::geojson::Origin;
use fp_domain::{Category, Region};
use fp_ingest::{IngestError, JsonRowsSource, probe};
use fp_synthesis::{BuildingSource, DatasetAssembler, FixedClock};
use std::fs;
use std::path::Path;

const ROWS: &str = r#"[
  {
    "latitude": 10.2897,
    "longitude": 11.1672,
    "area_in_meters": 64.5,
    "confidence": 0.8123,
    "geometry": "POLYGON((11.16716 10.28966, 11.16724 10.28966, 11.16724 10.28974, 11.16716 10.28974, 11.16716 10.28966))"
  },
  {
    "latitude": 10.30,
    "longitude": 11.18,
    "area_in_meters": 1720.0,
    "confidence": 0.9,
    "geometry": "POLYGON((11.1798 10.2998, 11.1802 10.2998, 11.1802 10.3002, 11.1798 10.3002))"
  },
  {
    "latitude": 10.31,
    "longitude": 11.14,
    "area_in_meters": 120.0,
    "confidence": 0.7,
    "geometry": "LINESTRING(11.1 10.3, 11.2 10.3)"
  },
  {
    "latitude": 10.31,
    "longitude": 11.14,
    "area_in_meters": -5.0,
    "confidence": 0.7,
    "geometry": "POLYGON((11.1 10.3, 11.2 10.3, 11.2 10.4, 11.1 10.3))"
  }
]"#;

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn unusable_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonRowsSource::open(write(dir.path(), "rows.json", ROWS)).unwrap();

    let rows = source.fetch(&Region::GOMBE).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].geometry.len(), 5);
    assert_eq!(rows[1].geometry.len(), 5, "open ring gets closed");
    assert_eq!(rows[1].geometry[0], rows[1].geometry[4]);
}

#[test]
fn malformed_file_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonRowsSource::open(write(dir.path(), "rows.json", "{\"not\": \"an array\"}")).unwrap();

    let err = source.read_rows().unwrap_err();
    assert!(matches!(err, IngestError::Json { .. }));

    let err = source.fetch(&Region::GOMBE).unwrap_err();
    assert_eq!(err.kind(), "Unavailable");
}

#[test]
fn open_requires_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonRowsSource::open(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.kind(), "Unavailable");

    let err = JsonRowsSource::open(dir.path()).unwrap_err();
    assert_eq!(err.kind(), "Unavailable");
}

#[test]
fn probe_reports_capability() {
    assert!(!probe(None).is_available());

    let dir = tempfile::tempdir().unwrap();
    assert!(!probe(Some(dir.path().join("missing.json").as_path())).is_available());

    let path = write(dir.path(), "rows.json", ROWS);
    assert!(probe(Some(path.as_path())).is_available());
}

#[test]
fn probed_source_feeds_the_assembler() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "rows.json", ROWS);

    let mut assembler = DatasetAssembler::builder()
        .seed(9)
        .clock(FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()))
        .build()
        .unwrap();
    let collection = assembler.assemble(100, probe(Some(path.as_path()))).unwrap();

    assert_eq!(collection.metadata.origin, Origin::External);
    assert!(collection.is_consistent());
    assert_eq!(collection.len(), 2);

    let first = &collection.features[0].properties;
    assert_eq!(first.id, "ob_1");
    assert_eq!(first.confidence, 81);
    assert_eq!(first.classification, Category::Residential);
    assert_eq!(first.location, "Gombe Central");

    let second = &collection.features[1].properties;
    assert_eq!(second.classification, Category::Industrial);
    assert_eq!(second.location, "Herwagana");
}

#[test]
fn broken_file_falls_back_to_synthesis() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "rows.json", "not json");

    let mut assembler = DatasetAssembler::builder().seed(9).build().unwrap();
    let collection = assembler.assemble(10, probe(Some(path.as_path()))).unwrap();

    assert_eq!(collection.metadata.origin, Origin::Synthetic);
    assert_eq!(collection.len(), 10);
}
