use chrono::{TimeZone, Utc};
use fp_domain::geojson::Origin;
use fp_domain::{Category, LonLat, Region, Ring};
use fp_synthesis::polygon::rectangle;
use fp_synthesis::{
    BuildingSource, DatasetAssembler, FixedClock, RawBuildingRow, Result, SourceCapability,
    SynthesisError,
};

#[derive(Debug)]
struct InMemorySource(Vec<RawBuildingRow>);

impl BuildingSource for InMemorySource {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn fetch(&self, _region: &Region) -> Result<Vec<RawBuildingRow>> {
        Ok(self.0.clone())
    }
}

#[derive(Debug)]
struct BrokenSource;

impl BuildingSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    fn fetch(&self, _region: &Region) -> Result<Vec<RawBuildingRow>> {
        Err(SynthesisError::unavailable("dataset not downloaded"))
    }
}

fn row(lon: f64, lat: f64, area: f64, confidence: f64) -> RawBuildingRow {
    let geometry: Ring = rectangle(LonLat::new(lon, lat), 0.0002, 0.0002);
    RawBuildingRow { latitude: lat, longitude: lon, area_in_meters: area, confidence, geometry }
}

fn assembler() -> DatasetAssembler {
    DatasetAssembler::builder()
        .seed(5)
        .clock(FixedClock(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()))
        .build()
        .unwrap()
}

#[test]
fn rows_are_filtered_capped_and_reshaped() {
    let source = InMemorySource(vec![
        row(11.1672, 10.2897, 80.0, 0.91),
        row(3.3792, 6.5244, 150.0, 0.80),
        row(11.2450, 10.3250, 1200.0, 0.75),
        row(11.35, 10.45, 2000.0, 88.0),
        row(11.15, 10.28, 400.0, 0.70),
    ]);

    let collection = assembler().assemble(3, SourceCapability::available(source)).unwrap();

    assert!(collection.is_consistent());
    assert_eq!(collection.metadata.origin, Origin::External);
    assert_eq!(collection.metadata.seed, None);

    let props: Vec<_> = collection.features.iter().map(|f| &f.properties).collect();
    assert_eq!(props.len(), 3);
    assert_eq!(
        props.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        ["ob_1", "ob_2", "ob_3"]
    );

    assert_eq!(props[0].classification, Category::Residential);
    assert_eq!(props[0].confidence, 91);
    assert_eq!(props[0].location, "Gombe Central");
    assert_eq!(props[0].estimated_value, 12_000_000);
    assert_eq!(props[0].source, "Google Open Buildings v3");

    assert_eq!(props[1].classification, Category::Institutional);
    assert_eq!(props[1].location, "Bajoga");

    // bbox is inclusive on its edges
    assert_eq!(props[2].longitude, 11.35);
    assert_eq!(props[2].classification, Category::Industrial);
    assert_eq!(props[2].confidence, 88);
}

#[test]
fn oversized_rows_saturate_the_value_total() {
    let source = InMemorySource(vec![
        row(11.1672, 10.2897, 1e30, 0.9),
        row(11.2450, 10.3250, 1e30, 0.9),
    ]);

    let collection = assembler().assemble(2, SourceCapability::available(source)).unwrap();

    assert!(collection.is_consistent());
    assert_eq!(collection.metadata.origin, Origin::External);
    assert!(collection.features.iter().all(|f| f.properties.estimated_value == u64::MAX));
    assert_eq!(collection.metadata.summary.total_estimated_value, u64::MAX);
}

#[test]
fn failing_source_falls_back_to_synthesis() {
    let collection = assembler().assemble(20, SourceCapability::available(BrokenSource)).unwrap();

    assert_eq!(collection.metadata.origin, Origin::Synthetic);
    assert_eq!(collection.len(), 20);
    assert_eq!(collection.features[0].properties.id, "building_1");
}

#[test]
fn source_without_rows_in_region_falls_back() {
    let lagos_only = InMemorySource(vec![row(3.3792, 6.5244, 150.0, 0.8)]);
    let collection = assembler().assemble(5, SourceCapability::available(lagos_only)).unwrap();

    assert_eq!(collection.metadata.origin, Origin::Synthetic);
    assert_eq!(collection.len(), 5);
}

#[test]
fn unavailable_capability_matches_plain_generation() {
    let via_assemble =
        assembler().assemble(40, SourceCapability::unavailable("no --source given")).unwrap();
    let via_generate = assembler().generate(40).unwrap();

    assert_eq!(via_assemble, via_generate);
}
