use fp_kernel::config::{ConfigLoader, load_config};
use fp_kernel::domain::Category;
use fp_kernel::domain::config::GeneratorConfig;
use std::fs;

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("footprint.toml");
    fs::write(
        &path,
        r#"
[region]
min_lon = 3.0
max_lon = 3.6
min_lat = 6.3
max_lat = 6.8

[[clusters]]
name = "Ikeja"
lon = 3.35
lat = 6.6
density = 2.0

[valuation]
commercial = 450000

[labels]
region = "Lagos State, Nigeria"
"#,
    )
    .unwrap();

    let cfg: GeneratorConfig =
        ConfigLoader::new().file(&path).env_source(Default::default()).load().unwrap();

    assert_eq!(cfg.region.max_lon, 3.6);
    assert_eq!(cfg.clusters.len(), 1);
    assert_eq!(cfg.valuation.rate(Category::Commercial), 450_000);
    assert_eq!(cfg.valuation.rate(Category::Residential), 150_000);
    assert_eq!(cfg.labels.region, "Lagos State, Nigeria");
    assert_eq!(cfg.classification.bands.len(), 6);
}

#[test]
fn json_file_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("footprint.json");
    fs::write(&path, r#"{ "polygon": { "rotate": true } }"#).unwrap();

    let cfg: GeneratorConfig = load_config(Some(&path)).unwrap();
    assert!(cfg.polygon.rotate);
}

#[test]
fn mistyped_value_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("footprint.toml");
    fs::write(&path, "[polygon]\nrotate = \"sideways\"\n").unwrap();

    let err = ConfigLoader::new()
        .file(&path)
        .env_source(Default::default())
        .load::<GeneratorConfig>()
        .unwrap_err();
    assert_eq!(err.kind(), "Config");
    assert!(err.to_string().contains("Failed to deserialize config"));
}
