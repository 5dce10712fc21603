use clap::Parser;
use std::path::PathBuf;

pub(crate) const DEFAULT_COUNT: usize = 12_847;
pub(crate) const DEFAULT_OUTPUT: &str = "public/data/buildings/gombe_buildings.geojson";

/// Generate a GeoJSON dataset of building footprints for a region.
///
/// Uses an external building export when `--source` points at one, and
/// synthesizes buildings around settlement clusters otherwise.
#[derive(Debug, Parser)]
#[command(name = "footprints", version, about)]
pub(crate) struct Cli {
    /// Number of buildings to produce.
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub(crate) count: usize,

    /// Where to write the FeatureCollection.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub(crate) output: PathBuf,

    /// Seed for reproducible output. A random seed is used and recorded otherwise.
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Generator config file (TOML, JSON or YAML). `FOOTPRINT__*` variables override it.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Scatter buildings around a single settlement cluster. Matched by name,
    /// case-insensitive; a fragment picks the first cluster containing it.
    #[arg(long, value_name = "NAME")]
    pub(crate) cluster: Option<String>,

    /// JSON export of external building rows.
    #[arg(long)]
    pub(crate) source: Option<PathBuf>,

    /// Also write daily-rotated log files into this directory.
    #[arg(long)]
    pub(crate) log_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}
