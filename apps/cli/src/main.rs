mod cli;
mod report;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use footprint::domain::ClusterTable;
use footprint::domain::config::GeneratorConfig;
use footprint::kernel::config::load_config;
use footprint::kernel::output::write_collection;
use footprint::synthesis::DatasetAssembler;
use fp_logger::Logger;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let builder = Logger::builder().name("footprints").verbosity(cli.verbose);
    let _log = match &cli.log_dir {
        Some(dir) => builder.path(dir).init()?,
        None => builder.init()?,
    };

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config: GeneratorConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    if let Some(name) = &cli.cluster {
        let cluster = config
            .clusters
            .find(name)
            .cloned()
            .with_context(|| format!("No settlement cluster matches '{name}'"))?;
        info!(cluster = %cluster.name, "Restricting generation to one settlement");
        config.clusters = ClusterTable::new(vec![cluster]);
    }

    let mut builder = DatasetAssembler::builder().config(config);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut assembler = builder.build().context("Invalid generator configuration")?;

    let region = assembler.config().region;
    info!(
        count = cli.count,
        seed = assembler.seed(),
        lon = %format!("{:.4}..{:.4}", region.min_lon, region.max_lon),
        lat = %format!("{:.4}..{:.4}", region.min_lat, region.max_lat),
        "Starting footprint generation"
    );

    let capability = footprint::capability(cli.source.as_deref());
    let collection = assembler.assemble(cli.count, capability).context("Generation failed")?;

    let bytes = write_collection(&cli.output, &collection)
        .with_context(|| format!("Writing {}", cli.output.display()))?;

    report::log_summary(&collection, &cli.output, bytes);
    Ok(())
}
