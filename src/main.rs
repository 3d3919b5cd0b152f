use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing::{debug, info};

use pocket2bookmark::cli::{self, Args, CliConfig, CliUtils, StatsFormat};
use pocket2bookmark::conversion::{ConversionEngine, ConversionStatistics};
use pocket2bookmark::ConversionError;

fn main() {
    let args = Args::parse();
    cli::init_logging(args.verbose, args.quiet);

    if let Err(error) = run(args) {
        match error.downcast_ref::<ConversionError>() {
            Some(conversion_error) => cli::handle_error(conversion_error),
            None => CliUtils::show_error(&format!("{:#}", error)),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let start_time = Instant::now();
    let cli_config = CliConfig::from_args(args)?;
    let source = cli_config.source();
    let target = cli_config.target();

    debug!(
        input = %cli_config.input_description(),
        output = %cli_config.output_description(),
        "starting conversion"
    );

    if target.overwrites(&source) && !cli_config.args.force {
        anyhow::bail!(
            "refusing to overwrite input {} without --force",
            cli_config.output_description()
        );
    }

    let engine = ConversionEngine::new(cli_config.conversion_config.clone());
    let document = engine.convert_from_source(&source, &cli_config.subtitle())?;

    target
        .write(&document.content)
        .with_context(|| format!("writing {}", cli_config.output_description()))?;

    info!(records = document.metadata.record_count, "conversion finished");

    if cli_config.want_stats() {
        let stats = ConversionStatistics::from_metadata(&document.metadata, start_time.elapsed());
        output_statistics(&stats, cli_config.args.stats_format)?;
    }

    if matches!(target, cli::output::OutputTarget::File(_)) {
        CliUtils::show_success(
            &format!(
                "Converted {} bookmark(s) to: {} ({}, {})",
                document.metadata.record_count,
                cli_config.output_description(),
                CliUtils::format_file_size(document.metadata.output_size),
                CliUtils::format_duration(start_time.elapsed())
            ),
            cli_config.is_quiet(),
        );
    }

    Ok(())
}

fn output_statistics(stats: &ConversionStatistics, format: StatsFormat) -> Result<()> {
    match format {
        StatsFormat::Json => eprintln!("{}", stats.to_json().context("serializing statistics")?),
        StatsFormat::Text => eprintln!("{}", stats.summary()),
    }

    Ok(())
}
