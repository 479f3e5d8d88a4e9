#[macro_use]
extern crate log;

use std::io::prelude::*;

use anyhow::{Context, Result};
use clap::Parser;

use seqio::io::{get_writer, open_fasta, until_err};
use seqio::FastaSummary;

mod cli;

use cli::{Cli, Commands};

/// Writes `identifier<TAB>length` for every record in `input`.
fn list_ids(input: &str, writer: &mut impl Write) -> Result<()> {
    let reader = open_fasta(input)?;

    // Start with a placeholder error object. This will be mutated if reading stops early.
    let mut err = Ok(());

    reader
        .records()
        .scan(&mut err, until_err)
        .try_for_each(|rec| -> Result<()> {
            writer.write_all(rec.identifier())?;
            writeln!(writer, "\t{}", rec.len())?;
            Ok(())
        })?;

    err.with_context(|| format!("Unable to read {input}"))?;
    writer.flush()?;
    Ok(())
}

fn write_stats(input: &str, writer: &mut impl Write, pretty: bool) -> Result<()> {
    let mut reader = open_fasta(input)?;
    let summary = FastaSummary::from_reader(&mut reader, input)
        .with_context(|| format!("Unable to read {input}"))?;

    info!(
        "{} records, {} bases",
        summary.record_count, summary.total_bases
    );

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &summary)?;
    } else {
        serde_json::to_writer(&mut *writer, &summary)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    debug!("seqio v{}", cli::VERSION);

    match &cli.command {
        Commands::Ids { file, output } => {
            let mut writer = get_writer(output)?;
            list_ids(file, &mut writer)?;
        }
        Commands::Stats {
            file,
            output,
            pretty,
        } => {
            let mut writer = get_writer(output)?;
            write_stats(file, &mut writer, *pretty)?;
            info!("Completed successfully.")
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
