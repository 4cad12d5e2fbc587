//! Species data compiler entry point.
//!
//! Parses the command line, loads the constant tables, registry and tutor
//! schema, compiles every species in memory and commits the outputs. Any
//! failure is logged with its cause chain and the process exits nonzero
//! without touching the output files.

use anyhow::{Context, Result};
use species_datagen::{Compiler, DatagenConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = DatagenConfig::from_args();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &DatagenConfig) -> Result<()> {
    tracing::info!(
        "Species datagen starting: root={:?}, out={:?}",
        config.root_dir,
        config.out_dir
    );

    let constants = config.constants().context("loading constant tables")?;
    let registry = config.registry().context("reading species registry")?;
    let tutor_schema = config.tutor_schema().context("reading tutor schema")?;
    let source = config.source();

    let compiler = Compiler::new(&constants, &source, &tutor_schema)?;
    let output = compiler.compile(&registry)?;
    output
        .commit(&config.out_dir)
        .with_context(|| format!("writing outputs to {}", config.out_dir.display()))?;

    tracing::info!(
        "Species datagen finished: {} species, {} archives",
        output.entity_count(),
        output.archives().len()
    );
    Ok(())
}
