use anyhow::{Context, Result};
use clap::Parser;
use rsampling::config::{Cli, Config};
use rsampling::interrupt::{self, Stop, Watcher};
use rsampling::output::SampleWriter;
use rsampling::{Driver, Reservoir, SharedReservoir};
use std::io;
use std::thread;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the sample.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    init_tracing(config.verbose);
    debug!(?config, "starting");

    let reservoir = SharedReservoir::new(Reservoir::with_seed(config.size.get(), config.seed)?);
    let writer = SampleWriter::new(config.format);

    let signals = interrupt::install().context("could not listen for Ctrl-C")?;
    let watcher = Watcher::new(reservoir.clone(), writer, config.on_interrupt);

    thread::spawn(move || match watcher.watch(signals, io::stdout()) {
        Ok(Stop::Exit) => std::process::exit(0),
        Ok(Stop::Closed) => {}
        Err(err) => {
            error!("could not print sample on interrupt: {:#}", anyhow::Error::from(err));
            std::process::exit(1);
        }
    });

    let stdin = io::stdin();
    Driver::new(reservoir, writer, config.trim)
        .run(stdin.lock(), io::stdout())
        .context("sampling stdin failed")?;

    Ok(())
}
