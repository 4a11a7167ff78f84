use crate::driver::Record;
use crate::error::Result;
use crate::output::SampleWriter;
use crate::shared::SharedReservoir;
use clap::ValueEnum;
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;
use std::io::Write;
use std::sync::mpsc::{self, Receiver};
use tracing::{info, warn};

/// What to do when the operator interrupts a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InterruptMode {
    /// Print the sample so far and keep reading.
    #[default]
    Peek,
    /// Print the sample so far and stop.
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// An interrupt arrived in `InterruptMode::Exit`; the caller should terminate.
    Exit,
    /// The signal channel was closed.
    Closed,
}

/// Routes every Ctrl-C into the returned channel instead of killing the process.
///
/// Can only be called once per process.
pub fn install() -> Result<Receiver<()>> {
    let (sender, receiver) = mpsc::channel();

    ctrlc::set_handler(move || {
        if sender.send(()).is_err() {
            warn!("interrupt received after the watcher stopped");
        }
    })?;

    Ok(receiver)
}

pub struct Watcher<R = Xoshiro256StarStar> {
    reservoir: SharedReservoir<Record, R>,
    writer: SampleWriter,
    mode: InterruptMode,
}

impl<R: Rng> Watcher<R> {
    pub fn new(
        reservoir: SharedReservoir<Record, R>,
        writer: SampleWriter,
        mode: InterruptMode,
    ) -> Watcher<R> {
        Watcher {
            reservoir,
            writer,
            mode,
        }
    }

    /// Blocks until the next interrupt, then writes a snapshot of the reservoir to
    /// `out`. Loops in `InterruptMode::Peek` and returns after the first snapshot in
    /// `InterruptMode::Exit`.
    pub fn watch<W: Write>(&self, signals: Receiver<()>, mut out: W) -> Result<Stop> {
        for () in signals {
            let snapshot = self.reservoir.snapshot();
            let emitted = self.writer.write(&mut out, &snapshot.records)?;

            info!(seen = snapshot.seen, emitted, mode = ?self.mode, "interrupted");

            if self.mode == InterruptMode::Exit {
                return Ok(Stop::Exit);
            }
        }

        Ok(Stop::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::reservoir::Reservoir;

    fn watcher(mode: InterruptMode) -> (SharedReservoir<Record>, Watcher) {
        let reservoir = SharedReservoir::new(Reservoir::with_seed(3, 5).unwrap());
        let watcher = Watcher::new(reservoir.clone(), SampleWriter::new(OutputFormat::Plain), mode);
        (reservoir, watcher)
    }

    #[test]
    fn peek_prints_on_every_interrupt() {
        let (reservoir, watcher) = watcher(InterruptMode::Peek);
        reservoir.add(b"x".to_vec());
        reservoir.add(b"y".to_vec());

        let (sender, receiver) = mpsc::channel();
        sender.send(()).unwrap();
        sender.send(()).unwrap();
        drop(sender);

        let mut out = Vec::new();
        assert_eq!(watcher.watch(receiver, &mut out).unwrap(), Stop::Closed);
        assert_eq!(out, b"x\ny\nx\ny\n");
    }

    #[test]
    fn exit_prints_once_and_stops() {
        let (reservoir, watcher) = watcher(InterruptMode::Exit);
        reservoir.add(b"only".to_vec());

        let (sender, receiver) = mpsc::channel();
        sender.send(()).unwrap();
        sender.send(()).unwrap();

        let mut out = Vec::new();
        assert_eq!(watcher.watch(receiver, &mut out).unwrap(), Stop::Exit);
        assert_eq!(out, b"only\n");
    }

    #[test]
    fn interrupt_before_any_input_prints_nothing() {
        let (_reservoir, watcher) = watcher(InterruptMode::Peek);

        let (sender, receiver) = mpsc::channel();
        sender.send(()).unwrap();
        drop(sender);

        let mut out = Vec::new();
        watcher.watch(receiver, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
