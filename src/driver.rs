use crate::error::{Error, Result};
use crate::output::SampleWriter;
use crate::shared::SharedReservoir;
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;
use std::io::{BufRead, Write};
use tracing::info;

/// A single input line, with its terminator removed.
pub type Record = Vec<u8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub seen: u64,
    pub emitted: usize,
}

/// Feeds every line of an input stream into a reservoir and writes the sample once
/// the stream is exhausted.
pub struct Driver<R = Xoshiro256StarStar> {
    reservoir: SharedReservoir<Record, R>,
    writer: SampleWriter,
    trim: bool,
}

impl<R: Rng> Driver<R> {
    pub fn new(
        reservoir: SharedReservoir<Record, R>,
        writer: SampleWriter,
        trim: bool,
    ) -> Driver<R> {
        Driver {
            reservoir,
            writer,
            trim,
        }
    }

    pub fn run<I: BufRead, W: Write>(&self, mut input: I, mut output: W) -> Result<RunSummary> {
        let mut line = Vec::new();

        loop {
            line.clear();

            let read = input.read_until(b'\n', &mut line).map_err(Error::Read)?;

            // A last line without a terminator still counts as a record.
            if read == 0 {
                break;
            }

            self.reservoir.add(self.record_from_line(&line));
        }

        let snapshot = self.reservoir.snapshot();
        let emitted = self.writer.write(&mut output, &snapshot.records)?;

        info!(seen = snapshot.seen, emitted, "input exhausted");

        Ok(RunSummary {
            seen: snapshot.seen,
            emitted,
        })
    }

    fn record_from_line(&self, line: &[u8]) -> Record {
        if self.trim {
            return trim_whitespace(line).to_vec();
        }

        line.strip_suffix(b"\n").unwrap_or(line).to_vec()
    }
}

/// Strips Unicode whitespace from both ends of a UTF-8 line. Lines that are not valid
/// UTF-8 only lose ASCII whitespace, vertical tab included.
fn trim_whitespace(line: &[u8]) -> &[u8] {
    if let Ok(text) = std::str::from_utf8(line) {
        return text.trim().as_bytes();
    }

    let is_space = |b: &u8| b.is_ascii_whitespace() || *b == 0x0b;
    let start = line.iter().position(|b| !is_space(b)).unwrap_or(line.len());
    let end = line.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);

    &line[start..end]
}
