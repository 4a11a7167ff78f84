use crate::error::{Error, Result};
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Each record as-is, one per line.
    #[default]
    Plain,
    /// Each record as a JSON string, one per line.
    Json,
}

/// Writes a sample to a line-oriented sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleWriter {
    format: OutputFormat,
}

impl SampleWriter {
    pub fn new(format: OutputFormat) -> SampleWriter {
        SampleWriter { format }
    }

    /// Renders every record into one buffer and hands it to `out` in a single
    /// `write_all`, so two snapshots written to stdout never interleave.
    pub fn write<W: Write, B: AsRef<[u8]>>(&self, out: &mut W, records: &[B]) -> Result<usize> {
        let mut buffer = Vec::new();

        for record in records {
            let record = record.as_ref();
            match self.format {
                OutputFormat::Plain => buffer.extend_from_slice(record),
                OutputFormat::Json => {
                    serde_json::to_writer(&mut buffer, &String::from_utf8_lossy(record))?
                }
            }
            buffer.push(b'\n');
        }

        out.write_all(&buffer).map_err(Error::Write)?;
        out.flush().map_err(Error::Write)?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: OutputFormat, records: &[&str]) -> String {
        let mut out = Vec::new();
        let written = SampleWriter::new(format).write(&mut out, records).unwrap();
        assert_eq!(written, records.len());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_lines() {
        assert_eq!(render(OutputFormat::Plain, &["a", "b c"]), "a\nb c\n");
    }

    #[test]
    fn json_lines_escape_records() {
        assert_eq!(
            render(OutputFormat::Json, &["say \"hi\"", "tab\there"]),
            "\"say \\\"hi\\\"\"\n\"tab\\there\"\n"
        );
    }

    #[test]
    fn nothing_to_write() {
        assert_eq!(render(OutputFormat::Plain, &[]), "");
    }
}
