pub mod csv_sink;
pub mod text_sink;

use std::io::Write;

use serde::Deserialize;

use crate::core::errors::Result;
use crate::core::models::record::Record;
use crate::core::traits::record_sink::RecordSink;

use csv_sink::CsvSink;
use text_sink::TextSink;

/// Output layout, chosen once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
}

/// The two sinks the tool can write to.
pub enum OutputSink<W: Write> {
    Csv(CsvSink<W>),
    Text(TextSink<W>),
}

impl<W: Write> OutputSink<W> {
    /// Build the sink for `format`. The CSV header is written immediately.
    pub fn new(format: OutputFormat, out: W) -> Result<Self> {
        Ok(match format {
            OutputFormat::Csv => OutputSink::Csv(CsvSink::new(out)?),
            OutputFormat::Text => OutputSink::Text(TextSink::new(out)),
        })
    }
}

impl<W: Write> RecordSink for OutputSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        match self {
            OutputSink::Csv(sink) => sink.write_record(record),
            OutputSink::Text(sink) => sink.write_record(record),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            OutputSink::Csv(sink) => sink.flush(),
            OutputSink::Text(sink) => sink.flush(),
        }
    }
}
