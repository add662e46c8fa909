use std::io::Write;

use crate::core::errors::Result;
use crate::core::models::record::Record;
use crate::core::traits::record_sink::RecordSink;

/// Column names, in output order. Starred columns are custom fields for
/// password managers that import this layout.
pub const HEADER: [&str; 10] = [
    "Title",
    "Username",
    "Email",
    "Password",
    "Website",
    "TOTP Secret Key",
    "*Backup Codes",
    "*Seed",
    "*Comment",
    "*Body",
];

/// Tabular sink: one header row, then one CSV row per record.
///
/// Fields are quoted only when they contain a delimiter, quote or newline,
/// so any value survives a write/read round trip.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        let comment = record.comment();
        self.writer.write_record([
            record.title.as_str(),
            record.username.as_str(),
            record.email.as_str(),
            record.password.as_str(),
            record.url.as_str(),
            record.totp.as_str(),
            record.backup_codes.as_str(),
            record.seed.as_str(),
            comment.as_str(),
            record.body.as_str(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
