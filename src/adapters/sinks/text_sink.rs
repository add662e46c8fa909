use std::io::Write;

use crate::core::errors::Result;
use crate::core::models::record::Record;
use crate::core::traits::record_sink::RecordSink;

/// Human-readable sink: the title on its own line, then one indented
/// `name: value` line per field. Not meant to be parsed back.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn field(&mut self, name: &str, value: &str) -> Result<()> {
        writeln!(self.out, "\t{name:>20}: {value}")?;
        Ok(())
    }
}

impl<W: Write> RecordSink for TextSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.out, "{}", record.title)?;
        self.field("url", &record.url)?;
        self.field("password", &record.password)?;
        self.field("username", &record.username)?;
        self.field("totp", &record.totp)?;
        self.field("email", &record.email)?;
        self.field("seed", &record.seed)?;
        self.field("backup_codes", &record.backup_codes)?;
        if !record.body.is_empty() {
            self.field("body", &record.body)?;
        }
        for (key, value) in &record.other {
            self.field(key, value)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
