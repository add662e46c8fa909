use crate::core::errors::Result;
use crate::core::models::record::Record;

/// Port for consumers of normalized records.
///
/// `flush` must be called exactly once, after the last record,
/// whether or not the run succeeded.
pub trait RecordSink {
    /// Write one record to the underlying stream.
    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// Push any buffered output to the stream.
    fn flush(&mut self) -> Result<()>;
}
