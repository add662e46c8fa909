pub mod raw_entry;
pub mod record;
pub mod revision;
