pub mod parsers;
pub mod sinks;
pub mod stores;
