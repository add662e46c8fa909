pub mod gopass_store;
pub mod json_file_store;
pub mod memory_store;
