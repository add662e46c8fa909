pub mod record_sink;
pub mod secret_store;
