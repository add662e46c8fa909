pub mod extract_service;
pub mod field_pool;
