pub mod akv_parser;
