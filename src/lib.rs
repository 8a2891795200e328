pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod pricing;
pub mod report;
pub mod utils;
