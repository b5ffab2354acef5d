pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod grid;
pub mod importer;
pub mod logging;
pub mod session;
pub mod store;
