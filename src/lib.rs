pub mod columns;
pub mod error;
pub mod output;
pub mod parser;
pub mod scoring;
pub mod state;
pub mod stats;
pub mod views;
