//! brainscan core library
//!
//! Shared between the CLI and the desktop viewer.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod predict;

pub use client::{PredictClient, ServerReply};
pub use config::Config;
pub use error::{BrainScanError, Result};
pub use predict::{extract_predictions, format_summary, Prediction};
