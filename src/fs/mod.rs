//! Filesystem utilities for the V5 Brain.
//!
//! The `logger` submodule writes every log record to the console and to a
//! file on the SD card, so a movement that misbehaved on the field can be
//! inspected afterwards.
//!
//! # Example
//!
//! ```ignore
//! use log::{LevelFilter, info};
//! use xnav::fs::logger;
//!
//! logger::init(LevelFilter::Debug).expect("Failed to initialize logger");
//! info!("Robot initialized successfully");
//! ```

/// Console and SD card logging.
pub mod logger;
