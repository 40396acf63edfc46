//! roster - Collect student records interactively and save them as a sorted list
//!
//! The library is a small linear pipeline: the [`collector`] reads records from
//! a line source, [`sort`] orders them by name, and [`writer`] renders them to a
//! text file. [`models`] holds the validated record types.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod sort;
pub mod writer;

pub use error::{Result, RosterError};
