//! Public API for the mirage-merge crate.
//!
//! This module provides the high-level API: [`MirageMerger`] builder and
//! [`MergeError`] unified error type.

mod builder;
mod error;

pub use builder::MirageMerger;
pub use error::MergeError;
