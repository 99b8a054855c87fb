//! gif-mirage - dual-appearance GIF merging
//!
//! Merges an inner and a cover animation into one tri-tone GIF that shows
//! the cover on a light background and the inner image on a dark one.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
