//! Frame types flowing through the merge pipeline.
//!
//! - [`Frame`]: single-channel 8-bit grayscale, row-major
//! - [`BinaryFrame`]: a [`Frame`] restricted to 0 and 255

mod binary;
mod gray;

pub use binary::BinaryFrame;
pub use gray::Frame;
