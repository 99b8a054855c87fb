pub mod gif_encode;

pub use gif_encode::{encode_gif, COLOR_TABLE_ENTRIES};
