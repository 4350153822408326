pub mod formatting;
pub mod path;

pub use formatting::{cell_width, pad_right, split_line};
