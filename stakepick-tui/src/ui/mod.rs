pub mod buffer;
pub mod color;
pub mod text;

pub use buffer::{Buffer, Cell};
pub use color::Rgb;
