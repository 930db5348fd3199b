pub mod check;
mod error;
pub mod render;

pub use error::Error;
