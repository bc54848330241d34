// Shared helpers

pub mod constants;
pub mod wei;

pub use constants::*;
pub use wei::{format_wei, wei_to_hex};
