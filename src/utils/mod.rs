//! Shared constants and filesystem helpers.

pub mod constants;
pub mod fs_utils;

pub use constants::*;
pub use fs_utils::ensure_output_dir;
