//! User option files
//!
//! Loads a user option layer from a `.json` or `.toml` file, recording
//! where it came from and a digest of its raw bytes.

mod file;

pub use file::{OptionsError, OptionsFile, OptionsFormat, OptionsSource};
