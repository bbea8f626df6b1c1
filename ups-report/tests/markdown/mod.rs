//! Renderer tests
//!
//! Behaviour of the full pipeline as seen by a front end injecting the output.

mod escaping;
mod properties;
mod tables;
