//! Project file, prompt and extraction tests

mod extraction;
mod file;
mod payloads;
