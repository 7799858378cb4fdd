// aocache: download and cache Advent of Code puzzle inputs.
//
// Inputs are fetched once per (year, day) key with an authenticated GET and
// kept under `.aoccache/<year>/<day>.txt`; reads yield the cached file's
// lines lazily.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;

pub use cache::{InputLines, Lines};
pub use client::AocClient;
pub use config::Config;
pub use error::{Error, Result};
