// Cache module for local filesystem caching.
// One text file per (year, day) key; existence alone marks a cache hit.

pub mod paths;
pub mod store;

pub use store::{InputLines, Lines};
