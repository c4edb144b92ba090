//! Browser helpers shared across client UI modules.

pub mod file;
