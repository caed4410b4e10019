pub mod fetch;
pub mod format;
pub mod stats;
