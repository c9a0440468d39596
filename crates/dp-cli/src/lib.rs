//! CLI library components for dataprofile.

pub mod logging;
pub mod pipeline;
