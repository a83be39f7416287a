//! Library components of the clr2json CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
