//! Presentation helpers shared by the library surface and the CLI.

pub mod datetime;
pub mod text;
