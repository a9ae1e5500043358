/// Run configuration and its defaults.
pub mod config;
/// Error taxonomy shared by every stage.
pub mod error;
