//! Animation assembly.
//!
//! Rendered frames are read back from disk in file name order and encoded as one looping GIF.

/// GIF assembler.
pub mod gif;
