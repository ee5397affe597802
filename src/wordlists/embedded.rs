//! Embedded word lists
//!
//! Generated from `data/*.txt` at build time so the game runs without any
//! files on disk.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
