//! Terminal output formatting
//!
//! Colored board and keyboard rendering for the line-mode game, plus the
//! shared formatting helpers (emoji share grid, elapsed time).

pub mod display;
pub mod formatters;

pub use display::{print_board, print_help, print_summary, print_welcome};
