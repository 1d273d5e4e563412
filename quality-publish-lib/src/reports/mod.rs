//! Output of a finished quality snapshot
//!
//! Two generators are provided, each accessed through a `generate` function
//! that writes into any [`core::fmt::Write`]:
//! - **Console**: aligned metric table with severities coloured for a terminal
//! - **JSON**: machine-readable document using the same metric encoding as the
//!   dashboard payload

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
