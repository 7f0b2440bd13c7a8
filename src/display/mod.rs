//! Display formatting for bizbook
//!
//! Plain-text renderers used by the CLI.

pub mod modules;

pub use modules::{format_module_list, format_screen_gate, format_status};
