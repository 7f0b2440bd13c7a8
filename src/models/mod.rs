//! Core data models for bizbook
//!
//! The module catalog and the state the module-activation service owns.

pub mod active_set;
pub mod module;

pub use active_set::{ActiveModuleSet, ModulesSnapshot};
pub use module::{parse_module_list, ModuleId};
