//! Service layer for bizbook
//!
//! The module-activation service and the pieces behind its write-through
//! persistence.

pub mod modules;
pub mod observer;
mod persister;

pub use modules::ModuleActivationService;
pub use observer::{PersistenceObserver, TracingObserver};
