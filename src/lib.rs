//! bizbook - module activation core for a small-business app
//!
//! This library provides the settings core of a business-management app
//! (orders, milk credit, lending, inventory). It tracks which feature modules
//! a business has enabled and whether first-run onboarding is done, persists
//! both to a preference store, and answers navigation questions from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Module catalog and persisted snapshot
//! - `storage`: Preference store trait with memory and JSON file backends
//! - `services`: Module-activation service with write-through persistence
//! - `navigation`: Route, tab and screen gating
//! - `setup`: Onboarding wizard
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bizbook::models::ModuleId;
//! use bizbook::services::ModuleActivationService;
//! use bizbook::storage::MemoryPreferenceStore;
//!
//! let service = ModuleActivationService::new(Arc::new(MemoryPreferenceStore::new()));
//! service.load().await;
//! service.toggle_module(ModuleId::Orders);
//! service.teardown().await;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod services;
pub mod setup;
pub mod storage;

pub use error::{BizbookError, BizbookResult};
