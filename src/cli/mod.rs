//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod modules;
pub mod onboard;

pub use modules::{handle_modules_command, ModulesCommands};
pub use onboard::handle_onboard_command;

use crate::config::Settings;
use crate::display::{format_screen_gate, format_status};
use crate::error::{BizbookError, BizbookResult};
use crate::navigation::{gate_screen, resolve_route, Screen};
use crate::services::ModuleActivationService;

/// Handle `bizbook status`
pub fn handle_status_command(service: &ModuleActivationService, settings: &Settings) {
    let snapshot = service.snapshot();
    let route = resolve_route(service.is_loading(), &snapshot);
    print!("{}", format_status(settings, route, &snapshot));
}

/// Handle `bizbook screen <name>`
pub fn handle_screen_command(service: &ModuleActivationService, name: &str) -> BizbookResult<()> {
    let screen = Screen::parse(name).ok_or_else(|| {
        BizbookError::Validation(format!(
            "Unknown screen '{}'. Expected one of: home, orders, lending, milk, inventory, settings",
            name
        ))
    })?;

    let gate = gate_screen(screen, &service.active_modules());
    print!("{}", format_screen_gate(screen, &gate));
    Ok(())
}
