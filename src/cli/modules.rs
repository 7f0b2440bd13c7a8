//! Module CLI commands
//!
//! Implements CLI commands for listing and switching feature modules.

use clap::Subcommand;

use crate::display::format_module_list;
use crate::error::BizbookResult;
use crate::models::ModuleId;
use crate::services::ModuleActivationService;

/// Module subcommands
#[derive(Subcommand)]
pub enum ModulesCommands {
    /// List all modules and whether they are enabled
    List,

    /// Flip a module on or off
    Toggle {
        /// Module id (orders, milk, lending, inventory)
        module: ModuleId,
    },

    /// Enable a module (no change if already enabled)
    Enable {
        /// Module id (orders, milk, lending, inventory)
        module: ModuleId,
    },

    /// Disable a module (no change if already disabled)
    Disable {
        /// Module id (orders, milk, lending, inventory)
        module: ModuleId,
    },
}

/// Handle a modules command
pub fn handle_modules_command(
    service: &ModuleActivationService,
    cmd: ModulesCommands,
) -> BizbookResult<()> {
    match cmd {
        ModulesCommands::List => {
            print!("{}", format_module_list(&service.snapshot()));
        }

        ModulesCommands::Toggle { module } => {
            let active = service.toggle_module(module);
            print_change(module, active);
        }

        ModulesCommands::Enable { module } => {
            if service.is_module_active(module) {
                println!("{} is already enabled.", module.title());
            } else {
                print_change(module, service.toggle_module(module));
            }
        }

        ModulesCommands::Disable { module } => {
            if service.is_module_active(module) {
                print_change(module, service.toggle_module(module));
            } else {
                println!("{} is already disabled.", module.title());
            }
        }
    }

    Ok(())
}

fn print_change(module: ModuleId, active: bool) {
    println!(
        "{} {}.",
        module.title(),
        if active { "enabled" } else { "disabled" }
    );
}
