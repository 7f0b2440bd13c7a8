//! Onboarding CLI command
//!
//! Runs the first-run wizard, interactively or from a `--modules` list.

use std::io::{self, BufRead, Write};

use crate::error::{BizbookError, BizbookResult};
use crate::models::{parse_module_list, ActiveModuleSet};
use crate::services::ModuleActivationService;
use crate::setup::{complete, OnboardingWizard, SetupWizard, WizardProgress};

/// Handle `bizbook onboard`
pub fn handle_onboard_command(
    service: &ModuleActivationService,
    modules: Option<String>,
) -> BizbookResult<()> {
    let setup = SetupWizard::new(service);
    if !setup.needs_setup() {
        println!("Onboarding has already been completed.");
        println!("Use 'bizbook modules' to change enabled modules.");
        return Ok(());
    }

    match modules {
        Some(list) => {
            let selection = select_non_interactive(&list)?;
            complete(service, &selection);
            let names: Vec<&str> = selection.iter().map(|m| m.as_str()).collect();
            println!("Setup complete! Enabled modules: {}", names.join(", "));
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            if run_prompt(&setup, &mut input, &mut output)?.is_none() {
                println!("Setup cancelled.");
            }
        }
    }

    Ok(())
}

/// Run the prompt loop off the async workers; needs the multi-thread runtime
fn run_prompt<R: BufRead, W: Write>(
    setup: &SetupWizard<'_>,
    input: &mut R,
    output: &mut W,
) -> BizbookResult<Option<ActiveModuleSet>> {
    tokio::task::block_in_place(|| setup.run(input, output))
}

/// Walk the wizard with a preset selection so the same rules apply
fn select_non_interactive(list: &str) -> BizbookResult<ActiveModuleSet> {
    let mut wizard = OnboardingWizard::new();
    wizard.next()?;
    for module in parse_module_list(list)? {
        if !wizard.selected().contains(module) {
            wizard.toggle(module);
        }
    }

    match wizard.next()? {
        WizardProgress::Completed(selection) => Ok(selection),
        WizardProgress::Advanced(step) => Err(BizbookError::Validation(format!(
            "Onboarding stopped early at step {}",
            step.number()
        ))),
    }
}
