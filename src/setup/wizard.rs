//! Onboarding wizard
//!
//! A two-step linear flow: a welcome page, then module selection. Finishing
//! the second step hands the selection to the module-activation service and
//! marks onboarding as done.

use std::io::{BufRead, Write};

use crate::error::{BizbookError, BizbookResult};
use crate::models::{parse_module_list, ActiveModuleSet, ModuleId};
use crate::services::ModuleActivationService;

/// Current page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    SelectModules,
}

impl OnboardingStep {
    /// 1-based position for "Step n of 2" headers
    pub fn number(&self) -> usize {
        match self {
            Self::Welcome => 1,
            Self::SelectModules => 2,
        }
    }
}

/// Outcome of pressing "Next"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardProgress {
    /// Moved to another page
    Advanced(OnboardingStep),
    /// The flow is finished with this selection
    Completed(ActiveModuleSet),
}

/// The onboarding state machine
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    selected: ActiveModuleSet,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub const STEP_COUNT: usize = 2;

    /// Start at the welcome page with nothing selected
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            selected: ActiveModuleSet::new(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn selected(&self) -> &ActiveModuleSet {
        &self.selected
    }

    /// Flip a module in the pending selection
    pub fn toggle(&mut self, module: ModuleId) -> bool {
        self.selected.toggle(module)
    }

    /// Whether "Next" is enabled on the current page
    pub fn can_advance(&self) -> bool {
        match self.step {
            OnboardingStep::Welcome => true,
            OnboardingStep::SelectModules => !self.selected.is_empty(),
        }
    }

    /// Move forward, or finish on the last page
    pub fn next(&mut self) -> BizbookResult<WizardProgress> {
        match self.step {
            OnboardingStep::Welcome => {
                self.step = OnboardingStep::SelectModules;
                Ok(WizardProgress::Advanced(self.step))
            }
            OnboardingStep::SelectModules => {
                if self.selected.is_empty() {
                    return Err(BizbookError::Validation(
                        "Select at least one module to continue".into(),
                    ));
                }
                Ok(WizardProgress::Completed(self.selected.clone()))
            }
        }
    }

    /// Go back one page; does nothing on the first page
    pub fn back(&mut self) -> OnboardingStep {
        if self.step == OnboardingStep::SelectModules {
            self.step = OnboardingStep::Welcome;
        }
        self.step
    }
}

/// Apply a finished selection: set the modules, then mark onboarding done
pub fn complete(service: &ModuleActivationService, selection: &ActiveModuleSet) {
    service.set_active_modules(selection.iter().copied());
    service.set_onboarding_completed(true);
}

/// Drives `OnboardingWizard` over a text prompt
pub struct SetupWizard<'a> {
    service: &'a ModuleActivationService,
}

impl<'a> SetupWizard<'a> {
    pub fn new(service: &'a ModuleActivationService) -> Self {
        Self { service }
    }

    /// Whether the wizard still has to run
    pub fn needs_setup(&self) -> bool {
        !self.service.has_completed_onboarding()
    }

    /// Run the wizard interactively
    ///
    /// Returns the applied selection, or `None` when the user quit.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> BizbookResult<Option<ActiveModuleSet>> {
        let mut wizard = OnboardingWizard::new();

        loop {
            match wizard.step() {
                OnboardingStep::Welcome => {
                    writeln!(output)?;
                    writeln!(output, "Welcome!")?;
                    writeln!(
                        output,
                        "Let's set up your business app to suit your specific needs."
                    )?;
                    writeln!(
                        output,
                        "Choose the modules that are relevant to your business on the next page."
                    )?;
                    writeln!(output)?;

                    let answer = prompt(input, output, "Press Enter to continue, or 'q' to quit: ")?;
                    match answer.as_deref() {
                        None | Some("q") | Some("quit") => return Ok(None),
                        _ => {
                            wizard.next()?;
                        }
                    }
                }
                OnboardingStep::SelectModules => {
                    writeln!(output)?;
                    writeln!(
                        output,
                        "Step {} of {}: Select Modules",
                        wizard.step().number(),
                        OnboardingWizard::STEP_COUNT
                    )?;
                    for (index, module) in ModuleId::ALL.iter().enumerate() {
                        let mark = if wizard.selected().contains(*module) { "x" } else { " " };
                        writeln!(
                            output,
                            "  [{}] {}. {} - {}",
                            mark,
                            index + 1,
                            module.title(),
                            module.description()
                        )?;
                    }
                    writeln!(output)?;

                    let answer = prompt(
                        input,
                        output,
                        "Toggle by number or name (comma separated), Enter to finish, 'b' to go back, 'q' to quit: ",
                    )?;

                    match answer.as_deref() {
                        None | Some("q") | Some("quit") => return Ok(None),
                        Some("b") | Some("back") => {
                            wizard.back();
                        }
                        Some("") => match wizard.next() {
                            Ok(WizardProgress::Completed(selection)) => {
                                complete(self.service, &selection);
                                writeln!(output, "Setup complete!")?;
                                return Ok(Some(selection));
                            }
                            Ok(WizardProgress::Advanced(_)) => {}
                            Err(e) => writeln!(output, "{}", e)?,
                        },
                        Some(choices) => match parse_choices(choices) {
                            Ok(modules) => {
                                for module in modules {
                                    wizard.toggle(module);
                                }
                            }
                            Err(e) => writeln!(output, "{}", e)?,
                        },
                    }
                }
            }
        }
    }
}

/// Accepts "1,3" as well as "orders, milk"
fn parse_choices(input: &str) -> BizbookResult<Vec<ModuleId>> {
    let by_number: Option<Vec<ModuleId>> = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| ModuleId::ALL.get(i).copied())
        })
        .collect();

    match by_number {
        Some(modules) => Ok(modules),
        None => parse_module_list(input),
    }
}

/// Print `message` and read one trimmed line; `None` on end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> BizbookResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferenceStore;
    use std::io::Cursor;
    use std::sync::Arc;

    #[test]
    fn test_linear_flow() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.step(), OnboardingStep::Welcome);
        assert!(wizard.can_advance());

        assert_eq!(
            wizard.next().unwrap(),
            WizardProgress::Advanced(OnboardingStep::SelectModules)
        );
        assert!(!wizard.can_advance());

        wizard.toggle(ModuleId::Milk);
        wizard.toggle(ModuleId::Lending);
        assert!(wizard.can_advance());

        match wizard.next().unwrap() {
            WizardProgress::Completed(selection) => {
                assert_eq!(selection.as_slice(), &[ModuleId::Milk, ModuleId::Lending]);
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_refuses_to_finish_without_modules() {
        let mut wizard = OnboardingWizard::new();
        wizard.next().unwrap();

        let err = wizard.next().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(wizard.step(), OnboardingStep::SelectModules);
    }

    #[test]
    fn test_back_is_noop_on_first_page() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.back(), OnboardingStep::Welcome);

        wizard.next().unwrap();
        wizard.toggle(ModuleId::Orders);
        assert_eq!(wizard.back(), OnboardingStep::Welcome);
        assert!(wizard.selected().contains(ModuleId::Orders));
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(
            parse_choices("1, 4").unwrap(),
            vec![ModuleId::Orders, ModuleId::Inventory]
        );
        assert_eq!(parse_choices("milk").unwrap(), vec![ModuleId::Milk]);
        assert!(parse_choices("9").is_err());
    }

    #[tokio::test]
    async fn test_interactive_run_applies_selection() {
        let service = ModuleActivationService::new(Arc::new(MemoryPreferenceStore::new()));
        service.load().await;
        let wizard = SetupWizard::new(&service);
        assert!(wizard.needs_setup());

        let mut input = Cursor::new("\n\n2,3\n\n");
        let mut output = Vec::new();
        let selection = wizard.run(&mut input, &mut output).unwrap().unwrap();

        assert_eq!(selection.as_slice(), &[ModuleId::Milk, ModuleId::Lending]);
        assert_eq!(
            service.active_modules().as_slice(),
            &[ModuleId::Milk, ModuleId::Lending]
        );
        assert!(service.has_completed_onboarding());
        assert!(!wizard.needs_setup());

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Select at least one module to continue"));
        assert!(transcript.contains("Setup complete!"));
    }

    #[tokio::test]
    async fn test_interactive_quit_changes_nothing() {
        let service = ModuleActivationService::new(Arc::new(MemoryPreferenceStore::new()));
        service.load().await;

        let mut input = Cursor::new("\norders\nq\n");
        let mut output = Vec::new();
        let result = SetupWizard::new(&service).run(&mut input, &mut output).unwrap();

        assert!(result.is_none());
        assert!(service.active_modules().is_empty());
        assert!(!service.has_completed_onboarding());
    }
}
