//! First-run onboarding
//!
//! Collects the module selection before the main interface becomes
//! reachable.

pub mod wizard;

pub use wizard::{complete, OnboardingStep, OnboardingWizard, SetupWizard, WizardProgress};
