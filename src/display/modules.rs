//! Module display formatting
//!
//! Formats the module catalog, the app status, and screen gates for terminal
//! output.

use crate::config::Settings;
use crate::models::{ModuleId, ModulesSnapshot};
use crate::navigation::{dashboard_modules, Route, Screen, ScreenGate, Tab};

/// Format every catalog module with its enabled marker
pub fn format_module_list(snapshot: &ModulesSnapshot) -> String {
    let id_width = ModuleId::ALL
        .iter()
        .map(|m| m.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);
    let title_width = ModuleId::ALL
        .iter()
        .map(|m| m.title().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<7}  {:<id_width$}  {:<title_width$}  {}\n",
        "Enabled",
        "ID",
        "Title",
        "Description",
        id_width = id_width,
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:-<7}  {:-<id_width$}  {:-<title_width$}  {:-<11}\n",
        "",
        "",
        "",
        "",
        id_width = id_width,
        title_width = title_width,
    ));

    for module in ModuleId::ALL {
        let enabled = if snapshot.active_modules.contains(module) {
            "yes"
        } else {
            "no"
        };
        output.push_str(&format!(
            "{:<7}  {:<id_width$}  {:<title_width$}  {}\n",
            enabled,
            module.as_str(),
            module.title(),
            module.description(),
            id_width = id_width,
            title_width = title_width,
        ));
    }

    output
}

/// Format the current route, onboarding state and dashboard
pub fn format_status(settings: &Settings, route: Route, snapshot: &ModulesSnapshot) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", settings.display_name()));
    output.push_str(&format!("{}\n", "=".repeat(settings.display_name().len())));
    output.push_str(&format!("Route:      {}\n", route));
    output.push_str(&format!(
        "Onboarding: {}\n",
        if snapshot.has_completed_onboarding {
            "completed"
        } else {
            "not completed"
        }
    ));

    let enabled: Vec<&str> = snapshot.active_modules.iter().map(|m| m.as_str()).collect();
    output.push_str(&format!(
        "Modules:    {}\n",
        if enabled.is_empty() {
            "(none)".to_string()
        } else {
            enabled.join(", ")
        }
    ));

    if route == Route::Main {
        let tabs: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
        output.push_str(&format!("Tabs:       {}\n", tabs.join(" | ")));
        output.push('\n');

        let cards = dashboard_modules(&snapshot.active_modules);
        if cards.is_empty() {
            output.push_str("You haven't selected any modules yet.\n");
            output.push_str("Go to Settings to enable the modules you need.\n");
        } else {
            output.push_str("Dashboard:\n");
            for module in cards {
                output.push_str(&format!("  - {}\n", module.title()));
            }
        }
    } else if route == Route::Onboarding {
        output.push('\n');
        output.push_str("Run 'bizbook onboard' to choose your modules.\n");
    }

    output
}

/// Format what a screen shows under the current gate
pub fn format_screen_gate(screen: Screen, gate: &ScreenGate) -> String {
    match gate {
        ScreenGate::Open => format!("{} screen is available.\n", screen),
        ScreenGate::Disabled {
            module,
            message,
            action_label,
            redirect,
        } => format!(
            "{}\n[{}] -> {} (run 'bizbook modules enable {}')\n",
            message,
            action_label,
            redirect,
            module.as_str()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::gate_screen;

    #[test]
    fn test_module_list_marks_enabled() {
        let snapshot = ModulesSnapshot {
            active_modules: vec![ModuleId::Milk].into(),
            has_completed_onboarding: true,
        };
        let output = format_module_list(&snapshot);

        let milk_line = output.lines().find(|l| l.contains("milk")).unwrap();
        assert!(milk_line.starts_with("yes"));
        let orders_line = output.lines().find(|l| l.contains("orders")).unwrap();
        assert!(orders_line.starts_with("no"));
        assert_eq!(output.lines().count(), 2 + ModuleId::ALL.len());
    }

    #[test]
    fn test_status_main_with_no_modules_shows_hint() {
        let snapshot = ModulesSnapshot {
            active_modules: Default::default(),
            has_completed_onboarding: true,
        };
        let output = format_status(&Settings::default(), Route::Main, &snapshot);

        assert!(output.contains("Route:      Main"));
        assert!(output.contains("Modules:    (none)"));
        assert!(output.contains("You haven't selected any modules yet."));
    }

    #[test]
    fn test_status_onboarding_points_to_wizard() {
        let output = format_status(&Settings::default(), Route::Onboarding, &ModulesSnapshot::default());
        assert!(output.contains("bizbook onboard"));
        assert!(!output.contains("Tabs:"));
    }

    #[test]
    fn test_screen_gate_output() {
        let gate = gate_screen(Screen::Orders, &Default::default());
        let output = format_screen_gate(Screen::Orders, &gate);

        assert!(output.contains("The Orders module is not enabled."));
        assert!(output.contains("[Enable Module] -> Settings"));
        assert!(output.contains("bizbook modules enable orders"));
    }
}
