//! Navigation gating
//!
//! Decides what the screen layer shows for a given module state: the
//! top-level route, the tab bar, and whether a module screen is open or
//! replaced by a "module not enabled" placeholder.

use std::fmt;

use crate::models::{ActiveModuleSet, ModuleId, ModulesSnapshot};

/// Top-level destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Preferences are still being read; show a neutral busy state
    Loading,
    /// First run: module selection has not been completed
    Onboarding,
    /// The tabbed main interface
    Main,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Onboarding => write!(f, "Onboarding"),
            Self::Main => write!(f, "Main"),
        }
    }
}

/// Pick the route for the current state
pub fn resolve_route(is_loading: bool, snapshot: &ModulesSnapshot) -> Route {
    if is_loading {
        Route::Loading
    } else if !snapshot.has_completed_onboarding {
        Route::Onboarding
    } else {
        Route::Main
    }
}

/// Entries of the main tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Orders,
    Lending,
    Inventory,
    Settings,
}

impl Tab {
    /// Tab bar order
    pub const ALL: [Tab; 5] = [
        Self::Home,
        Self::Orders,
        Self::Lending,
        Self::Inventory,
        Self::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Orders => "Orders",
            Self::Lending => "Lending",
            Self::Inventory => "Inventory",
            Self::Settings => "Settings",
        }
    }
}

/// Individual screens reachable from the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Orders,
    Lending,
    /// Milk credit book; hosted by the lending tab
    MilkLending,
    Inventory,
    Settings,
}

impl Screen {
    /// The module a screen belongs to, if any
    pub fn required_module(&self) -> Option<ModuleId> {
        match self {
            Self::Orders => Some(ModuleId::Orders),
            Self::Lending => Some(ModuleId::Lending),
            Self::MilkLending => Some(ModuleId::Milk),
            Self::Inventory => Some(ModuleId::Inventory),
            Self::Home | Self::Settings => None,
        }
    }

    /// Tab that hosts the screen
    pub fn tab(&self) -> Tab {
        match self {
            Self::Home => Tab::Home,
            Self::Orders => Tab::Orders,
            Self::Lending | Self::MilkLending => Tab::Lending,
            Self::Inventory => Tab::Inventory,
            Self::Settings => Tab::Settings,
        }
    }

    /// Screen that opens the given module
    pub fn for_module(module: ModuleId) -> Self {
        match module {
            ModuleId::Orders => Self::Orders,
            ModuleId::Milk => Self::MilkLending,
            ModuleId::Lending => Self::Lending,
            ModuleId::Inventory => Self::Inventory,
        }
    }

    /// Parse a screen name from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" | "index" | "dashboard" => Some(Self::Home),
            "settings" => Some(Self::Settings),
            other => ModuleId::parse(other).map(Self::for_module),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Orders => write!(f, "Orders"),
            Self::Lending => write!(f, "Lending"),
            Self::MilkLending => write!(f, "Milk Credit"),
            Self::Inventory => write!(f, "Inventory"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}

/// What a screen renders given the active modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenGate {
    /// Render the screen normally
    Open,
    /// Render a placeholder with one action leading to `redirect`
    Disabled {
        module: ModuleId,
        message: String,
        action_label: &'static str,
        redirect: Screen,
    },
}

impl ScreenGate {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Gate `screen` on membership of its module in `active`
pub fn gate_screen(screen: Screen, active: &ActiveModuleSet) -> ScreenGate {
    match screen.required_module() {
        Some(module) if !active.contains(module) => ScreenGate::Disabled {
            module,
            message: format!("The {} module is not enabled.", module.short_name()),
            action_label: "Enable Module",
            redirect: Screen::Settings,
        },
        _ => ScreenGate::Open,
    }
}

/// Module cards on the Home screen, in catalog order
///
/// Empty means the "no modules selected yet" hint is shown instead.
pub fn dashboard_modules(active: &ActiveModuleSet) -> Vec<ModuleId> {
    ModuleId::ALL
        .into_iter()
        .filter(|module| active.contains(*module))
        .collect()
}
