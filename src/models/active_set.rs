//! Active module set and the persisted snapshot
//!
//! `ActiveModuleSet` keeps selection order but consumers only ever ask about
//! membership.

use serde::{Deserialize, Serialize};

use super::module::ModuleId;

/// The modules a business has switched on, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveModuleSet(Vec<ModuleId>);

impl ActiveModuleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `module`
    ///
    /// Removes every copy when present, appends otherwise. Returns whether the
    /// module is active afterwards.
    pub fn toggle(&mut self, module: ModuleId) -> bool {
        if self.contains(module) {
            self.0.retain(|m| *m != module);
            false
        } else {
            self.0.push(module);
            true
        }
    }

    /// Check whether `module` is active
    pub fn contains(&self, module: ModuleId) -> bool {
        self.0.contains(&module)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ModuleId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ModuleId>> for ActiveModuleSet {
    fn from(modules: Vec<ModuleId>) -> Self {
        Self(modules)
    }
}

impl FromIterator<ModuleId> for ActiveModuleSet {
    fn from_iter<I: IntoIterator<Item = ModuleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ActiveModuleSet {
    type Item = &'a ModuleId;
    type IntoIter = std::slice::Iter<'a, ModuleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything the module-activation service persists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesSnapshot {
    /// Enabled modules
    pub active_modules: ActiveModuleSet,
    /// Whether the first-run wizard has been completed
    pub has_completed_onboarding: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut set = ActiveModuleSet::new();
        assert!(set.toggle(ModuleId::Milk));
        assert!(set.toggle(ModuleId::Orders));
        assert_eq!(set.as_slice(), &[ModuleId::Milk, ModuleId::Orders]);

        assert!(!set.toggle(ModuleId::Milk));
        assert_eq!(set.as_slice(), &[ModuleId::Orders]);
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let start: ActiveModuleSet = vec![ModuleId::Lending, ModuleId::Inventory].into();
        for module in ModuleId::ALL {
            let mut set = start.clone();
            set.toggle(module);
            set.toggle(module);
            assert_eq!(set.contains(module), start.contains(module));
        }
    }

    #[test]
    fn test_toggles_on_distinct_ids_commute() {
        let mut a = ActiveModuleSet::new();
        a.toggle(ModuleId::Orders);
        a.toggle(ModuleId::Inventory);

        let mut b = ActiveModuleSet::new();
        b.toggle(ModuleId::Inventory);
        b.toggle(ModuleId::Orders);

        for module in ModuleId::ALL {
            assert_eq!(a.contains(module), b.contains(module));
        }
    }

    #[test]
    fn test_toggle_removes_duplicates() {
        let mut set: ActiveModuleSet = vec![ModuleId::Milk, ModuleId::Orders, ModuleId::Milk].into();
        assert!(!set.toggle(ModuleId::Milk));
        assert!(!set.contains(ModuleId::Milk));
        assert!(set.toggle(ModuleId::Milk));
        assert_eq!(set.iter().filter(|m| **m == ModuleId::Milk).count(), 1);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set: ActiveModuleSet = vec![ModuleId::Orders, ModuleId::Inventory].into();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["orders","inventory"]"#);
    }
}
