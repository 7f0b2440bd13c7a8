//! Module model
//!
//! The fixed catalog of optional feature areas a business can switch on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BizbookError;

/// An optional feature area of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    /// Daily orders from shopkeepers
    Orders,
    /// Milk shop customer credit
    Milk,
    /// Advances and repayments
    Lending,
    /// Stock and sales
    Inventory,
}

impl ModuleId {
    /// Every module, in catalog order
    pub const ALL: [ModuleId; 4] = [Self::Orders, Self::Milk, Self::Lending, Self::Inventory];

    /// The stored id string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Milk => "milk",
            Self::Lending => "lending",
            Self::Inventory => "inventory",
        }
    }

    /// Title shown on the module picker
    pub fn title(&self) -> &'static str {
        match self {
            Self::Orders => "Order Management",
            Self::Milk => "Milk Shop Lending",
            Self::Lending => "Lending & Advance",
            Self::Inventory => "Inventory & Sales",
        }
    }

    /// One-line description shown on the module picker
    pub fn description(&self) -> &'static str {
        match self {
            Self::Orders => "Log daily orders from shopkeepers and send summaries with analytics",
            Self::Milk => "Manage daily customer credit, payments, and monthly invoices",
            Self::Lending => "Record advances, calculate dues with interest, and track repayments",
            Self::Inventory => "Manage stock, record sales, generate slips, and monitor low-stock items",
        }
    }

    /// Short name used in "module not enabled" messages
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::Milk => "Milk Credit",
            Self::Lending => "Lending",
            Self::Inventory => "Inventory",
        }
    }

    /// Parse a module id from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "orders" | "order" => Some(Self::Orders),
            "milk" | "milk-credit" | "milk_credit" => Some(Self::Milk),
            "lending" | "lend" => Some(Self::Lending),
            "inventory" | "stock" => Some(Self::Inventory),
            _ => None,
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = BizbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| BizbookError::UnknownModule(s.trim().to_string()))
    }
}

/// Parse a comma separated module list ("orders, milk")
pub fn parse_module_list(input: &str) -> Result<Vec<ModuleId>, BizbookError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ModuleId::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ModuleId::ALL).unwrap();
        assert_eq!(json, r#"["orders","milk","lending","inventory"]"#);
    }

    #[test]
    fn test_rejects_unknown_on_deserialize() {
        assert!(serde_json::from_str::<ModuleId>(r#""payroll""#).is_err());
        assert!(serde_json::from_str::<ModuleId>(r#""Orders""#).is_err());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(ModuleId::parse("ORDERS"), Some(ModuleId::Orders));
        assert_eq!(ModuleId::parse(" milk-credit "), Some(ModuleId::Milk));
        assert_eq!(ModuleId::parse("stock"), Some(ModuleId::Inventory));
        assert_eq!(ModuleId::parse("payroll"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "payroll".parse::<ModuleId>().unwrap_err();
        assert!(matches!(err, BizbookError::UnknownModule(ref s) if s == "payroll"));
    }

    #[test]
    fn test_parse_module_list() {
        let modules = parse_module_list("milk, lending,,").unwrap();
        assert_eq!(modules, vec![ModuleId::Milk, ModuleId::Lending]);
        assert!(parse_module_list("milk,bakery").is_err());
        assert!(parse_module_list("").unwrap().is_empty());
    }

    #[test]
    fn test_display_matches_stored_id() {
        for module in ModuleId::ALL {
            assert_eq!(module.to_string(), module.as_str());
            assert_eq!(ModuleId::parse(module.as_str()), Some(module));
        }
    }
}
