//! Frontend Models
//!
//! Data structures matching backend API payloads.

use serde::{Deserialize, Serialize};

/// Pharmacy record (matches the backend list serializer; extra fields in the
/// payload are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub id: u32,
    pub name: String,
}

/// Fixed per-pharmacy navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inventory,
    Sales,
    Manager,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Inventory, Section::Sales, Section::Manager];

    /// Path segment of the content fragment route
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Inventory => "inventory",
            Section::Sales => "sales",
            Section::Manager => "manager",
        }
    }

    /// Link label shown in the sidebar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Inventory => "Inventory",
            Section::Sales => "Sales",
            Section::Manager => "See Manager",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pharmacy_list_payload() {
        let payload = r#"[{"id":7,"name":"Downtown"}]"#;
        let list: Vec<Pharmacy> = serde_json::from_str(payload).unwrap();
        assert_eq!(
            list,
            vec![Pharmacy {
                id: 7,
                name: "Downtown".into()
            }]
        );
    }

    #[test]
    fn ignores_extra_serializer_fields() {
        let payload = r#"[{"id":1,"name":"Central","location":"Main St","created_by":"admin"}]"#;
        let list: Vec<Pharmacy> = serde_json::from_str(payload).unwrap();
        assert_eq!(list[0].name, "Central");
    }

    #[test]
    fn three_fixed_sections() {
        assert_eq!(Section::ALL.len(), 3);
        assert_eq!(
            Section::ALL.map(|s| s.slug()),
            ["inventory", "sales", "manager"]
        );
    }
}
