use crate::error::FacetResult;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Root of the tangible part of the schema hierarchy.
pub const THING: &str = "Thing";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaDefinition {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub plural: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

/// A resolved type, as seen through a [`TypeLookup`].
#[derive(Debug, Clone, Copy)]
pub struct SchemaType<'a> {
    pub definition: &'a SchemaDefinition,
    tangible: bool,
}

impl<'a> SchemaType<'a> {
    pub fn is_tangible(&self) -> bool {
        self.tangible
    }

    pub fn name(&self) -> &'a str {
        &self.definition.name
    }

    pub fn label(&self) -> &'a str {
        if self.definition.label.is_empty() {
            &self.definition.name
        } else {
            &self.definition.label
        }
    }

    pub fn plural(&self) -> &'a str {
        if self.definition.plural.is_empty() {
            self.label()
        } else {
            &self.definition.plural
        }
    }

    pub fn icon(&self) -> Option<&'a str> {
        self.definition.icon.as_deref()
    }
}

/// Read-only access to the type model.
pub trait TypeLookup {
    fn resolve_type(&self, name: &str) -> Option<SchemaType<'_>>;

    fn is_tangible(&self, name: &str) -> bool {
        self.resolve_type(name)
            .map(|t| t.is_tangible())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SchemaRegistry {
    #[serde(skip)]
    by_name: HashMap<String, usize>,

    #[serde(skip)]
    tangible: HashSet<String>,

    pub definitions: Vec<SchemaDefinition>,
}

impl SchemaRegistry {
    pub fn from_definitions(definitions: Vec<SchemaDefinition>) -> Self {
        let mut reg = Self {
            definitions,
            by_name: HashMap::new(),
            tangible: HashSet::new(),
        };
        reg.rebuild_maps();
        reg
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FacetResult<Self> {
        let content = fs::read_to_string(&path)?;
        let definitions: Vec<SchemaDefinition> = serde_json::from_str(&content)?;
        let reg = Self::from_definitions(definitions);
        debug!(
            schemata = reg.definitions.len(),
            tangible = reg.tangible.len(),
            "loaded schema model from {}",
            path.as_ref().display()
        );
        Ok(reg)
    }

    /// A compact entity model: things, documents and the interval schemata
    /// that link them.
    pub fn new_with_defaults() -> Self {
        let defaults: Vec<(&str, &str, &str, Option<&str>, Vec<&str>, bool)> = vec![
            (THING, "Thing", "Things", None, vec![], true),
            ("Interval", "Interval", "Intervals", None, vec![], true),
            ("Analyzable", "Analyzable", "Analyzables", None, vec![], true),
            ("LegalEntity", "Legal entity", "Legal entities", Some("legal-entity"), vec![THING], false),
            ("Person", "Person", "People", Some("person"), vec!["LegalEntity"], false),
            ("Organization", "Organization", "Organizations", Some("organization"), vec!["LegalEntity"], false),
            ("Company", "Company", "Companies", Some("company"), vec!["Organization"], false),
            ("PublicBody", "Public body", "Public bodies", Some("public-body"), vec!["Organization"], false),
            ("Address", "Address", "Addresses", Some("address"), vec![THING], false),
            ("Vessel", "Vessel", "Vessels", Some("vessel"), vec![THING], false),
            ("Document", "File", "Files", Some("document"), vec![THING, "Analyzable"], false),
            ("Folder", "Folder", "Folders", Some("folder"), vec!["Document"], false),
            ("Pages", "Document", "Documents", Some("pages"), vec!["Document"], false),
            ("Email", "E-Mail", "E-Mails", Some("email"), vec!["Document"], false),
            ("Page", "Page", "Pages", None, vec!["Analyzable"], false),
            ("Mention", "Mention", "Mentions", None, vec![], false),
            ("Ownership", "Ownership", "Ownerships", Some("ownership"), vec!["Interval"], false),
            ("Directorship", "Directorship", "Directorships", Some("directorship"), vec!["Interval"], false),
            ("Payment", "Payment", "Payments", Some("payment"), vec!["Interval"], false),
        ];

        let definitions = defaults
            .into_iter()
            .map(|(name, label, plural, icon, extends, is_abstract)| SchemaDefinition {
                name: name.to_string(),
                label: label.to_string(),
                plural: plural.to_string(),
                icon: icon.map(str::to_string),
                extends: extends.iter().map(|s| s.to_string()).collect(),
                is_abstract,
            })
            .collect();

        Self::from_definitions(definitions)
    }

    fn rebuild_maps(&mut self) {
        self.by_name.clear();
        self.tangible.clear();

        for (idx, def) in self.definitions.iter().enumerate() {
            if self.by_name.insert(def.name.clone(), idx).is_some() {
                warn!("duplicate schema '{}', keeping the last definition", def.name);
            }
        }

        let tangible: HashSet<String> = self
            .definitions
            .iter()
            .filter(|def| self.is_a(&def.name, THING))
            .map(|def| def.name.clone())
            .collect();
        self.tangible = tangible;
    }

    fn get(&self, name: &str) -> Option<&SchemaDefinition> {
        self.by_name.get(name).map(|&idx| &self.definitions[idx])
    }

    /// True when `name` is `ancestor` or extends it, directly or not.
    /// Unknown parents end the walk; cycles are visited once.
    pub fn is_a(&self, name: &str, ancestor: &str) -> bool {
        let mut stack = vec![name];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if current == ancestor {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(def) = self.get(current) {
                stack.extend(def.extends.iter().map(String::as_str));
            }
        }
        false
    }
}

impl TypeLookup for SchemaRegistry {
    fn resolve_type(&self, name: &str) -> Option<SchemaType<'_>> {
        self.get(name).map(|definition| SchemaType {
            definition,
            tangible: self.tangible.contains(name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_split_things_from_intervals() {
        let reg = SchemaRegistry::new_with_defaults();
        assert!(reg.is_tangible("Person"));
        assert!(reg.is_tangible("Folder"));
        assert!(!reg.is_tangible("Ownership"));
        assert!(!reg.is_tangible("Page"));
        assert!(!reg.is_tangible("Unknown"));
    }

    #[test]
    fn cyclic_extends_terminate() {
        let def = |name: &str, parent: &str| SchemaDefinition {
            name: name.into(),
            label: String::new(),
            plural: String::new(),
            icon: None,
            extends: vec![parent.into()],
            is_abstract: false,
        };
        let reg = SchemaRegistry::from_definitions(vec![def("A", "B"), def("B", "A")]);
        assert!(!reg.is_tangible("A"));
        let a = reg.resolve_type("A").unwrap();
        assert_eq!(a.label(), "A");
        assert_eq!(a.plural(), "A");
    }
}
