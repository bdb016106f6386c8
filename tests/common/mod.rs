#![allow(dead_code)]

use facetview::links::SearchLinkBuilder;
use facetview::locale::Catalog;
use facetview::model::{SchemaDefinition, SchemaRegistry};
use facetview::presenter::Capabilities;
use facetview::Statistic;

/// Builder for SchemaDefinition to keep model fixtures short.
pub struct SchemaBuilder {
    def: SchemaDefinition,
}

impl SchemaBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            def: SchemaDefinition {
                name: name.to_string(),
                label: name.to_string(),
                plural: format!("{}s", name),
                icon: None,
                extends: vec![],
                is_abstract: false,
            },
        }
    }

    pub fn extends(mut self, parent: &str) -> Self {
        self.def.extends.push(parent.to_string());
        self
    }

    pub fn plural(mut self, plural: &str) -> Self {
        self.def.plural = plural.to_string();
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.def.icon = Some(icon.to_string());
        self
    }

    pub fn build(self) -> SchemaDefinition {
        self.def
    }
}

/// Person and Document are things; Folder is a structural node.
pub fn test_registry() -> SchemaRegistry {
    SchemaRegistry::from_definitions(vec![
        SchemaBuilder::new("Thing").build(),
        SchemaBuilder::new("Person")
            .extends("Thing")
            .plural("People")
            .icon("person")
            .build(),
        SchemaBuilder::new("Document").extends("Thing").build(),
        SchemaBuilder::new("Folder").build(),
    ])
}

pub struct Fixture {
    pub registry: SchemaRegistry,
    pub catalog: Catalog,
    pub links: SearchLinkBuilder,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            registry: test_registry(),
            catalog: Catalog::new(),
            links: SearchLinkBuilder::new("https://aleph.test"),
        }
    }

    pub fn caps(&self) -> Capabilities<'_> {
        Capabilities {
            types: &self.registry,
            messages: &self.catalog,
            links: &self.links,
        }
    }
}

pub fn stat(pairs: &[(&str, u64)]) -> Statistic {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}
