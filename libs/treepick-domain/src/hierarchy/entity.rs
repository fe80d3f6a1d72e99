//! Domain entities handled by the picker
//!
//! A [`DomainRecord`] is the raw catalog entity as returned by the hierarchy
//! and search collaborators. Records nest: every record carries its
//! sub-domains in `children`. An [`EntityReference`] is the minimal pointer
//! handed back to the caller once a selection has been resolved.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hierarchy::ids::DomainId;

/// Kind of entity an [`EntityReference`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    Domain,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain as stored in the catalog, with its nested sub-domains
///
/// The fully-qualified name is the record's identity inside one loaded
/// snapshot and is used verbatim as the tree key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub id: DomainId,

    pub name: String,

    pub fully_qualified_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sub-domains, in catalog order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DomainRecord>,
}

impl DomainRecord {
    /// Create a leaf record with a fresh id
    pub fn new(name: impl Into<String>, fully_qualified_name: impl Into<String>) -> Self {
        Self {
            id: DomainId::new(),
            name: name.into(),
            fully_qualified_name: fully_qualified_name.into(),
            display_name: None,
            description: None,
            children: Vec::new(),
        }
    }

    /// Builder-style helper to set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Builder-style helper to set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style helper to append a sub-domain
    pub fn with_child(mut self, child: DomainRecord) -> Self {
        self.children.push(child);
        self
    }

    /// Name shown to users: the display name when set, otherwise the name
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display) if !display.trim().is_empty() => display,
            _ => &self.name,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Copy of this record without its sub-domains
    pub fn without_children(&self) -> Self {
        Self {
            children: Vec::new(),
            ..self.clone()
        }
    }

    /// Convert into the reference handed to the caller
    pub fn to_reference(&self, entity_type: EntityType) -> EntityReference {
        EntityReference {
            id: self.id,
            entity_type,
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            fully_qualified_name: Some(self.fully_qualified_name.clone()),
            description: self.description.clone(),
        }
    }
}

/// Minimal resolved pointer to an entity (id, type, name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    pub id: DomainId,

    #[serde(rename = "type")]
    pub entity_type: EntityType,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
