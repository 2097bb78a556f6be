//! Lookup from (jurisdiction, entity type) to a formation layout.

use thiserror::Error;

use super::formation::EntityType;
use super::layout::DocumentLayout;
use super::templates;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Only Delaware and California entities are supported at this time")]
    UnsupportedJurisdiction(String),
    #[error("Unsupported company type")]
    UnsupportedEntityType {
        jurisdiction: String,
        entity_type: EntityType,
    },
}

/// One row of the registry table.
#[derive(Debug, Clone, Copy)]
pub struct FormationTemplate {
    pub jurisdiction: &'static str,
    pub entity_type: EntityType,
    pub layout: &'static DocumentLayout,
}

static BUILTIN: &[FormationTemplate] = &[
    FormationTemplate {
        jurisdiction: "DE",
        entity_type: EntityType::Corporation,
        layout: &templates::DELAWARE_CORPORATION,
    },
    FormationTemplate {
        jurisdiction: "DE",
        entity_type: EntityType::Llc,
        layout: &templates::DELAWARE_LLC,
    },
    FormationTemplate {
        jurisdiction: "CA",
        entity_type: EntityType::Corporation,
        layout: &templates::CALIFORNIA_CORPORATION,
    },
    FormationTemplate {
        jurisdiction: "CA",
        entity_type: EntityType::Llc,
        layout: &templates::CALIFORNIA_LLC,
    },
];

/// Read-only table of formation layouts.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRegistry {
    entries: &'static [FormationTemplate],
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    pub fn new(entries: &'static [FormationTemplate]) -> Self {
        Self { entries }
    }

    /// Delaware and California, corporation and LLC.
    pub fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    /// Find the formation layout. `jurisdiction` must already be upper-cased.
    pub fn formation(
        &self,
        jurisdiction: &str,
        entity_type: EntityType,
    ) -> Result<&'static DocumentLayout, RegistryError> {
        let mut known_jurisdiction = false;
        for entry in self.entries.iter().filter(|e| e.jurisdiction == jurisdiction) {
            known_jurisdiction = true;
            if entry.entity_type == entity_type {
                return Ok(entry.layout);
            }
        }

        if known_jurisdiction {
            Err(RegistryError::UnsupportedEntityType {
                jurisdiction: jurisdiction.to_string(),
                entity_type,
            })
        } else {
            Err(RegistryError::UnsupportedJurisdiction(jurisdiction.to_string()))
        }
    }

    /// Bylaws do not depend on jurisdiction.
    pub fn bylaws(&self) -> &'static DocumentLayout {
        &templates::BYLAWS
    }
}
