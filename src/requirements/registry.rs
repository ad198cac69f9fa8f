//! String-keyed access to the requirement catalog.
//!
//! Validators that only know a requirement by its key (`"et_cycle_s"`) use
//! these functions. Code that names requirements statically should prefer the
//! typed constants on [`Fixed`](super::Fixed) and
//! [`Contextual`](super::Contextual).

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use super::{Arity, Requirement, RequirementKey, Section, Status};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown requirement key '{0}'")]
    UnknownKey(String),

    #[error("Requirement '{0}' expects a context value but none was supplied")]
    MissingContext(String),
}

static INDEX: Lazy<HashMap<&'static str, RequirementKey>> = Lazy::new(|| {
    let index: HashMap<_, _> = RequirementKey::ALL
        .iter()
        .map(|key| (key.as_str(), *key))
        .collect();
    debug!("Indexed {} requirement keys", index.len());
    index
});

pub(crate) fn resolve(key: &str) -> Result<RequirementKey, RegistryError> {
    INDEX.get(key).copied().ok_or_else(|| {
        debug!("Lookup of unknown requirement key '{}'", key);
        RegistryError::UnknownKey(key.to_string())
    })
}

/// Iterates every key, in document order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    RequirementKey::ALL.iter().map(|key| key.as_str())
}

/// The message template for `key`, placeholder intact.
pub fn lookup(key: &str) -> Result<&'static str, RegistryError> {
    Ok(resolve(key)?.message())
}

/// The citation template for `key`, placeholder intact.
pub fn citation(key: &str) -> Result<&'static str, RegistryError> {
    Ok(resolve(key)?.citation())
}

/// Renders the message for `key`.
///
/// A value passed for a key that takes no context is ignored.
pub fn render(key: &str, value: Option<&str>) -> Result<String, RegistryError> {
    match resolve(key)?.classify() {
        Requirement::Fixed(fixed) => Ok(fixed.message().to_string()),
        Requirement::Contextual(contextual) => {
            let value = value.ok_or_else(|| RegistryError::MissingContext(key.to_string()))?;
            Ok(contextual.render(value))
        }
    }
}

/// Renders the citation for `key`, with the same contract as [`render`].
pub fn render_citation(key: &str, value: Option<&str>) -> Result<String, RegistryError> {
    match resolve(key)?.classify() {
        Requirement::Fixed(fixed) => Ok(fixed.citation().to_string()),
        Requirement::Contextual(contextual) => {
            let value = value.ok_or_else(|| RegistryError::MissingContext(key.to_string()))?;
            Ok(contextual.render_citation(value))
        }
    }
}

pub fn by_section(section: Section) -> impl Iterator<Item = RequirementKey> {
    RequirementKey::ALL
        .iter()
        .copied()
        .filter(move |key| key.section() == section)
}

/// Requirements whose status has the given name (`"enforced"`,
/// `"superseded"`, ...).
pub fn by_status(name: &str) -> impl Iterator<Item = RequirementKey> + '_ {
    RequirementKey::ALL
        .iter()
        .copied()
        .filter(move |key| key.status().matches_name(name))
}

/// A consistency problem in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFinding {
    pub key: RequirementKey,
    pub problem: String,
}

/// Checks the catalog for problems the compiler cannot see.
///
/// Key uniqueness and placeholder counts are verified at compile time; this
/// covers the links between entries. An empty result means the catalog is
/// consistent.
pub fn audit() -> Vec<AuditFinding> {
    audit_entries(RequirementKey::ALL.iter().map(|key| (*key, key.status())))
}

/// Audits an arbitrary set of `(key, status)` entries.
///
/// A superseded entry must point at another entry of the same set whose
/// status is enforced.
pub fn audit_entries(
    entries: impl IntoIterator<Item = (RequirementKey, Status)>,
) -> Vec<AuditFinding> {
    let entries: Vec<(RequirementKey, Status)> = entries.into_iter().collect();
    let statuses: HashMap<RequirementKey, Status> = entries.iter().copied().collect();
    let mut findings = Vec::new();

    for (key, status) in entries {
        let Some(target) = status.superseded_by() else {
            continue;
        };
        let problem = if target == key {
            "superseded by itself".to_string()
        } else {
            match statuses.get(&target) {
                None => format!("superseded by '{}' which is not in the catalog", target),
                Some(Status::Enforced) => continue,
                Some(other) => format!(
                    "superseded by '{}' which is {}, not enforced",
                    target,
                    other.name()
                ),
            }
        };
        findings.push(AuditFinding { key, problem });
    }

    debug!("Catalog audit produced {} findings", findings.len());
    findings
}

#[derive(Debug, Serialize)]
struct ExportRecord {
    key: RequirementKey,
    section: u8,
    section_title: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    superseded_by: Option<RequirementKey>,
    arity: Arity,
    message: &'static str,
    citation: &'static str,
}

impl From<RequirementKey> for ExportRecord {
    fn from(key: RequirementKey) -> Self {
        let spec = key.spec();
        Self {
            key,
            section: spec.section.number(),
            section_title: spec.section.title(),
            status: spec.status.name(),
            superseded_by: spec.status.superseded_by(),
            arity: spec.arity,
            message: spec.message,
            citation: spec.citation,
        }
    }
}

/// Serializes the given requirements as a pretty-printed JSON array.
pub fn export_json(keys: &[RequirementKey]) -> serde_json::Result<String> {
    let records: Vec<ExportRecord> = keys.iter().copied().map(ExportRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
