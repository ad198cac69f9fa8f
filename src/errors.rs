//! Failure kinds raised by CSDL name tables and model validators.
//!
//! [`ODataError`] is the root. Structural and semantic problems with a model
//! are [`ModelError`]s; failures to follow a path through a model are
//! [`PathError`]s. The two never overlap, so matching `ODataError::Model(_)`
//! never catches a path failure.

use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

use crate::requirements::{RequirementKey, fill};

pub type Result<T> = std::result::Result<T, ODataError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ODataError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl ODataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ODataError::Model(e) => e.kind(),
            ODataError::Path(_) => ErrorKind::Path,
        }
    }

    pub fn is_model_error(&self) -> bool {
        matches!(self, ODataError::Model(_))
    }

    /// The diagnostic attached to a model error.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ODataError::Model(e) => Some(e.diagnostic()),
            ODataError::Path(_) => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A name was declared twice in the same name table.
    #[error("duplicate name: {0}")]
    DuplicateName(Diagnostic),

    /// The operation needs an object that has not been declared.
    #[error("object not declared: {0}")]
    ObjectNotDeclared(Diagnostic),

    /// The operation needs an object that has not been declared yet, but it
    /// already is.
    #[error("object already declared: {0}")]
    ObjectDeclared(Diagnostic),

    /// Names cannot be removed from a name table.
    #[error("undeclaration not permitted: {0}")]
    Undeclaration(Diagnostic),

    /// Declaration attempted after the name table was closed.
    #[error("name table closed: {0}")]
    NameTableClosed(Diagnostic),

    #[error("inheritance cycle detected: {0}")]
    InheritanceCycle(Diagnostic),

    /// Any other violated requirement.
    #[error("{0}")]
    Invalid(Diagnostic),
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::DuplicateName(_) => ErrorKind::DuplicateName,
            ModelError::ObjectNotDeclared(_) => ErrorKind::ObjectNotDeclared,
            ModelError::ObjectDeclared(_) => ErrorKind::ObjectDeclared,
            ModelError::Undeclaration(_) => ErrorKind::Undeclaration,
            ModelError::NameTableClosed(_) => ErrorKind::NameTableClosed,
            ModelError::InheritanceCycle(_) => ErrorKind::InheritanceCycle,
            ModelError::Invalid(_) => ErrorKind::Invalid,
        }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            ModelError::DuplicateName(d)
            | ModelError::ObjectNotDeclared(d)
            | ModelError::ObjectDeclared(d)
            | ModelError::Undeclaration(d)
            | ModelError::NameTableClosed(d)
            | ModelError::InheritanceCycle(d)
            | ModelError::Invalid(d) => d,
        }
    }

    pub fn requirement(&self) -> Option<RequirementKey> {
        self.diagnostic().requirement()
    }
}

impl From<Diagnostic> for ModelError {
    fn from(value: Diagnostic) -> Self {
        ModelError::Invalid(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot traverse path '{path}': {reason}")]
pub struct PathError {
    pub path: String,
    pub reason: String,
}

impl PathError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// The category of an [`ODataError`], for programmatic inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DuplicateName,
    ObjectNotDeclared,
    ObjectDeclared,
    Undeclaration,
    NameTableClosed,
    InheritanceCycle,
    Invalid,
    Path,
}

impl ErrorKind {
    pub const fn is_model(self) -> bool {
        !matches!(self, ErrorKind::Path)
    }
}

/// The human-readable part of a model error.
///
/// When raised for a catalogued requirement the diagnostic remembers the key
/// and the context value, so the matching citation can be rendered later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    requirement: Option<RequirementKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

impl Diagnostic {
    /// Free-form text not tied to any requirement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            requirement: None,
            context: None,
        }
    }

    pub(crate) fn from_requirement(
        requirement: RequirementKey,
        message: String,
        context: Option<String>,
    ) -> Self {
        Self {
            message,
            requirement: Some(requirement),
            context,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn requirement(&self) -> Option<RequirementKey> {
        self.requirement
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn citation(&self) -> Option<String> {
        let key = self.requirement?;
        Some(match &self.context {
            Some(context) => fill(key.citation(), context),
            None => key.citation().to_string(),
        })
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.message)
    }
}

impl From<&str> for Diagnostic {
    fn from(value: &str) -> Self {
        Diagnostic::new(value)
    }
}

impl From<String> for Diagnostic {
    fn from(value: String) -> Self {
        Diagnostic::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::{Contextual, Fixed};

    fn declare(name: &str, declared: &[&str]) -> std::result::Result<(), ModelError> {
        if declared.contains(&name) {
            return Err(ModelError::DuplicateName(Contextual::TypeQname.diagnostic(name)));
        }
        Ok(())
    }

    #[test]
    fn test_duplicate_name_carries_requirement() {
        let err = declare("Sales.Order", &["Sales.Order"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);
        assert_eq!(err.requirement(), Some(RequirementKey::TypeQname));
        assert_eq!(err.diagnostic().context(), Some("Sales.Order"));
        assert!(err.to_string().contains("Sales.Order"));
    }

    #[test]
    fn test_diagnostic_citation_is_rendered_with_context() {
        let diag = Contextual::EtCycle.diagnostic("Sales.Customer");
        assert_eq!(diag.citation().unwrap(), "4.0 P3 8.1.2 (Sales.Customer)");

        let diag = Fixed::SchemaName.diagnostic();
        assert_eq!(diag.citation().unwrap(), "4.0 P3 5.1.1 #1");
        assert_eq!(diag.context(), None);
    }

    #[test]
    fn test_free_text_diagnostic_has_no_citation() {
        let diag = Diagnostic::new("Sales.Order already declared");
        assert_eq!(diag.requirement(), None);
        assert_eq!(diag.citation(), None);
        assert_eq!(diag.to_string(), "Sales.Order already declared");
    }

    #[test]
    fn test_invalid_displays_bare_message() {
        let err: ModelError = Fixed::SchemaName.diagnostic().into();
        assert_eq!(
            err.to_string(),
            "All edm:Schema elements MUST have a namespace defined through a Namespace attribute"
        );
    }

    #[test]
    fn test_path_error_is_not_a_model_error() {
        let err: ODataError = PathError::new("Customer/Orders", "no such property").into();
        assert!(!err.is_model_error());
        assert_eq!(err.kind(), ErrorKind::Path);
        assert!(!err.kind().is_model());
        assert!(err.diagnostic().is_none());
        assert_eq!(
            err.to_string(),
            "cannot traverse path 'Customer/Orders': no such property"
        );
    }

    #[test]
    fn test_model_errors_convert_with_question_mark() {
        fn validate() -> Result<()> {
            declare("Sales.Order", &["Sales.Order"])?;
            Ok(())
        }

        let err = validate().unwrap_err();
        assert!(err.is_model_error());
        assert!(matches!(err, ODataError::Model(ModelError::DuplicateName(_))));
    }
}
