use anyhow::Result;
use csdl_requirements::{
    Contextual, Diagnostic, ErrorKind, Fixed, ModelError, ODataError, PathError, RequirementKey,
};
use std::collections::{HashMap, HashSet};

/// Minimal name table standing in for a validator's scope tracking.
#[derive(Default)]
struct NameTable {
    names: HashSet<String>,
    closed: bool,
}

impl NameTable {
    fn declare(&mut self, name: &str) -> Result<(), ModelError> {
        if self.closed {
            return Err(ModelError::NameTableClosed(Diagnostic::new(format!(
                "cannot declare {} in a closed table",
                name
            ))));
        }
        if !self.names.insert(name.to_string()) {
            return Err(ModelError::DuplicateName(Contextual::TypeQname.diagnostic(name)));
        }
        Ok(())
    }

    fn undeclare(&mut self, name: &str) -> Result<(), ModelError> {
        Err(ModelError::Undeclaration(Diagnostic::new(name)))
    }

    fn require(&self, name: &str) -> Result<(), ModelError> {
        if self.names.contains(name) {
            Ok(())
        } else {
            Err(ModelError::ObjectNotDeclared(Diagnostic::new(name)))
        }
    }

    fn require_undeclared(&self, name: &str) -> Result<(), ModelError> {
        if self.names.contains(name) {
            Err(ModelError::ObjectDeclared(Diagnostic::new(name)))
        } else {
            Ok(())
        }
    }
}

fn check_inheritance(bases: &HashMap<&str, &str>, start: &str) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    let mut current = start;
    while let Some(base) = bases.get(current) {
        if !seen.insert(current) {
            return Err(ModelError::InheritanceCycle(Contextual::EtCycle.diagnostic(start)));
        }
        current = base;
    }
    Ok(())
}

fn traverse(path: &str) -> Result<(), PathError> {
    Err(PathError::new(path, "no such navigation property"))
}

fn model_failures() -> Vec<ODataError> {
    let mut table = NameTable::default();
    let mut failures = Vec::new();

    table.declare("Sales.Order").unwrap();
    failures.push(table.declare("Sales.Order").unwrap_err().into());
    failures.push(table.require("Sales.Customer").unwrap_err().into());
    failures.push(table.require_undeclared("Sales.Order").unwrap_err().into());
    failures.push(table.undeclare("Sales.Order").unwrap_err().into());
    table.closed = true;
    failures.push(table.declare("Sales.Invoice").unwrap_err().into());

    let bases = HashMap::from([("Sales.A", "Sales.B"), ("Sales.B", "Sales.A")]);
    failures.push(check_inheritance(&bases, "Sales.A").unwrap_err().into());
    failures.push(ModelError::from(Fixed::SchemaName.diagnostic()).into());
    failures
}

#[test]
fn test_model_kind_catches_every_model_failure() {
    let failures = model_failures();
    let kinds: Vec<ErrorKind> = failures.iter().map(ODataError::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::DuplicateName,
            ErrorKind::ObjectNotDeclared,
            ErrorKind::ObjectDeclared,
            ErrorKind::Undeclaration,
            ErrorKind::NameTableClosed,
            ErrorKind::InheritanceCycle,
            ErrorKind::Invalid,
        ]
    );
    for failure in &failures {
        assert!(matches!(failure, ODataError::Model(_)), "{:?}", failure);
        assert!(failure.kind().is_model());
    }
}

#[test]
fn test_model_kind_never_catches_path_failure() {
    let err: ODataError = traverse("Order/Customer/Address").unwrap_err().into();
    assert!(!matches!(err, ODataError::Model(_)));
    assert!(matches!(err, ODataError::Path(_)));
    assert_eq!(err.kind(), ErrorKind::Path);

    for failure in model_failures() {
        assert!(!matches!(failure, ODataError::Path(_)));
    }
}

#[test]
fn test_kinds_are_distinct() {
    let kinds: HashSet<ErrorKind> = model_failures().iter().map(ODataError::kind).collect();
    assert_eq!(kinds.len(), 7);
    assert!(!kinds.contains(&ErrorKind::Path));
}

#[test]
fn test_cycle_reports_requirement_and_citation() -> Result<()> {
    let bases = HashMap::from([("Sales.A", "Sales.B"), ("Sales.B", "Sales.A")]);
    let err = check_inheritance(&bases, "Sales.A").unwrap_err();

    assert_eq!(err.requirement(), Some(RequirementKey::EtCycle));
    assert_eq!(
        err.to_string(),
        "inheritance cycle detected: An entity type MUST NOT introduce an inheritance \
         cycle via the base type attribute (Sales.A)"
    );
    assert_eq!(err.diagnostic().citation().as_deref(), Some("4.0 P3 8.1.2 (Sales.A)"));
    Ok(())
}

#[test]
fn test_errors_propagate_through_anyhow() {
    fn load() -> anyhow::Result<()> {
        let mut table = NameTable::default();
        table.declare("Sales.Order")?;
        table.declare("Sales.Order")?;
        Ok(())
    }

    let err = load().unwrap_err();
    let model = err.downcast_ref::<ModelError>().expect("model error");
    assert_eq!(model.kind(), ErrorKind::DuplicateName);
}

#[test]
fn test_diagnostic_serializes_requirement_key() -> Result<()> {
    let diag = Contextual::KeyNullable.diagnostic("Sales.Order/ID");
    let value = serde_json::to_value(&diag)?;
    assert_eq!(value["requirement"], "key_nullable_s");
    assert_eq!(value["context"], "Sales.Order/ID");
    assert_eq!(
        value["message"],
        "The properties that compose the key MUST be non-nullable (Sales.Order/ID)"
    );

    let plain = serde_json::to_value(Diagnostic::new("free text"))?;
    assert!(plain.get("requirement").is_none());
    Ok(())
}
