use anyhow::Result;
use csdl_requirements::requirements::{
    self, Arity, RegistryError, RequirementKey, citation, keys, lookup, render, render_citation,
};
use rstest::rstest;
use std::collections::BTreeSet;

#[test]
fn test_message_and_citation_key_sets_are_identical() {
    let with_message: BTreeSet<&str> = keys().filter(|k| lookup(k).is_ok()).collect();
    let with_citation: BTreeSet<&str> = keys().filter(|k| citation(k).is_ok()).collect();
    assert_eq!(with_message, with_citation);
    assert_eq!(with_message.len(), RequirementKey::ALL.len());
}

#[test]
fn test_schema_name_scenario() -> Result<()> {
    assert_eq!(
        render("schema_name", None)?,
        "All edm:Schema elements MUST have a namespace defined through a Namespace attribute"
    );
    assert_eq!(citation("schema_name")?, "4.0 P3 5.1.1 #1");
    Ok(())
}

#[test]
fn test_type_qname_citation_scenario() -> Result<()> {
    assert_eq!(
        citation("type_qname_s")?,
        "4.0 P3 4.1 #2; 4.0 P3 5.1.1 #3; 4.0 P3 8.1.1 #2; 4.0 P3 9.1.1 #2; 4.0 P3 10.1.1 #2; 4.0 P3 11.1.1 #2 (%s)"
    );
    Ok(())
}

#[test]
fn test_contextual_render_always_contains_value() -> Result<()> {
    for key in keys() {
        let parsed: RequirementKey = key.parse()?;
        if parsed.arity() == Arity::Contextual {
            let rendered = render(key, Some("Sales.Order/Customer"))?;
            assert!(rendered.contains("Sales.Order/Customer"), "{}: {}", key, rendered);
            let cited = render_citation(key, Some("Sales.Order/Customer"))?;
            assert!(cited.contains("Sales.Order/Customer"), "{}: {}", key, cited);
        }
    }
    Ok(())
}

#[test]
fn test_fixed_render_ignores_value() -> Result<()> {
    for key in keys() {
        let parsed: RequirementKey = key.parse()?;
        if parsed.arity() == Arity::Fixed {
            let bare = render(key, None)?;
            assert_eq!(render(key, Some("anything"))?, bare);
            assert_eq!(render(key, Some(""))?, bare);
            assert_eq!(bare, lookup(key)?);
        }
    }
    Ok(())
}

#[rstest]
#[case("et_cycle_s", "Sales.Customer", "4.0 P3 8.1.2 (Sales.Customer)")]
#[case("ct_cycle_s", "Sales.Address", "4.0 P3 9.1.2 (Sales.Address)")]
#[case("refcon_match_s", "Order/Customer", "4.0 P3 7.2 #2; 4.0 P3 7.2.2 #3 (Order/Customer)")]
#[case("schema_unique_s", "Sales", "4.0 P3 5.1.1 #2 (Sales)")]
fn test_rendered_citations(#[case] key: &str, #[case] value: &str, #[case] expected: &str) {
    assert_eq!(render_citation(key, Some(value)).unwrap(), expected);
}

#[rstest]
#[case("et_cycle_s")]
#[case("nav_contains_s")]
#[case("td_annotation_s")]
fn test_missing_context_is_an_error(#[case] key: &str) {
    assert_eq!(render(key, None), Err(RegistryError::MissingContext(key.to_string())));
    assert_eq!(
        render_citation(key, None),
        Err(RegistryError::MissingContext(key.to_string()))
    );
}

#[test]
fn test_unknown_key_is_an_error() {
    let err = lookup("entity_type_cycle").unwrap_err();
    assert_eq!(err, RegistryError::UnknownKey("entity_type_cycle".to_string()));
    assert_eq!(err.to_string(), "Unknown requirement key 'entity_type_cycle'");
    assert!(citation("").is_err());
    assert!(render("Schema_Name", None).is_err());
}

#[test]
fn test_repeated_lookups_are_stable() -> Result<()> {
    for key in keys() {
        assert_eq!(lookup(key)?, lookup(key)?);
        assert_eq!(citation(key)?, citation(key)?);
    }
    let first = std::thread::spawn(|| render("ent_type_s", Some("Sales.Color")).unwrap())
        .join()
        .expect("thread panicked");
    assert_eq!(first, render("ent_type_s", Some("Sales.Color"))?);
    Ok(())
}

#[test]
fn test_export_contains_every_requirement() -> Result<()> {
    let json = requirements::export_json(RequirementKey::ALL)?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&json)?;
    assert_eq!(records.len(), RequirementKey::ALL.len());

    let type_unique = records
        .iter()
        .find(|r| r["key"] == "type_unique")
        .expect("type_unique exported");
    assert_eq!(type_unique["status"], "superseded");
    assert_eq!(type_unique["superseded_by"], "type_qname_s");
    assert_eq!(type_unique["section"], 5);
    assert_eq!(type_unique["arity"], "fixed");

    let et_cycle = records.iter().find(|r| r["key"] == "et_cycle_s").expect("et_cycle_s exported");
    assert!(et_cycle.get("superseded_by").is_none());
    assert_eq!(et_cycle["section_title"], "Entity Type");
    Ok(())
}
