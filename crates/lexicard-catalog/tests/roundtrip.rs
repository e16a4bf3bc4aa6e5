// crates/lexicard-catalog/tests/roundtrip.rs
// ============================================================================
// Module: Catalog Round-Trip Tests
// Description: Validate serialization back to the `key = value` grammar.
// Purpose: Ensure serialize-then-parse yields an equivalent catalog.
// ============================================================================

//! ## Overview
//! `Catalog::to_text` must emit text that reparses to identical key-to-value
//! mappings, with section markers preserved at section boundaries.

use std::collections::BTreeMap;

use lexicard_catalog::Catalog;
use lexicard_catalog::DuplicatePolicy;
use lexicard_catalog::parse_catalog;

type TestResult = Result<(), String>;

fn mappings(catalog: &Catalog) -> BTreeMap<String, String> {
    catalog
        .iter()
        .map(|entry| (entry.key.as_str().to_string(), entry.value.clone()))
        .collect()
}

#[test]
fn roundtrip_preserves_mappings() -> TestResult {
    let input = "[Menu Bar]\n\
file = File\n\
new-studyset = New StudySet\n\
\n\
[Delete StudySet Dialog]\n\
confirm-delete = Confirm Delete\n\
cancel = Cancel\n\
empty-label =\n";
    let parsed =
        parse_catalog(input, DuplicatePolicy::Reject).map_err(|err| err.to_string())?;
    let reparsed = parse_catalog(&parsed.to_text(), DuplicatePolicy::Reject)
        .map_err(|err| err.to_string())?;
    if mappings(&parsed) != mappings(&reparsed) {
        return Err("round trip changed key-to-value mappings".to_string());
    }
    Ok(())
}

#[test]
fn roundtrip_preserves_entry_order_and_sections() -> TestResult {
    let input = "top-level = Before any section\n[Flashcards Page]\nstudy = Study\n";
    let parsed =
        parse_catalog(input, DuplicatePolicy::Reject).map_err(|err| err.to_string())?;
    let reparsed = parse_catalog(&parsed.to_text(), DuplicatePolicy::Reject)
        .map_err(|err| err.to_string())?;
    let original: Vec<(&str, Option<&str>)> =
        parsed.iter().map(|entry| (entry.key.as_str(), entry.section.as_deref())).collect();
    let recovered: Vec<(&str, Option<&str>)> =
        reparsed.iter().map(|entry| (entry.key.as_str(), entry.section.as_deref())).collect();
    if original != recovered {
        return Err(format!("sections diverged: {original:?} vs {recovered:?}"));
    }
    Ok(())
}

#[test]
fn serialized_form_is_stable() -> TestResult {
    let input = "# comment stripped by normalization\n\nok = Ok\n[Status]\nok-status = Ok\n";
    let parsed =
        parse_catalog(input, DuplicatePolicy::Reject).map_err(|err| err.to_string())?;
    let first = parsed.to_text();
    let second = parse_catalog(&first, DuplicatePolicy::Reject)
        .map_err(|err| err.to_string())?
        .to_text();
    if first != second {
        return Err("normalized output is not a fixed point".to_string());
    }
    Ok(())
}
