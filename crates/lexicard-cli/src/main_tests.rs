// crates/lexicard-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for parity diffing and argument mappings.
// Purpose: Ensure parity reporting stays deterministic and complete.
// Dependencies: lexicard-cli main helpers
// ============================================================================

//! ## Overview
//! Validates the pure helpers of the CLI entry point: the parity diff
//! computation and the mapping from command-line policy arguments to the
//! library's duplicate policy.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use lexicard_catalog::Catalog;
use lexicard_catalog::DuplicatePolicy;
use lexicard_catalog::parse_catalog;

use super::DuplicatePolicyArg;
use super::parity_diff;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn catalog(text: &str) -> Catalog {
    parse_catalog(text, DuplicatePolicy::Reject).expect("test catalog parses")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn parity_diff_is_empty_for_matching_key_sets() {
    let baseline = catalog("ok = Ok\ncancel = Cancel\n");
    let candidate = catalog("cancel = Cancelar\nok = Vale\n");
    let diff = parity_diff(&baseline, &candidate);
    assert!(diff.is_empty(), "matching key sets must produce an empty diff");
}

#[test]
fn parity_diff_reports_missing_and_extra_keys_sorted() {
    let baseline = catalog("cancel = Cancel\ndelete = Delete\nok = Ok\n");
    let candidate = catalog("ok = Vale\nextra-b = B\nextra-a = A\n");
    let diff = parity_diff(&baseline, &candidate);
    assert_eq!(diff.missing, ["cancel", "delete"]);
    assert_eq!(diff.extra, ["extra-a", "extra-b"]);
}

#[test]
fn parity_diff_ignores_values() {
    // Values differ between locales; only keys participate in parity.
    let baseline = catalog("greeting = Hello\n");
    let candidate = catalog("greeting = Hola\n");
    assert!(parity_diff(&baseline, &candidate).is_empty());
}

#[test]
fn duplicate_policy_arg_maps_to_library_policy() {
    assert_eq!(DuplicatePolicy::from(DuplicatePolicyArg::Reject), DuplicatePolicy::Reject);
    assert_eq!(
        DuplicatePolicy::from(DuplicatePolicyArg::LastWriteWins),
        DuplicatePolicy::LastWriteWins
    );
}
