// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use burnline_engine::{select_actual_series, select_scope_series};
use burnline_model::{BudgetDocument, FilterSelection, MonthlySeries};
use std::collections::BTreeSet;

fn fixture_document() -> BudgetDocument {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(root.join("tests/fixtures/midyear_document.json"))
        .expect("read fixture");
    serde_json::from_str(&raw).expect("decode fixture")
}

fn selection(entities: &[&str], roles: &[&str]) -> FilterSelection {
    FilterSelection {
        entities: entities.iter().map(|s| (*s).to_string()).collect(),
        role_ids: roles.iter().map(|s| (*s).to_string()).collect(),
        workstreams: BTreeSet::new(),
    }
}

#[test]
fn single_cell_selection_equals_the_direct_read() {
    let doc = fixture_document();
    let selected = select_actual_series(&doc.cube, &selection(&["EMEA"], &["dev"]));
    let direct = doc.cube.entity_role("EMEA", "dev").expect("cell exists");
    assert_eq!(&selected, direct);
}

#[test]
fn entity_only_selection_reads_the_entity_layer() {
    let doc = fixture_document();
    let selected = select_actual_series(&doc.cube, &selection(&["APAC"], &[]));
    assert_eq!(&selected, doc.cube.entity("APAC").expect("entity layer"));
}

#[test]
fn role_only_selection_sums_the_role_layer() {
    let doc = fixture_document();
    let selected = select_actual_series(&doc.cube, &selection(&[], &["dev", "qa"]));
    let mut expected = MonthlySeries::zero();
    expected.add_assign(doc.cube.role("dev").expect("dev"));
    expected.add_assign(doc.cube.role("qa").expect("qa"));
    assert_eq!(selected, expected);
}

#[test]
fn empty_selection_reads_the_flat_total() {
    let doc = fixture_document();
    let selected = select_actual_series(&doc.cube, &FilterSelection::default());
    assert_eq!(selected, doc.cube.total);
}

#[test]
fn missing_combinations_are_zero_not_errors() {
    let doc = fixture_document();
    let selected = select_actual_series(&doc.cube, &selection(&["EMEA"], &["unassigned"]));
    assert!(selected.is_zero());
}

#[test]
fn scope_selection_resolves_through_the_scope_layers() {
    let doc = fixture_document();
    let scopes: BTreeSet<String> = ["Email".to_string()].into();

    let flat = select_scope_series(&doc.cube, &FilterSelection::default(), &scopes);
    assert_eq!(&flat, doc.cube.scope("Email").expect("scope layer"));

    let cell = select_scope_series(&doc.cube, &selection(&["EMEA"], &["dev"]), &scopes);
    assert_eq!(
        &cell,
        doc.cube
            .entity_role_scope("EMEA", "dev", "Email")
            .expect("deep cell")
    );
}
