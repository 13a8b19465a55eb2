// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use burnline_core::canonical::stable_json_bytes;
use burnline_engine::{build_view, document_hash, view_cache_key, ViewOptions};
use burnline_model::{BudgetDocument, FilterSelection};

fn fixture_document() -> BudgetDocument {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(root.join("tests/fixtures/midyear_document.json"))
        .expect("read fixture");
    serde_json::from_str(&raw).expect("decode fixture")
}

fn selections() -> Vec<FilterSelection> {
    vec![
        FilterSelection::default(),
        FilterSelection {
            entities: ["EMEA".to_string()].into(),
            ..Default::default()
        },
        FilterSelection {
            role_ids: ["dev".to_string(), "qa".to_string()].into(),
            workstreams: ["Email".to_string()].into(),
            ..Default::default()
        },
    ]
}

#[test]
fn identical_inputs_yield_deep_equal_views() {
    let doc = fixture_document();
    let options = ViewOptions::default();
    for selection in selections() {
        let first = build_view(&doc, &selection, &options);
        let second = build_view(&doc, &selection, &options);
        assert_eq!(first, second);
        assert_eq!(
            stable_json_bytes(&first).expect("bytes"),
            stable_json_bytes(&second).expect("bytes"),
            "serialized views must be byte-identical"
        );
    }
}

#[test]
fn cache_keys_are_stable_and_selective() {
    let doc = fixture_document();
    let doc_hash = document_hash(&doc).expect("document hash");
    let options = ViewOptions::default();

    let empty = FilterSelection::default();
    let key_a = view_cache_key(&doc_hash, &empty, &options).expect("key");
    let key_b = view_cache_key(&doc_hash, &empty, &options).expect("key");
    assert_eq!(key_a, key_b);

    let narrowed = FilterSelection {
        entities: ["EMEA".to_string()].into(),
        ..Default::default()
    };
    let key_c = view_cache_key(&doc_hash, &narrowed, &options).expect("key");
    assert_ne!(key_a, key_c);
}

#[test]
fn document_hash_survives_reencoding() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(root.join("tests/fixtures/midyear_document.json"))
        .expect("read fixture");
    let doc: BudgetDocument = serde_json::from_str(&raw).expect("decode");
    let reencoded: BudgetDocument =
        serde_json::from_str(&serde_json::to_string(&doc).expect("encode")).expect("re-decode");
    assert_eq!(
        document_hash(&doc).expect("hash"),
        document_hash(&reencoded).expect("hash")
    );
}
