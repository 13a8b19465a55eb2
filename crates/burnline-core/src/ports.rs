// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Boundary for UI preference persistence (selected filters, column
/// presets). The engine itself never touches storage; hosts plug in a
/// browser/localStorage-backed or server-backed implementation.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
