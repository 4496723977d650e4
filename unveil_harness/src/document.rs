// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;

use unveil_core::config::LandingConfig;
use unveil_core::mount::{ElementLookup, ElementRole};

/// A document reduced to the set of element ids it contains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimDocument {
    ids: BTreeSet<String>,
}

impl SimDocument {
    /// A document with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A document with every required element of `config`.
    #[must_use]
    pub fn complete(config: &LandingConfig) -> Self {
        ElementRole::ALL
            .iter()
            .fold(Self::empty(), |doc, role| doc.with(role.id(config)))
    }

    /// Adds an element id.
    #[must_use]
    pub fn with(mut self, id: &str) -> Self {
        self.ids.insert(id.to_owned());
        self
    }

    /// Removes an element id.
    #[must_use]
    pub fn without(mut self, id: &str) -> Self {
        self.ids.remove(id);
        self
    }
}

impl ElementLookup for SimDocument {
    type Element = String;

    fn find(&self, id: &str) -> Option<String> {
        self.ids.get(id).cloned()
    }
}
