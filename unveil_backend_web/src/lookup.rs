// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use unveil_core::mount::ElementLookup;
use web_sys::{Document, Element};

/// Finds required elements with `Document::get_element_by_id`.
#[derive(Clone, Copy, Debug)]
pub struct DocumentLookup<'a>(pub &'a Document);

impl ElementLookup for DocumentLookup<'_> {
    type Element = Element;

    fn find(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }
}
