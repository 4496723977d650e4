// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use crate::mount::ElementRole;

/// Failure to bind the landing page to its document.
///
/// This is the only fatal condition: when it occurs the host logs it once and
/// leaves the page inert, with no listeners registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// A required element is absent from the document.
    #[error("required element `#{id}` ({role}) not found")]
    MissingElement {
        /// Which required element is missing.
        role: ElementRole,
        /// The identifier that was looked up.
        id: &'static str,
    },
}
