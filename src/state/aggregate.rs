//! Merging fetched pages into the accumulated result list.

use crate::domain::{Page, Species};

/// Append `page` to `existing`, keeping arrival order.
///
/// No de-duplication: if the catalog changes between page fetches, shifted
/// offsets can repeat or skip entries. Both are passed through as received.
#[must_use]
pub fn append(mut existing: Vec<Species>, page: Page) -> Vec<Species> {
    existing.extend(page.into_species());
    existing
}
