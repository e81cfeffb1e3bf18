//! Discovery filter engine
//!
//! A single predicate pass over the catalog: free-text search, category chip
//! and price chip combine with AND; absent constraints impose no restriction.
//! Matching entries keep their catalog order. The engine has no error
//! conditions: unknown chip labels simply match nothing.

use crate::interface::{AccessTag, CatalogEntry, FilterCriteria};

/// Tags that satisfy the "Premium" price chip
const PREMIUM_TAGS: &[AccessTag] = &[AccessTag::Premium, AccessTag::Pro, AccessTag::Advanced];

/// The two price tiers the discovery screen offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceTier {
    Free,
    Premium,
}

impl PriceTier {
    /// Parse a chip label, case-insensitively. Unknown labels are None.
    fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "free" => Some(PriceTier::Free),
            "premium" => Some(PriceTier::Premium),
            _ => None,
        }
    }

    fn matches(&self, tags: &[AccessTag]) -> bool {
        match self {
            PriceTier::Free => tags.contains(&AccessTag::Free),
            PriceTier::Premium => tags.iter().any(|tag| PREMIUM_TAGS.contains(tag)),
        }
    }
}

impl FilterCriteria {
    /// Whether any constraint is active. An inactive criteria yields the full
    /// catalog; the UI uses this to tell "no matches" from "no filters".
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty() || self.category.is_some() || self.price_tier.is_some()
    }
}

/// Apply `criteria` to `entries`, preserving relative order.
pub fn apply(entries: &[CatalogEntry], criteria: &FilterCriteria) -> Vec<CatalogEntry> {
    let needle = if criteria.search_text.is_empty() {
        None
    } else {
        Some(criteria.search_text.to_lowercase())
    };
    let category = criteria.category.as_deref().map(str::to_lowercase);
    // Some(None) means an unknown tier label was supplied: matches nothing.
    let tier = criteria.price_tier.as_deref().map(PriceTier::from_label);

    entries
        .iter()
        .filter(|entry| {
            if let Some(needle) = &needle {
                if !text_matches(entry, needle) {
                    return false;
                }
            }
            if let Some(wanted) = &category {
                if entry.category.label().to_lowercase() != *wanted {
                    return false;
                }
            }
            match tier {
                Some(Some(tier)) => tier.matches(&entry.tags),
                Some(None) => false,
                None => true,
            }
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match over title, category label and vendor
fn text_matches(entry: &CatalogEntry, needle_lower: &str) -> bool {
    entry.title.to_lowercase().contains(needle_lower)
        || entry.category.label().to_lowercase().contains(needle_lower)
        || entry.vendor.to_lowercase().contains(needle_lower)
}
