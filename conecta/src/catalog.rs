//! Curated catalog of AI tools
//!
//! The catalog is static configuration compiled into the crate. Entries are
//! defined as raw tables below and materialized into an immutable `Catalog`
//! that serves the home and discovery screens. Nothing mutates the catalog at
//! runtime.

use crate::interface::{AccessTag, CatalogEntry, Category, CategorySummary, ConectaError};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Raw catalog row, kept as static data
pub struct RawEntry {
    pub id: i64,
    pub title: &'static str,
    pub vendor: &'static str,
    pub category: Category,
    pub tags: &'static [AccessTag],
    pub description: &'static str,
    pub principal_uses: &'static [&'static str],
    pub pricing: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub featured: bool,
    pub added_unix: i64,
}

impl RawEntry {
    fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id,
            title: self.title.to_string(),
            vendor: self.vendor.to_string(),
            category: self.category,
            tags: self.tags.to_vec(),
            description: self.description.to_string(),
            principal_uses: self.principal_uses.iter().map(|u| u.to_string()).collect(),
            pricing: self.pricing.to_string(),
            url: self.url.to_string(),
            logo: self.logo.to_string(),
            featured: self.featured,
            added_unix: self.added_unix,
        }
    }
}

/// The built-in directory content
pub const BUILTIN_ENTRIES: &[RawEntry] = &[
    RawEntry {
        id: 1,
        title: "ChatGPT",
        vendor: "OpenAI",
        category: Category::Text,
        tags: &[AccessTag::Free, AccessTag::Premium],
        description: "Advanced conversational AI from OpenAI that helps with a wide variety of tasks.",
        principal_uses: &["Text", "Programming", "Analysis"],
        pricing: "Freemium / Plus subscription",
        url: "https://chatgpt.com/",
        logo: "chatgptlogo.png",
        featured: true,
        added_unix: 1_704_067_200,
    },
    RawEntry {
        id: 2,
        title: "GitHub Copilot",
        vendor: "GitHub & Microsoft",
        category: Category::Code,
        tags: &[AccessTag::Free, AccessTag::Premium],
        description: "Your AI pair programmer. Suggests whole lines and entire functions in real time.",
        principal_uses: &["Code", "Debugging", "Refactoring"],
        pricing: "Paid (free for students)",
        url: "https://github.com/copilot",
        logo: "githublogo.png",
        featured: true,
        added_unix: 1_706_745_600,
    },
    RawEntry {
        id: 3,
        title: "Gemini",
        vendor: "Google",
        category: Category::Multimodal,
        tags: &[AccessTag::Free, AccessTag::Advanced],
        description: "Google's most capable AI, built from the ground up to be multimodal across text, images, video, audio and code.",
        principal_uses: &["Research", "Text", "Google integration"],
        pricing: "Free / Advanced on Google One",
        url: "https://gemini.google.com",
        logo: "geminilogo.png",
        featured: true,
        added_unix: 1_711_929_600,
    },
    RawEntry {
        id: 4,
        title: "Midjourney",
        vendor: "Midjourney Inc.",
        category: Category::Image,
        tags: &[AccessTag::Premium],
        description: "AI art generator known for hyper-realistic, artistic and creative images from text prompts.",
        principal_uses: &["Digital art", "Design", "Concepts"],
        pricing: "Monthly subscription (from $10)",
        url: "https://www.midjourney.com",
        logo: "midjourneylogo.png",
        featured: true,
        added_unix: 1_714_521_600,
    },
    RawEntry {
        id: 104,
        title: "ElevenLabs",
        vendor: "ElevenLabs",
        category: Category::Audio,
        tags: &[AccessTag::Free, AccessTag::Premium],
        description: "Lifelike speech synthesis and voice cloning for narration and dubbing.",
        principal_uses: &["Voiceover", "Dubbing", "Narration"],
        pricing: "Freemium / tiered plans",
        url: "https://elevenlabs.io",
        logo: "elevenlabslogo.png",
        featured: false,
        added_unix: 1_729_500_000,
    },
    RawEntry {
        id: 105,
        title: "Runway",
        vendor: "Runway AI",
        category: Category::Video,
        tags: &[AccessTag::Premium],
        description: "Video generation and editing suite for creators, from text or image prompts.",
        principal_uses: &["Video generation", "VFX", "Editing"],
        pricing: "Subscription plans",
        url: "https://runwayml.com",
        logo: "runwaylogo.png",
        featured: false,
        added_unix: 1_733_000_000,
    },
    RawEntry {
        id: 106,
        title: "Notion AI",
        vendor: "Notion Labs",
        category: Category::Productivity,
        tags: &[AccessTag::Premium],
        description: "Writing and knowledge assistant built into the Notion workspace.",
        principal_uses: &["Writing", "Summaries", "Q&A"],
        pricing: "Paid add-on",
        url: "https://www.notion.com/product/ai",
        logo: "notionailogo.png",
        featured: false,
        added_unix: 1_736_000_000,
    },
    RawEntry {
        id: 102,
        title: "ClickUp Brain",
        vendor: "ClickUp",
        category: Category::Productivity,
        tags: &[AccessTag::Paid],
        description: "A neural network connecting your tasks, documents, people and company knowledge.",
        principal_uses: &["Project management", "Summaries", "Automation"],
        pricing: "Paid add-on per user/month",
        url: "https://clickup.com/ai",
        logo: "clickuplogo.png",
        featured: false,
        added_unix: 1_749_000_000,
    },
    RawEntry {
        id: 103,
        title: "Nano Banana",
        vendor: "Google",
        category: Category::Image,
        tags: &[AccessTag::Free, AccessTag::Beta],
        description: "Google's image generation AI, creating detailed, high-fidelity visuals from simple text prompts.",
        principal_uses: &["Image generation", "Graphic design", "Prototyping"],
        pricing: "Free during beta",
        url: "https://google.com",
        logo: "nanobananalogo.jpg",
        featured: false,
        added_unix: 1_751_500_000,
    },
    RawEntry {
        id: 101,
        title: "Claude",
        vendor: "Anthropic",
        category: Category::Text,
        tags: &[AccessTag::Free, AccessTag::Pro],
        description: "Safety-focused AI with a large context window for analyzing long documents.",
        principal_uses: &["Text", "File analysis", "Summaries"],
        pricing: "Freemium / paid Pro",
        url: "https://claude.ai",
        logo: "claudelogo.png",
        featured: false,
        added_unix: 1_753_000_000,
    },
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_entries(BUILTIN_ENTRIES.iter().map(RawEntry::to_entry).collect())
        .expect("built-in catalog has unique ids")
});

/// Immutable, ordered catalog with the read queries the screens need
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The compiled-in directory content
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a catalog from explicit entries. Ids must be unique.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, ConectaError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(ConectaError::InvalidInput(format!(
                    "duplicate catalog id {}",
                    entry.id
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_by_id(&self, id: i64) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Featured entries in catalog order
    pub fn featured(&self) -> Vec<CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.featured)
            .cloned()
            .collect()
    }

    /// Most recently added entries, newest first
    pub fn recently_added(&self, limit: usize) -> Vec<CatalogEntry> {
        let mut recent: Vec<CatalogEntry> = self.entries.clone();
        // Stable sort keeps catalog order for entries added at the same time
        recent.sort_by_key(|entry| std::cmp::Reverse(entry.added_unix));
        recent.truncate(limit);
        recent
    }

    /// Every category with its live entry count, in `Category::ALL` order
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        Category::ALL
            .iter()
            .map(|&category| CategorySummary {
                category,
                count: self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == category)
                    .count() as u32,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64) -> CatalogEntry {
        CatalogEntry {
            id,
            title: format!("Tool {id}"),
            vendor: "Vendor".to_string(),
            category: Category::Text,
            tags: vec![AccessTag::Free],
            description: String::new(),
            principal_uses: vec![],
            pricing: String::new(),
            url: "https://example.com".to_string(),
            logo: "logo.png".to_string(),
            featured: false,
            added_unix: id,
        }
    }

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        // from_entries would have rejected duplicates; double-check directly
        let mut ids: Vec<i64> = catalog.entries().iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_entries(vec![entry(1), entry(2), entry(1)]);
        assert!(matches!(result, Err(ConectaError::InvalidInput(_))));
    }

    #[test]
    fn test_featured_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let featured: Vec<i64> = catalog.featured().iter().map(|e| e.id).collect();
        assert_eq!(featured, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_recently_added_newest_first() {
        let catalog = Catalog::builtin();
        let recent: Vec<i64> = catalog
            .recently_added(3)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(recent, vec![101, 103, 102]);
    }

    #[test]
    fn test_recently_added_limit_larger_than_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.recently_added(1000).len(), catalog.len());
    }

    #[test]
    fn test_category_summaries_counts() {
        let catalog = Catalog::builtin();
        let summaries = catalog.category_summaries();
        assert_eq!(summaries.len(), Category::ALL.len());

        let count_for = |category: Category| {
            summaries
                .iter()
                .find(|s| s.category == category)
                .map(|s| s.count)
                .unwrap()
        };
        assert_eq!(count_for(Category::Text), 2);
        assert_eq!(count_for(Category::Image), 2);
        assert_eq!(count_for(Category::Code), 1);
        assert_eq!(count_for(Category::Productivity), 2);
    }

    #[test]
    fn test_entry_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.entry_by_id(1).unwrap().title, "ChatGPT");
        assert!(catalog.entry_by_id(999).is_none());
    }
}
