//! Resource card filter.
//!
//! Matching is a case-insensitive substring test against a card's title,
//! description and category. Matching cards stay visible and get a temporary
//! highlight; everything else is hidden.

use std::time::Duration;

use crate::config::SearchConfig;

/// Text pulled from one resource card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCard {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl ResourceCard {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// A non-blank, lowercased query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// `None` for empty or whitespace-only input. Surrounding whitespace is
    /// otherwise kept: `" api"` only matches text containing `" api"`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, card: &ResourceCard) -> bool {
        [&card.title, &card.description, &card.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Page-side operations over the card list.
pub trait CardSurface {
    fn cards(&self) -> Vec<ResourceCard>;
    fn set_visible(&mut self, index: usize, visible: bool);
    fn set_highlighted(&mut self, index: usize, highlighted: bool);
}

/// Deferred removal of the highlight, valid while `generation` is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightClear {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub matched: usize,
    pub total: usize,
    pub clear: HighlightClear,
}

#[derive(Debug, Clone)]
pub struct SearchFilter {
    generation: u64,
    highlight: Duration,
}

impl SearchFilter {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            generation: 0,
            highlight: config.highlight_duration(),
        }
    }

    /// Filter the cards. Blank input leaves the page untouched and returns `None`.
    pub fn search<S: CardSurface + ?Sized>(
        &mut self,
        raw: &str,
        surface: &mut S,
    ) -> Option<SearchOutcome> {
        let query = SearchQuery::parse(raw)?;
        let cards = surface.cards();
        let mut matched = 0;

        for (index, card) in cards.iter().enumerate() {
            if query.matches(card) {
                surface.set_visible(index, true);
                surface.set_highlighted(index, true);
                matched += 1;
            } else {
                surface.set_visible(index, false);
            }
        }

        if matched == 0 {
            tracing::info!(query = raw, "no resources found");
        } else {
            tracing::debug!(query = raw, matched, total = cards.len(), "resources filtered");
        }

        self.generation += 1;
        Some(SearchOutcome {
            matched,
            total: cards.len(),
            clear: HighlightClear {
                generation: self.generation,
                delay: self.highlight,
            },
        })
    }

    /// Remove the highlight from every card unless a newer search superseded it.
    pub fn clear_highlight<S: CardSurface + ?Sized>(
        &mut self,
        clear: HighlightClear,
        surface: &mut S,
    ) -> bool {
        if clear.generation != self.generation {
            return false;
        }
        for index in 0..surface.cards().len() {
            surface.set_highlighted(index, false);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_queries_are_rejected() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse("   \t"), None);
        assert_eq!(SearchQuery::parse("API").unwrap().as_str(), "api");
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let card = ResourceCard::new("Billing FAQ", "Invoices and receipts", "Guides");
        assert!(SearchQuery::parse("billing").unwrap().matches(&card));
        assert!(SearchQuery::parse("RECEIPT").unwrap().matches(&card));
        assert!(SearchQuery::parse("guide").unwrap().matches(&card));
        assert!(!SearchQuery::parse("api").unwrap().matches(&card));
    }

    #[test]
    fn inner_whitespace_is_significant() {
        let card = ResourceCard::new("API Reference", "", "");
        assert!(SearchQuery::parse("api ref").unwrap().matches(&card));
        assert!(!SearchQuery::parse("api  ref").unwrap().matches(&card));
    }
}
