//! Two-tier collection resolution.

use scour_lingua::PhraseMatcher;
use scour_registry::CollectionRegistry;
use tracing::debug;

use crate::error::Result;

/// Label under which collection names are registered with the phrase
/// matcher.
const COLLECTION_LABEL: &str = "collection";

/// One way of spotting collection mentions in free text.
///
/// Strategies are tried in a fixed order; the first one producing any
/// candidates wins. Candidates must be canonical registry names.
pub trait MatchStrategy: Send + Sync {
    /// Strategy name, used for diagnostics.
    fn name(&self) -> &'static str;

    /// Canonical names of collections this strategy finds in the text.
    fn candidates(&self, text: &str, registry: &CollectionRegistry) -> Vec<String>;
}

/// Linguistic phrase-match tier.
///
/// Registry names are compiled into an immutable phrase matcher; matched
/// phrases map back case-insensitively to their canonical registry names.
pub struct PhraseStrategy {
    matcher: PhraseMatcher,
}

impl PhraseStrategy {
    /// Compiles the registry's collection names into phrase patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a collection name fails to compile as a phrase.
    pub fn from_registry(registry: &CollectionRegistry) -> Result<Self> {
        let matcher = PhraseMatcher::builder()
            .phrases(COLLECTION_LABEL, registry.names())
            .build()?;
        Ok(Self { matcher })
    }
}

impl MatchStrategy for PhraseStrategy {
    fn name(&self) -> &'static str {
        "phrase"
    }

    fn candidates(&self, text: &str, registry: &CollectionRegistry) -> Vec<String> {
        self.matcher
            .find(text, COLLECTION_LABEL)
            .into_iter()
            // Unknown mentions are dropped, not reported.
            .filter_map(|phrase| registry.get(&phrase).map(|c| c.name.clone()))
            .collect()
    }
}

/// Substring fallback tier: case-insensitive containment of each registered
/// name in the raw text, registry order.
#[derive(Debug, Default)]
pub struct SubstringStrategy;

impl MatchStrategy for SubstringStrategy {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn candidates(&self, text: &str, registry: &CollectionRegistry) -> Vec<String> {
        let lower = text.to_lowercase();
        registry
            .iter()
            .filter(|config| lower.contains(&config.name.to_lowercase()))
            .map(|config| config.name.clone())
            .collect()
    }
}

/// Ordered strategy chain that determines which collections a query targets.
pub struct CollectionResolver {
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl std::fmt::Debug for CollectionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("CollectionResolver")
            .field("strategies", &names)
            .finish()
    }
}

impl CollectionResolver {
    /// Builds a resolver with a custom strategy chain.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        Self { strategies }
    }

    /// The standard chain: linguistic phrase match, then substring fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry's names fail phrase compilation.
    pub fn from_registry(registry: &CollectionRegistry) -> Result<Self> {
        Ok(Self::new(vec![
            Box::new(PhraseStrategy::from_registry(registry)?),
            Box::new(SubstringStrategy),
        ]))
    }

    /// Resolves the collections the text targets.
    ///
    /// The first strategy yielding any candidates wins. `None` means no
    /// collection was mentioned: search everything registered.
    #[must_use]
    pub fn resolve(&self, text: &str, registry: &CollectionRegistry) -> Option<Vec<String>> {
        for strategy in &self.strategies {
            let found = strategy.candidates(text, registry);
            if !found.is_empty() {
                debug!(strategy = strategy.name(), collections = ?found, "collections resolved");
                return Some(found);
            }
        }
        None
    }
}
