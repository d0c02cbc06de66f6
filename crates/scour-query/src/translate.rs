//! The translator: one immutable configuration object, built at startup,
//! shared by reference across every translation call.

use scour_lingua::Analyzer;
use scour_registry::CollectionRegistry;
use tracing::debug;

use crate::compile;
use crate::error::Result;
use crate::keyword;
use crate::limit;
use crate::request::SearchRequest;
use crate::resolve::CollectionResolver;
use crate::time;
use crate::types::ParsedQuery;

/// Behavioral knobs for translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslatorOptions {
    /// Keep stopwords in the extracted keyword instead of dropping them.
    pub keep_stopwords: bool,
}

/// Free-text to search-request translator.
///
/// Holds the registry snapshot, the compiled phrase patterns, and the
/// keyword exclusion list. Every field is read-only after construction, so
/// a shared reference can serve any number of concurrent translations.
pub struct Translator {
    registry: CollectionRegistry,
    analyzer: Analyzer,
    resolver: CollectionResolver,
    exclusions: Vec<String>,
    options: TranslatorOptions,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("collections", &self.registry.names())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Builds a translator with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry's collection names cannot be
    /// compiled into phrase patterns.
    pub fn new(registry: CollectionRegistry) -> Result<Self> {
        Self::with_options(registry, TranslatorOptions::default())
    }

    /// Builds a translator with explicit options.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry's collection names cannot be
    /// compiled into phrase patterns.
    pub fn with_options(registry: CollectionRegistry, options: TranslatorOptions) -> Result<Self> {
        let resolver = CollectionResolver::from_registry(&registry)?;
        let exclusions = keyword::exclusion_terms(&registry);
        Ok(Self {
            registry,
            analyzer: Analyzer::new(),
            resolver,
            exclusions,
            options,
        })
    }

    /// The registry this translator was built against.
    #[must_use]
    pub fn registry(&self) -> &CollectionRegistry {
        &self.registry
    }

    /// Parses free text into the intermediate query record.
    ///
    /// The four extractions are independent of one another, with one
    /// deliberate exception: limit phrases are searched only after
    /// time-range spans are removed, so "last 7 days top 50" reads as a
    /// 7-day window with limit 50 rather than limit 7.
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedQuery {
        let lookback_hours = time::extract_lookback_hours(text);
        let without_time = time::strip_time_phrases(text);
        let result_limit = limit::extract_limit(&without_time);
        let collections = self.resolver.resolve(text, &self.registry);

        let without_spans = limit::strip_limit_phrases(&without_time);
        let keyword = keyword::normalize_keyword(
            &self.analyzer,
            &without_spans,
            self.options.keep_stopwords,
            &self.exclusions,
        );

        let parsed = ParsedQuery {
            collections,
            lookback_hours,
            keyword,
            result_limit,
        };
        debug!(?parsed, "query parsed");
        parsed
    }

    /// Compiles a parsed query into a search request.
    #[must_use]
    pub fn compile(&self, parsed: &ParsedQuery) -> SearchRequest {
        compile::compile(parsed, &self.registry)
    }

    /// Translates free text straight to a search request.
    #[must_use]
    pub fn translate(&self, text: &str) -> SearchRequest {
        self.compile(&self.parse(text))
    }
}
