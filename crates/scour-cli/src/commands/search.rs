//! Search command implementation.
//!
//! Translates a free-text query, executes it, and prints the hits.

use std::io::Write;

use scour_query::Translator;

use crate::client::SearchClient;
use crate::error::Result;
use crate::output::{HitList, OutputFormat};

/// Handler for the search command.
pub struct SearchCommand<'a> {
    translator: &'a Translator,
    client: &'a SearchClient,
}

impl<'a> SearchCommand<'a> {
    /// Creates a new search command handler.
    #[must_use]
    pub const fn new(translator: &'a Translator, client: &'a SearchClient) -> Self {
        Self { translator, client }
    }

    /// Executes the search command.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine request fails or output cannot be
    /// written.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        query: &str,
    ) -> Result<()> {
        let request = self.translator.translate(query);
        let response = self.client.search(&request).await?;
        let hits = HitList::new(&response.hits.hits, request.result_limit);
        format.write(out, &hits)?;
        Ok(())
    }
}
