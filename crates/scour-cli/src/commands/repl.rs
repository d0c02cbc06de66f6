//! Interactive query loop.
//!
//! Reads raw query text from the operator, translates and executes it, and
//! prints formatted hits. Per-query failures are reported and the session
//! continues; only startup errors end the loop.

use std::io::{BufRead, Write};

use scour_query::Translator;
use tracing::debug;

use crate::client::SearchClient;
use crate::error::Result;
use crate::output::{HitList, OutputFormat};

/// Handler for the interactive query loop.
pub struct ReplCommand<'a> {
    translator: &'a Translator,
    client: &'a SearchClient,
}

impl<'a> ReplCommand<'a> {
    /// Creates a new REPL handler.
    #[must_use]
    pub const fn new(translator: &'a Translator, client: &'a SearchClient) -> Self {
        Self { translator, client }
    }

    /// Runs the loop until `exit`, `quit`, or end of input.
    ///
    /// Blank lines are ignored. Errors while processing a single query are
    /// printed and the loop keeps going.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub async fn execute<R: BufRead, W: Write>(
        &self,
        mut input: R,
        out: &mut W,
        format: &OutputFormat,
    ) -> Result<()> {
        writeln!(out, "Scour interactive search")?;
        writeln!(out, "Engine: {}", self.client.base_url())?;
        writeln!(out, "Type a query, or 'exit' to quit.")?;
        writeln!(out)?;

        let mut line = String::new();
        loop {
            write!(out, "query> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                writeln!(out, "Bye!")?;
                break;
            }

            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
                writeln!(out, "Bye!")?;
                break;
            }

            debug!(query, "processing interactive query");
            if let Err(err) = self.run_once(out, format, query).await {
                writeln!(out, "Error while processing query: {err}")?;
            }
        }
        Ok(())
    }

    async fn run_once<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        query: &str,
    ) -> Result<()> {
        let request = self.translator.translate(query);
        let response = self.client.search(&request).await?;
        let hits = HitList::new(&response.hits.hits, request.result_limit);
        writeln!(out)?;
        format.write(out, &hits)?;
        Ok(())
    }
}
