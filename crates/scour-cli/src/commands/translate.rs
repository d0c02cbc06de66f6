//! Translate command implementation.
//!
//! Prints the compiled search request without executing it.

use std::io::Write;

use scour_query::Translator;

use crate::error::Result;
use crate::output::{OutputFormat, RequestOutput};

/// Handler for the translate command.
pub struct TranslateCommand<'a> {
    translator: &'a Translator,
}

impl<'a> TranslateCommand<'a> {
    /// Creates a new translate command handler.
    #[must_use]
    pub const fn new(translator: &'a Translator) -> Self {
        Self { translator }
    }

    /// Executes the translate command.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the output fails; translation
    /// itself never fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        query: &str,
    ) -> Result<()> {
        let request = self.translator.translate(query);
        format.write(out, &RequestOutput(request))?;
        Ok(())
    }
}
