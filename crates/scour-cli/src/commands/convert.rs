//! Convert command implementation.
//!
//! Turns a raw log file into paired action/document NDJSON records.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use scour_ingest::{
    ApacheConverter, BulkWriter, ConvertStats, HdfsConverter, LineConverter,
    ThunderbirdConverter, convert_stream,
};

use crate::cli::{ConvertArgs, LogFormat};
use crate::error::Result;
use crate::output::{ConvertSummary, OutputFormat};

/// Handler for the convert command.
pub struct ConvertCommand;

impl ConvertCommand {
    /// Executes the convert command.
    ///
    /// With `--output`, records go to the file and a summary goes to `out`.
    /// Without it, records stream to stdout and no summary is printed, so
    /// the output stays pure NDJSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output cannot be
    /// written. Malformed log lines are skipped, not fatal.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &ConvertArgs,
    ) -> Result<()> {
        let converter: &dyn LineConverter = match args.log_format {
            LogFormat::Apache => &ApacheConverter,
            LogFormat::Hdfs => &HdfsConverter,
            LogFormat::Thunderbird => &ThunderbirdConverter,
        };
        let reader = BufReader::new(File::open(&args.input)?);

        match &args.output {
            Some(path) => {
                let mut writer = BulkWriter::new(BufWriter::new(File::create(path)?));
                let stats = convert_stream(converter, reader, &mut writer)?;
                writer.flush()?;
                self.write_summary(out, format, converter.collection(), &path.display().to_string(), stats)
            }
            None => {
                let mut writer = BulkWriter::new(io::stdout().lock());
                convert_stream(converter, reader, &mut writer)?;
                writer.flush()?;
                Ok(())
            }
        }
    }

    fn write_summary<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        collection: &str,
        output: &str,
        stats: ConvertStats,
    ) -> Result<()> {
        let summary = ConvertSummary {
            collection: collection.to_string(),
            output: output.to_string(),
            stats,
        };
        format.write(out, &summary)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::path::PathBuf;

    use crate::cli::Format;

    const APACHE_LINES: &str = "\
[Sun Dec 04 04:47:44 2005] [notice] workerEnv.init() ok /etc/httpd/conf/workers2.properties
not a log line
[Mon Dec 05 07:57:02 2005] [error] mod_jk child workerEnv in error state 6
";

    fn write_input(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("input.log");
        std::fs::write(&path, content).expect("write input");
        path
    }

    #[test]
    fn converts_file_to_file_with_summary() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_input(&dir, APACHE_LINES);
        let output = dir.path().join("out.ndjson");

        let args = ConvertArgs {
            log_format: LogFormat::Apache,
            input,
            output: Some(output.clone()),
        };

        let mut shown = Vec::new();
        ConvertCommand
            .execute(&mut shown, &OutputFormat::new(Format::Table), &args)
            .expect("convert");

        let mut records = String::new();
        File::open(&output)
            .expect("open output")
            .read_to_string(&mut records)
            .expect("read output");
        let lines: Vec<&str> = records.lines().collect();
        // Two parsed lines, each as an action/document pair.
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"{"index":{"_index":"apache"}}"#);

        let summary = String::from_utf8(shown).expect("utf8 summary");
        assert!(summary.contains("Lines read:     3"));
        assert!(summary.contains("Docs emitted:   2"));
        assert!(summary.contains("Lines skipped:  1"));
    }

    #[test]
    fn missing_input_file_is_fatal() {
        let args = ConvertArgs {
            log_format: LogFormat::Apache,
            input: PathBuf::from("/nonexistent/input.log"),
            output: None,
        };

        let mut shown = Vec::new();
        let result =
            ConvertCommand.execute(&mut shown, &OutputFormat::new(Format::Table), &args);
        assert!(result.is_err());
    }
}
