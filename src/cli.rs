//! Command-line interface for inspecting typed extraction over delimited text.
//!
//! The tokenizer here is deliberately naive: each line is split on the field
//! delimiter with no quoting rules. It exists to drive the extractors from
//! the command line, not to replace a real CSV reader.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::ExtractorConfig;
use crate::constants::{DEFAULT_ARRAY_DELIMITER, DEFAULT_FIELD_DELIMITER};
use crate::registry::ExtractorRegistry;
use crate::schema::ColumnSchema;
use crate::stats::RunStats;

#[derive(Parser, Debug)]
#[command(name = "field-extract")]
#[command(about = "Extract typed values from delimited text using a column schema")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Column schema such as "id:LONG,name,tags:String[]" (first input line when omitted)
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Separator between array elements inside a field
    #[arg(short, long, default_value_t = DEFAULT_ARRAY_DELIMITER)]
    pub array_delimiter: char,

    /// Separator between fields
    #[arg(short, long, default_value_t = DEFAULT_FIELD_DELIMITER)]
    pub field_delimiter: char,

    /// Trim whitespace around each field
    #[arg(long)]
    pub trim: bool,

    /// List every extractor type name and exit
    #[arg(long)]
    pub list_types: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the extractor configuration from the arguments
    pub fn to_config(&self) -> ExtractorConfig {
        let config = ExtractorConfig::default()
            .with_array_delimiter(self.array_delimiter)
            .with_field_delimiter(self.field_delimiter);
        if self.trim {
            config.with_trimmed_fields()
        } else {
            config
        }
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("field_extract={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Split one line into `(offset, length)` field spans
pub fn split_fields(line: &[char], delimiter: char, trim: bool) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;

    for (index, &ch) in line.iter().enumerate() {
        if ch == delimiter {
            spans.push(field_span(line, start, index, trim));
            start = index + 1;
        }
    }
    spans.push(field_span(line, start, line.len(), trim));

    spans
}

fn field_span(line: &[char], mut start: usize, mut end: usize, trim: bool) -> (usize, usize) {
    if trim {
        while start < end && line[start].is_whitespace() {
            start += 1;
        }
        while end > start && line[end - 1].is_whitespace() {
            end -= 1;
        }
    }
    (start, end - start)
}

/// Run the command described by `args`
pub fn run(args: &Args) -> Result<RunStats> {
    let config = args.to_config();
    let registry = ExtractorRegistry::from_config(&config).context("Invalid delimiter settings")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_types {
        for name in registry.names() {
            writeln!(out, "{}", name)?;
        }
        return Ok(RunStats::new());
    }

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stats = process_reader(
        reader,
        &mut out,
        &registry,
        &config,
        args.schema.as_deref(),
    )?;

    print_summary(&stats);
    Ok(stats)
}

/// Extract every data line of `reader`, writing `name=value` rows to `out`
///
/// Failing rows are counted and reported without stopping the run.
pub fn process_reader<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    registry: &ExtractorRegistry,
    config: &ExtractorConfig,
    schema: Option<&str>,
) -> Result<RunStats> {
    let mut lines = reader.lines().enumerate();

    let schema = match schema {
        Some(header) => ColumnSchema::parse(header, config.field_delimiter, registry)?,
        None => {
            let (_, header) = lines
                .next()
                .context("Input is empty and no --schema was given")?;
            let header = header.context("Failed to read schema header line")?;
            ColumnSchema::parse(header.trim_end(), config.field_delimiter, registry)?
        }
    };
    info!("Extracting {} columns per record", schema.len());

    let mut stats = RunStats::new();
    for (line_index, line) in lines {
        let line = line.context("Failed to read input line")?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let line_number = line_index + 1;
        let data: Vec<char> = line.chars().collect();
        let spans = split_fields(&data, config.field_delimiter, config.trim_fields);

        match schema.extract_record(&data, &spans) {
            Ok(values) => {
                let rendered: Vec<String> = schema
                    .columns()
                    .iter()
                    .zip(&values)
                    .map(|(column, value)| format!("{}={}", column.name, value))
                    .collect();
                writeln!(out, "{}", rendered.join(" "))?;
                stats.record_success();
            }
            Err(error) => {
                eprintln!(
                    "{} {}",
                    format!("line {}:", line_number).bright_red().bold(),
                    error
                );
                stats.record_failure(line_number, error.to_string());
            }
        }
    }

    Ok(stats)
}

fn print_summary(stats: &RunStats) {
    let rate = format!("{:.1}%", stats.success_rate());
    eprintln!(
        "{} {} records, {} extracted, {} failed ({})",
        "Summary:".bright_green().bold(),
        stats.total_records,
        stats.records_extracted.to_string().bright_cyan(),
        stats.records_failed.to_string().bright_yellow(),
        if stats.has_failures() {
            rate.bright_yellow()
        } else {
            rate.bright_green()
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(
            split_fields(&chars("a,bc,,d"), ',', false),
            vec![(0, 1), (2, 2), (5, 0), (6, 1)]
        );
        assert_eq!(split_fields(&chars(""), ',', false), vec![(0, 0)]);
        assert_eq!(split_fields(&chars("x,"), ',', false), vec![(0, 1), (2, 0)]);
    }

    #[test]
    fn test_split_fields_trimmed() {
        assert_eq!(
            split_fields(&chars(" 1 ,  ,x"), ',', true),
            vec![(1, 1), (6, 0), (7, 1)]
        );
    }

    #[test]
    fn test_log_level() {
        let args = Args::parse_from(["field-extract"]);
        assert_eq!(args.get_log_level(), "warn");
        let args = Args::parse_from(["field-extract", "-vv"]);
        assert_eq!(args.get_log_level(), "debug");
        let args = Args::parse_from(["field-extract", "-q", "-v"]);
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from(["field-extract", "-a", "|", "-f", "\t", "--trim"]);
        let config = args.to_config();
        assert_eq!(config.array_delimiter, '|');
        assert_eq!(config.field_delimiter, '\t');
        assert!(config.trim_fields);
    }

    #[test]
    fn test_process_reader_with_header_line() {
        let input = "id:INT,tags:String[]\n1,a;b\n\nx,c\n2,\n";
        let registry = ExtractorRegistry::build(';');
        let config = ExtractorConfig::default();
        let mut out = Vec::new();

        let stats =
            process_reader(Cursor::new(input), &mut out, &registry, &config, None).unwrap();

        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.records_extracted, 2);
        assert_eq!(stats.records_failed, 1);
        assert!(stats.errors[0].starts_with("line 4:"));

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "id=1 tags=[\"a\", \"b\"]\nid=2 tags=[]\n");
    }

    #[test]
    fn test_process_reader_with_explicit_schema() {
        let input = "true|1.5\r\nTrue|2\r\n";
        let registry = ExtractorRegistry::build(';');
        let config = ExtractorConfig::default().with_field_delimiter('|');
        let mut out = Vec::new();

        let stats = process_reader(
            Cursor::new(input),
            &mut out,
            &registry,
            &config,
            Some("ok:BOOLEAN|x:DOUBLE"),
        )
        .unwrap();

        assert_eq!(stats.records_extracted, 2);
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "ok=true x=1.5\nok=false x=2\n");
    }

    #[test]
    fn test_process_reader_empty_input_without_schema() {
        let registry = ExtractorRegistry::build(';');
        let config = ExtractorConfig::default();
        let mut out = Vec::new();
        assert!(process_reader(Cursor::new(""), &mut out, &registry, &config, None).is_err());
    }
}
