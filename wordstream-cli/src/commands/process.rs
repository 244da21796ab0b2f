//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::output::{JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordstream_engine::{CollectionSnapshot, StreamController};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Capacity of every ranking tracker
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Capacity of the most-frequent tracker (0 disables)
    #[arg(long, value_name = "N")]
    pub most_frequent: Option<usize>,

    /// Capacity of the longest-words tracker (0 disables)
    #[arg(long, value_name = "N")]
    pub longest: Option<usize>,

    /// Capacity of the shortest-words tracker (0 disables)
    #[arg(long, value_name = "N")]
    pub shortest: Option<usize>,

    /// Number of most common characters to report
    #[arg(long, value_name = "N")]
    pub top_chars: Option<usize>,

    /// Word separator characters, replacing the configured set
    #[arg(short, long, value_name = "CHARS")]
    pub separators: Option<String>,

    /// Count words exactly as written instead of lowercased
    #[arg(long)]
    pub case_sensitive: bool,

    /// Bytes requested per read
    #[arg(long, value_name = "BYTES")]
    pub buffer_size: Option<usize>,

    /// Input encoding label (e.g. utf-8, latin1)
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    Text,
    /// Collection snapshot as JSON
    Json,
    /// Markdown tables
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting word statistics");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let format = self.resolve_format(&config)?;

        let inputs = resolve_inputs(&self.input)?;
        let snapshot = self.collect(&config, &inputs).await?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        write_report(writer, format, config.output.pretty_json, &snapshot)
    }

    /// Configuration file (or defaults) with command-line overrides applied
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if let Some(capacity) = self.top {
            config.stats = config.stats.with_capacity(capacity);
        }
        if let Some(capacity) = self.most_frequent {
            config.stats.most_frequent = capacity;
        }
        if let Some(capacity) = self.longest {
            config.stats.longest = capacity;
        }
        if let Some(capacity) = self.shortest {
            config.stats.shortest = capacity;
        }
        if let Some(count) = self.top_chars {
            config.stats.top_chars = count;
        }
        if let Some(separators) = &self.separators {
            config.stream.separators = separators.chars().collect();
        }
        if self.case_sensitive {
            config.stream.ignore_case = false;
        }
        if let Some(bytes) = self.buffer_size {
            config.stream.buffer_size = bytes;
        }
        if let Some(label) = &self.encoding {
            config.stream.encoding = label.clone();
        }

        Ok(config)
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::UnknownFormat {
                    name: config.output.default_format.clone(),
                }
                .into()
            }),
        }
    }

    /// Stream every input into one collection and summarize it
    async fn collect(
        &self,
        config: &CliConfig,
        inputs: &[InputSource],
    ) -> Result<CollectionSnapshot> {
        let engine_config = config
            .stream
            .to_engine_config()
            .map_err(|e| CliError::InvalidStreamSettings(e.root_cause().to_string()))?;
        let controller = StreamController::with_config(engine_config)?;

        for tracker in config.stats.build_trackers()? {
            controller.add_stat(&tracker);
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(inputs.len() as u64);

        for input in inputs {
            log::debug!("streaming {}", input);
            let source = input
                .open()
                .await
                .map_err(|e| CliError::UnreadableInput {
                    input: input.to_string(),
                    reason: e.root_cause().to_string(),
                })?;
            controller.run_stream(source).await;
            progress.input_completed(&input.to_string(), controller.num_words());
        }
        progress.finish();

        log::info!(
            "Processed {} input(s): {} words, {} characters",
            inputs.len(),
            controller.num_words(),
            controller.num_chars()
        );

        Ok(controller.snapshot(config.stats.top_chars))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Write `snapshot` in the chosen format
pub fn write_report<W: Write>(
    writer: W,
    format: OutputFormat,
    pretty_json: bool,
    snapshot: &CollectionSnapshot,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new(writer).write_report(snapshot),
        OutputFormat::Json => JsonFormatter::new(writer, pretty_json).write_report(snapshot),
        OutputFormat::Markdown => MarkdownFormatter::new(writer).write_report(snapshot),
    }
}
