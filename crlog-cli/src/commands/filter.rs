//! Filter command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::OutputTarget;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use crlog_core::{FilterStats, OverwriteMode, StreamFilter};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for filtering a stream
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Input file ("-" reads standard input)
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read chunk size in KB
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

    /// Drop the whole line on every carriage return instead of overwriting in place
    #[arg(long)]
    pub truncate: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print run statistics as JSON on stderr
    #[arg(long)]
    pub stats: bool,

    /// Show a progress bar on stderr (file input only)
    #[arg(long)]
    pub progress: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Suppress logging and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FilterArgs {
    /// Execute the filter
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::from_file(path)?
            }
            None => CliConfig::default(),
        };
        let config = self.effective_config(file_config)?;

        if self.dump_config {
            print!("{}", config.to_toml_string()?);
            return Ok(());
        }

        let source = InputSource::from_arg(&self.input);
        let target = OutputTarget::from_option(self.output.as_deref());

        if let Some(output) = &self.output {
            if source.same_file_as(output) {
                return Err(CliError::InvalidArgument(format!(
                    "input and output are the same file: {}",
                    output.display()
                ))
                .into());
            }
        }

        let progress = self.progress_reporter(&source)?;
        let reader = progress.wrap_read(source.open()?);
        let mut sink = target.open()?;

        let filter = StreamFilter::with_config(config.to_filter_config()?);
        let stats = match filter.run(&source.name(), reader, &target.name(), &mut sink) {
            Ok(stats) => {
                progress.finish();
                stats
            }
            Err(e) => {
                progress.abandon();
                return Err(e.into());
            }
        };

        sink.close().map_err(|e| crlog_core::Error::close(target.name(), e))?;

        if config.output.stats {
            report_stats(&stats)?;
        }

        Ok(())
    }

    /// Merge command-line flags over the configuration file
    pub fn effective_config(&self, mut config: CliConfig) -> Result<CliConfig> {
        if let Some(chunk_kb) = self.chunk_kb {
            config.filter.chunk_size_kb = chunk_kb;
        }

        if config.filter.chunk_size_kb == 0 {
            return Err(
                CliError::InvalidArgument("Chunk size must be greater than 0".to_string()).into(),
            );
        }

        if self.truncate {
            config.filter.mode = OverwriteMode::Truncate;
        }

        if self.stats {
            config.output.stats = true;
        }

        Ok(config)
    }

    fn progress_reporter(&self, source: &InputSource) -> Result<ProgressReporter> {
        if !self.progress || self.quiet {
            return Ok(ProgressReporter::disabled());
        }

        match source.len_hint() {
            Some(total) => ProgressReporter::bytes(total),
            None => {
                log::warn!("Progress is only shown for regular input files");
                Ok(ProgressReporter::disabled())
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when driven from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn report_stats(stats: &FilterStats) -> Result<()> {
    let mut stderr = io::stderr().lock();
    serde_json::to_writer_pretty(&mut stderr, stats)?;
    writeln!(stderr)?;
    Ok(())
}
