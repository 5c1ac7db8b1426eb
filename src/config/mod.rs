//! Configuration management
//!
//! This module handles loading optional defaults from TOML files, merging
//! them with CLI arguments and resolving the immutable run configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, formats, timeouts};
use crate::core::error::{PlaygenError, Result};
use crate::playlist::{Decoration, PlaylistFormat, Template};
use crate::validation::VerifierOptions;

/// Defaults that may come from a `.playgen.toml` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for a single URL check
    pub timeout: Option<u64>,

    /// Number of concurrent URL checks
    pub threads: Option<i64>,

    /// Playlist format (plain, m3u, m3u8, pls, xspf)
    pub format: Option<String>,

    /// Zero-padding width for generated numbers
    pub padding: Option<usize>,

    /// Follow redirects when checking URLs
    pub follow_redirects: Option<bool>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Show progress bars
    pub show_progress: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            threads: Some(defaults::THREADS as i64),
            format: Some(formats::DEFAULT.to_string()),
            padding: Some(defaults::PADDING),
            follow_redirects: Some(true),
            user_agent: None,
            verbose: Some(false),
            show_progress: Some(true),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PlaygenError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            PlaygenError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(defaults::CONFIG_FILE_NAME) {
            return config;
        }

        for i in 1..=defaults::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), defaults::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(threads) = cli_config.threads {
            self.threads = Some(threads);
        }
        if let Some(ref format) = cli_config.format {
            self.format = Some(format.clone());
        }
        if let Some(padding) = cli_config.padding {
            self.padding = Some(padding);
        }
        if cli_config.no_redirects {
            self.follow_redirects = Some(false);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.no_progress {
            self.show_progress = Some(false);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Effective number of concurrent checks; zero and negative become 1
    pub fn effective_threads(&self) -> usize {
        clamp_threads(self.threads.unwrap_or(defaults::THREADS as i64))
    }

    /// Validate values loaded from a config file
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            validate_timeout(timeout)?;
        }

        if let Some(ref format) = self.format
            && PlaylistFormat::from_name(format).is_none()
        {
            return Err(PlaygenError::Config(format!(
                "Invalid playlist format '{format}'. Expected one of: {}.",
                formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Reject a zero timeout and one above 24 hours.
pub fn validate_timeout(timeout: u64) -> Result<()> {
    if timeout == 0 {
        return Err(PlaygenError::Config(
            "Timeout cannot be 0. Expected a positive integer representing seconds.".to_string(),
        ));
    }
    if timeout > timeouts::MAX_TIMEOUT_SECONDS {
        return Err(PlaygenError::Config(format!(
            "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
        )));
    }
    Ok(())
}

/// Clamp a configured worker count to at least one.
pub fn clamp_threads(threads: i64) -> usize {
    usize::try_from(threads)
        .unwrap_or(defaults::MIN_THREADS)
        .max(defaults::MIN_THREADS)
}

/// Configuration options that can come from CLI
#[derive(Debug, Default, Clone)]
pub struct CliConfig {
    pub link: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub output_path: Option<PathBuf>,
    pub format: Option<String>,
    pub padding: Option<usize>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub verify: bool,
    pub threads: Option<i64>,
    pub timeout: Option<u64>,
    pub no_redirects: bool,
    pub user_agent: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub no_progress: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}

/// Fully resolved, read-only configuration of one playlist run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistConfig {
    pub template: Template,
    pub start: u64,
    pub end: u64,
    pub padding: usize,
    pub format: PlaylistFormat,
    pub verify: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub show_progress: bool,
    /// Concurrent URL checks, always at least 1
    pub threads: usize,
    pub timeout: Duration,
    pub follow_redirects: bool,
    pub user_agent: Option<String>,
    pub prefix_text: Option<String>,
    pub suffix_text: Option<String>,
    pub output_path: PathBuf,
}

impl PlaylistConfig {
    /// Combine CLI arguments with merged defaults and validate the result.
    ///
    /// # Errors
    /// Returns [`PlaygenError::Config`] for missing required arguments,
    /// non-positive bounds, `start > end` or a template without exactly one
    /// wildcard. Nothing is created on disk.
    pub fn resolve(cli_config: &CliConfig, config: &Config) -> Result<Self> {
        let (Some(link), Some(start), Some(end), Some(output_path)) = (
            cli_config.link.as_deref(),
            cli_config.start,
            cli_config.end,
            cli_config.output_path.as_ref(),
        ) else {
            return Err(PlaygenError::Config(
                "Missing required arguments (-l, -s, -e, -p)".to_string(),
            ));
        };

        if start <= 0 || end <= 0 {
            return Err(PlaygenError::Config(format!(
                "Start and end values must be positive (got {start} and {end})"
            )));
        }
        if start > end {
            return Err(PlaygenError::Config(
                "Start value cannot be greater than end value".to_string(),
            ));
        }
        if usize::try_from(end - start).is_err() {
            return Err(PlaygenError::Config(format!(
                "Range {start}..={end} has more entries than this platform can address"
            )));
        }
        if output_path.as_os_str().is_empty() {
            return Err(PlaygenError::Config(
                "Output playlist path cannot be empty".to_string(),
            ));
        }

        let template = Template::parse(link)?;
        // The CLI value bypasses the file validation
        validate_timeout(config.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))?;
        let verbose = config.verbose.unwrap_or(false);
        let show_progress = config.show_progress.unwrap_or(true) && !cli_config.quiet && !verbose;

        Ok(Self {
            template,
            start: start as u64,
            end: end as u64,
            padding: config.padding.unwrap_or(defaults::PADDING),
            format: config
                .format
                .as_deref()
                .map(PlaylistFormat::parse_lenient)
                .unwrap_or_default(),
            verify: cli_config.verify,
            verbose,
            quiet: cli_config.quiet,
            show_progress,
            threads: config.effective_threads(),
            timeout: config.timeout_duration(),
            follow_redirects: config.follow_redirects.unwrap_or(true),
            user_agent: config.user_agent.clone(),
            prefix_text: cli_config.prefix.clone(),
            suffix_text: cli_config.suffix.clone(),
            output_path: output_path.clone(),
        })
    }

    /// Number of source numbers in the range
    pub fn range_len(&self) -> usize {
        // `resolve` guarantees the span fits
        usize::try_from(self.end - self.start).map_or(usize::MAX, |span| span.saturating_add(1))
    }

    /// Every `(range_number, url)` pair in ascending order, generated lazily
    pub fn items(&self) -> impl Iterator<Item = (u64, String)> + '_ {
        (self.start..=self.end)
            .map(|number| (number, self.template.generate(number, self.padding)))
    }

    pub fn verifier_options(&self) -> VerifierOptions {
        VerifierOptions {
            timeout: self.timeout,
            follow_redirects: self.follow_redirects,
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn decoration(&self) -> Decoration {
        Decoration::new(self.prefix_text.clone(), self.suffix_text.clone())
    }
}
