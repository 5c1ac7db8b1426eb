// Command-line interface definitions and parsing for playgen

use crate::config::CliConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    about = "Generate a playlist from a numbered URL template",
    long_about = None,
    disable_version_flag = true,
    after_help = "Examples:\n  playgen -l \"http://example.com/episode_*.mp3\" -s 1 -e 10 -p playlist.m3u -f m3u\n  playgen -l \"http://cdn.example.com/video_*.mp4\" -s 1 -e 100 -p videos.m3u8 -f m3u8 -z 3 -v"
)]
pub struct Cli {
    // Required
    /// URL template with wildcard (*)
    #[arg(
        short = 'l',
        long = "link",
        value_name = "TEMPLATE",
        help_heading = "Required"
    )]
    pub link: String,

    /// Starting number
    #[arg(
        short = 's',
        long,
        value_name = "START",
        allow_negative_numbers = true,
        help_heading = "Required"
    )]
    pub start: i64,

    /// Ending number
    #[arg(
        short = 'e',
        long,
        value_name = "END",
        allow_negative_numbers = true,
        help_heading = "Required"
    )]
    pub end: i64,

    /// Output playlist file
    #[arg(
        short = 'p',
        long = "playlist",
        value_name = "FILE",
        help_heading = "Required"
    )]
    pub playlist: PathBuf,

    // Playlist
    /// Playlist format: plain|m3u|m3u8|pls|xspf (default: plain)
    #[arg(short = 'f', long, value_name = "FORMAT", help_heading = "Playlist")]
    pub format: Option<String>,

    /// Zero-pad numbers (e.g., -z 3 for 001, 002, ...)
    #[arg(short = 'z', long, value_name = "WIDTH", help_heading = "Playlist")]
    pub padding: Option<usize>,

    /// Add prefix text to each entry
    #[arg(
        short = 'P',
        long,
        value_name = "TEXT",
        allow_hyphen_values = true,
        help_heading = "Playlist"
    )]
    pub prefix: Option<String>,

    /// Add suffix text to each entry
    #[arg(
        short = 'S',
        long,
        value_name = "TEXT",
        allow_hyphen_values = true,
        help_heading = "Playlist"
    )]
    pub suffix: Option<String>,

    // Verification
    /// Verify URLs (check if accessible)
    #[arg(short = 'v', long, help_heading = "Verification")]
    pub verify: bool,

    /// Number of concurrent URL checks (default: 4)
    #[arg(
        short = 't',
        long,
        value_name = "COUNT",
        allow_negative_numbers = true,
        help_heading = "Verification"
    )]
    pub threads: Option<i64>,

    /// Timeout per URL check in seconds (default: 5)
    #[arg(long, value_name = "SECONDS", help_heading = "Verification")]
    pub timeout: Option<u64>,

    /// Do not follow redirects when checking URLs
    #[arg(long, help_heading = "Verification")]
    pub no_redirects: bool,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Verification")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Verbose output
    #[arg(short = 'V', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Suppress progress and summary output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        link: Some(cli.link.clone()),
        start: Some(cli.start),
        end: Some(cli.end),
        output_path: Some(cli.playlist.clone()),
        format: cli.format.clone(),
        padding: cli.padding,
        prefix: cli.prefix.clone(),
        suffix: cli.suffix.clone(),
        verify: cli.verify,
        threads: cli.threads,
        timeout: cli.timeout,
        no_redirects: cli.no_redirects,
        user_agent: cli.user_agent.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
