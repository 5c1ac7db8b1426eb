use clap::Parser;
use playgen::config::{CliConfig, Config, PlaylistConfig};
use playgen::playlist::PlaylistBuilder;
use playgen::ui::ProgressReporter;
use playgen::ui::logging;
use playgen::ui::output;
use playgen::ui::{Cli, cli_to_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_playgen_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main playlist generation logic extracted from main() for testing
pub async fn run_playgen_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let playlist_config = PlaylistConfig::resolve(&cli_config, &config).inspect_err(|e| {
        logging::log_error("Invalid arguments", Some(e));
    })?;
    logging::log_config_info(&playlist_config);

    if !playlist_config.quiet {
        output::display_generation_start(playlist_config.range_len());
    }

    let mut progress = create_progress_reporter(&playlist_config);
    let summary = PlaylistBuilder::new(&playlist_config)
        .run(progress.as_mut())
        .await;
    finalize_progress_reporter(progress);
    let summary = summary?;

    if !playlist_config.quiet {
        output::display_summary(&summary);
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Create progress reporter if needed
pub fn create_progress_reporter(config: &PlaylistConfig) -> Option<ProgressReporter> {
    if config.show_progress {
        Some(ProgressReporter::new(true))
    } else {
        None
    }
}

/// Finalize progress reporting
pub fn finalize_progress_reporter(progress: Option<ProgressReporter>) {
    if let Some(ref progress) = progress {
        progress.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_cli(playlist: PathBuf) -> Cli {
        Cli {
            link: "http://example.com/episode_*.mp3".to_string(),
            start: 1,
            end: 3,
            playlist,
            format: None,
            padding: None,
            prefix: None,
            suffix: None,
            verify: false,
            threads: None,
            timeout: None,
            no_redirects: false,
            user_agent: None,
            verbose: false,
            quiet: true,
            no_progress: false,
            config: None,
            no_config: true,
        }
    }

    #[test]
    fn test_load_and_merge_config_no_config_flag() {
        let cli_config = CliConfig {
            no_config: true,
            threads: Some(12),
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config).unwrap();
        assert_eq!(config.threads, Some(12));
        assert_eq!(config.timeout, Some(5));
        assert_eq!(config.format.as_deref(), Some("plain"));
    }

    #[test]
    fn test_load_and_merge_config_with_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("playgen.toml");
        fs::write(&config_path, "timeout = 9\nformat = \"xspf\"\npadding = 2\n").unwrap();

        let cli_config = CliConfig {
            config_file: Some(config_path.to_string_lossy().to_string()),
            padding: Some(4),
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config).unwrap();
        assert_eq!(config.timeout, Some(9));
        assert_eq!(config.format.as_deref(), Some("xspf"));
        assert_eq!(config.padding, Some(4));
    }

    #[test]
    fn test_load_and_merge_config_invalid_file() {
        let cli_config = CliConfig {
            config_file: Some("/nonexistent/playgen.toml".to_string()),
            ..Default::default()
        };

        assert!(load_and_merge_config(&cli_config).is_err());
    }

    #[test]
    fn test_create_progress_reporter_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let cli = create_test_cli(temp_dir.path().join("out.txt"));
        let cli_config = cli_to_config(&Cli { quiet: false, ..cli });

        let config = PlaylistConfig::resolve(&cli_config, &Config::default()).unwrap();
        assert!(create_progress_reporter(&config).is_some());
    }

    #[test]
    fn test_create_progress_reporter_disabled_quiet() {
        let temp_dir = TempDir::new().unwrap();
        let cli = create_test_cli(temp_dir.path().join("out.txt"));

        let config = PlaylistConfig::resolve(&cli_to_config(&cli), &Config::default()).unwrap();
        assert!(create_progress_reporter(&config).is_none());
    }

    #[test]
    fn test_finalize_progress_reporter_none() {
        finalize_progress_reporter(None);
    }

    #[tokio::test]
    async fn test_run_playgen_logic_writes_playlist() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("out.m3u");
        let cli = Cli {
            format: Some("m3u".to_string()),
            padding: Some(3),
            ..create_test_cli(output_path.clone())
        };

        let exit_code = run_playgen_logic(&cli).await.unwrap();

        assert_eq!(exit_code, 0);
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("#EXTM3U\n"));
        assert!(content.contains("http://example.com/episode_002.mp3\n"));
        assert_eq!(content.lines().count(), 7);
    }

    #[tokio::test]
    async fn test_run_playgen_logic_rejects_inverted_range() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("out.txt");
        let cli = Cli {
            start: 5,
            end: 2,
            ..create_test_cli(output_path.clone())
        };

        let err = run_playgen_logic(&cli).await.unwrap_err();

        assert!(err.to_string().contains("Start value cannot be greater than end value"));
        assert!(!output_path.exists());
    }
}
