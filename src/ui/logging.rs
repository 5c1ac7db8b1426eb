use crate::config::PlaylistConfig;
use crate::playlist::BuildSummary;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // A second initialization (tests, embedding) keeps the first logger
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the resolved run configuration
pub fn log_config_info(config: &PlaylistConfig) {
    info!(
        "Template: {}, range={}..={}, padding={}",
        config.template, config.start, config.end, config.padding
    );
    info!(
        "Output: {} (format={})",
        config.output_path.display(),
        config.format
    );
    if config.verify {
        info!(
            "Verification: threads={}, timeout={}s, follow_redirects={}",
            config.threads,
            config.timeout.as_secs(),
            config.follow_redirects
        );
    }
}

/// Log the start of the verification phase
pub fn log_verification_start(url_count: usize, workers: usize) {
    info!("Verifying {url_count} URLs with {workers} concurrent probes");
}

/// Log verification completion
pub fn log_verification_complete(valid: usize, invalid: usize, duration_ms: u128) {
    if invalid == 0 {
        info!("✅ Verification complete: {valid} valid ({duration_ms}ms)");
    } else {
        warn!("❌ Verification complete: {valid} valid, {invalid} invalid ({duration_ms}ms)");
    }
}

/// Log the outcome of a single probe
pub fn log_probe_result(url: &str, status: Option<u16>, description: Option<&str>) {
    match (status, description) {
        (Some(status), _) => debug!("{url} -> {status}"),
        (None, Some(desc)) => debug!("✗ {url} -> {desc}"),
        (None, None) => debug!("? {url} -> unknown"),
    }
}

/// Log a finished playlist
pub fn log_playlist_written(summary: &BuildSummary) {
    info!(
        "Wrote {} of {} entries to {} ({})",
        summary.accepted,
        summary.total,
        summary.output_path.display(),
        summary.format
    );
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
    }

    #[test]
    fn test_log_helpers_dont_panic() {
        log_verification_start(10, 4);
        log_verification_complete(10, 0, 12);
        log_verification_complete(8, 2, 120);
        log_probe_result("http://x/1", Some(200), None);
        log_probe_result("http://x/2", None, Some("connection refused"));
        log_probe_result("http://x/3", None, None);
        log_playlist_written(&BuildSummary {
            total: 4,
            accepted: 3,
            rejected: 1,
            verified: true,
            format: crate::playlist::PlaylistFormat::M3u,
            output_path: std::path::PathBuf::from("out.m3u"),
        });
        log_warning("careful");
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        log_error("Could not open output file", Some(&err));
        log_error("Could not open output file", None);
    }
}
