/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Defaults, playlist format names and HTTP classification bounds live here so
/// the CLI, config loader and playlist pipeline agree on them.
/// Playlist format names accepted on the command line and in config files
pub mod formats {
    pub const PLAIN: &str = "plain";
    pub const M3U: &str = "m3u";
    pub const M3U8: &str = "m3u8";
    pub const PLS: &str = "pls";
    pub const XSPF: &str = "xspf";

    /// Default playlist format
    pub const DEFAULT: &str = PLAIN;

    /// All valid playlist formats
    pub const ALL: [&str; 5] = [PLAIN, M3U, M3U8, PLS, XSPF];
}

/// HTTP status bounds used to classify a probe
pub mod http_status {
    /// Lowest status code counted as reachable
    pub const REACHABLE_MIN: u16 = 200;
    /// First status code no longer counted as reachable
    pub const REACHABLE_END: u16 = 400;
    /// Maximum number of redirects followed by a single probe
    pub const MAX_REDIRECTS: usize = 10;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-probe timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
    /// Largest timeout accepted from a config file (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
}

/// Default configuration values
pub mod defaults {
    /// Default number of concurrent probes
    pub const THREADS: usize = 4;
    /// Smallest usable number of concurrent probes
    pub const MIN_THREADS: usize = 1;
    /// Default zero-padding width (no padding)
    pub const PADDING: usize = 0;
    /// Progress is refreshed every this many processed items
    pub const PROGRESS_INTERVAL: usize = 10;
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".playgen.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Template constants
pub mod template {
    /// Character replaced by the generated number
    pub const WILDCARD: char = '*';
    /// Prefix used for generated entry titles
    pub const TITLE_PREFIX: &str = "Track ";
}

/// XSPF document constants
pub mod xspf {
    pub const XML_PROLOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
    pub const NAMESPACE: &str = "http://xspf.org/ns/0/";
    pub const VERSION: &str = "1";
}
