use std::{env, path::PathBuf};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the durable records (default: ".eventdesk")
    pub data_dir: PathBuf,
    /// Rows per page in the event table (default: 10)
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTDESK_DATA_DIR` - data directory (default: ".eventdesk")
    /// - `EVENTDESK_PAGE_SIZE` - table page size (default: 10)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("EVENTDESK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".eventdesk")),
            page_size: env::var("EVENTDESK_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&size| size > 0)
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_falls_back_to_default() {
        // parse succeeds but 0 is unusable for pagination
        env::set_var("EVENTDESK_PAGE_SIZE", "0");
        let config = Config::from_env();
        env::remove_var("EVENTDESK_PAGE_SIZE");

        assert_eq!(config.page_size, 10);
    }
}
