//! Report configuration supplied by each platform shell.

use std::path::{Path, PathBuf};

/// File name of the statistics payload, relative to the page or resource dir.
pub const DATA_FILE_NAME: &str = "stats.json";

/// Where the statistics payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched by the browser, relative to the page.
    Url(String),
    /// Read from disk by native builds.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub source: DataSource,
}

impl ReportConfig {
    /// Desktop layout: `stats.json` next to the `avatars/` and `stickers/` folders.
    pub fn from_resource_dir(dir: &Path) -> Self {
        Self {
            source: DataSource::File(dir.join(DATA_FILE_NAME)),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Url(DATA_FILE_NAME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_default_fetches_relative_payload() {
        assert_eq!(
            ReportConfig::default().source,
            DataSource::Url("stats.json".into())
        );
    }

    #[test]
    fn desktop_reads_from_resource_dir() {
        let config = ReportConfig::from_resource_dir(Path::new("/opt/recap/assets"));
        assert_eq!(
            config.source,
            DataSource::File(PathBuf::from("/opt/recap/assets/stats.json"))
        );
    }
}
