use std::path::PathBuf;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the document-store snapshot lives.
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_path = std::env::var("TRACKER_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("tracker.json"));

        Ok(Self { data_path })
    }
}
