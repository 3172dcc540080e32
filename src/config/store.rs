//! # Document Store Configuration
//!
//! Location of the on-disk document store root. Each collection lives in a
//! single JSON file under this directory.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `DATA_DIR` | Root directory for collection files | `./data` |

use std::{env, path::PathBuf};

/// Configuration for the JSON-file document store adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory that holds one `<collection>.json` file per collection.
    pub root: PathBuf,
}

impl StoreConfig {
    /// Builds a [`StoreConfig`] from environment variables.
    pub fn from_env() -> Self {
        let root = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        Self { root }
    }
}
