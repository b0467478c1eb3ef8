//! Photo upload storage.

use serde::{Deserialize, Serialize};

fn default_upload_dir() -> String {
    String::from(".welfare/uploads")
}

fn default_url_prefix() -> String {
    String::from("/files/")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory uploaded photos are copied into.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Prefix of the reference URL returned for a stored photo.
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            url_prefix: default_url_prefix(),
        }
    }
}
