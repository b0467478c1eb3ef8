//! Local photo store.
//!
//! Copies an image into the configured upload directory under a random hex
//! prefix and hands back the reference URL recorded on the animal.

use std::path::{Path, PathBuf};

use welfare_config::StorageConfig;
use welfare_core::entities::Animal;

use crate::error::DatabaseError;
use crate::service::WelfareService;

/// Extensions accepted as animal photos.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone)]
pub struct PhotoStore {
    upload_dir: PathBuf,
    url_prefix: String,
}

/// A photo copied into the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    pub path: PathBuf,
    pub url: String,
}

impl PhotoStore {
    #[must_use]
    pub fn new(upload_dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.upload_dir, config.url_prefix.clone())
    }

    /// Copy `source` into the upload directory.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the file is not an image by extension,
    /// or `DatabaseError::Io` if the copy fails.
    pub async fn store(&self, source: &Path) -> Result<StoredPhoto, DatabaseError> {
        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                DatabaseError::invalid(format!("'{}' has no file name", source.display()))
            })?;
        if !is_image(source) {
            return Err(DatabaseError::invalid(format!(
                "'{file_name}' is not an image (expected one of {})",
                IMAGE_EXTENSIONS.join(", ")
            )));
        }

        let stored_name = format!("{}_{}", random_prefix()?, sanitize(file_name));
        let path = self.upload_dir.join(&stored_name);

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let bytes = tokio::fs::copy(source, &path).await?;
        tracing::info!(path = %path.display(), bytes, "stored photo");

        Ok(StoredPhoto {
            url: format!("{}{stored_name}", self.url_prefix),
            path,
        })
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

fn random_prefix() -> Result<String, DatabaseError> {
    let mut buf = [0u8; 4];
    getrandom::fill(&mut buf).map_err(|e| DatabaseError::Other(anyhow::anyhow!("{e}")))?;
    Ok(buf.iter().map(|b| format!("{b:02x}")).collect())
}

/// Keep ASCII alphanumerics, `.`, `-` and `_`; replace everything else.
fn sanitize(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

impl WelfareService {
    /// Store a photo file and attach its URL to the animal.
    ///
    /// The animal is looked up first so nothing is copied for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown animal, or the photo store's
    /// error if the copy fails.
    pub async fn attach_photo(
        &self,
        photos: &PhotoStore,
        animal_id: &str,
        source: &Path,
    ) -> Result<Animal, DatabaseError> {
        self.get_animal(animal_id).await?;
        let stored = photos.store(source).await?;
        self.set_animal_photo(animal_id, &stored.url).await
    }
}
