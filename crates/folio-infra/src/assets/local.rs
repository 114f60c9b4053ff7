//! Filesystem image storage organized by post id.
//!
//! Images live under `{public_dir}/{asset_root}/{post_id}/` and are addressed
//! publicly as `/{asset_root}/{post_id}/{name}`, where `name` is the upload
//! time in milliseconds followed by the client's filename.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;

use folio_core::domain::ImageUpload;
use folio_core::error::AssetError;
use folio_core::ports::ImageStore;

const IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

/// Filesystem manager for post images.
pub struct LocalImageStore {
    public_dir: PathBuf,
    asset_root: String,
}

impl LocalImageStore {
    /// Create a store serving `asset_root` (e.g. `images`) from `public_dir`.
    pub fn new(public_dir: impl Into<PathBuf>, asset_root: impl AsRef<str>) -> Self {
        Self {
            public_dir: public_dir.into(),
            asset_root: asset_root.as_ref().trim_matches('/').to_string(),
        }
    }

    /// Directory holding every post's image directory.
    pub fn root_dir(&self) -> PathBuf {
        self.public_dir.join(&self.asset_root)
    }

    /// Public path prefix, e.g. `/images`.
    pub fn url_prefix(&self) -> String {
        format!("/{}", self.asset_root)
    }

    fn post_dir(&self, post_id: &str) -> Result<PathBuf, AssetError> {
        if !is_single_segment(Path::new(post_id)) {
            return Err(AssetError::InvalidPath(post_id.to_string()));
        }
        Ok(self.root_dir().join(post_id))
    }

    /// Map a public path back to its file, refusing anything outside the asset root.
    fn resolve(&self, public_path: &str) -> Result<PathBuf, AssetError> {
        let invalid = || AssetError::InvalidPath(public_path.to_string());

        let relative = Path::new(public_path.trim_start_matches('/'))
            .strip_prefix(&self.asset_root)
            .map_err(|_| invalid())?;

        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if relative.as_os_str().is_empty() || !confined {
            return Err(invalid());
        }

        Ok(self.root_dir().join(relative))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn ensure_directory(&self, post_id: &str) -> Result<(), AssetError> {
        let dir = self.post_dir(post_id)?;
        fs::create_dir_all(&dir).await.map_err(|e| io_error(&dir, e))
    }

    async fn add_image(
        &self,
        post_id: &str,
        image: &ImageUpload,
    ) -> Result<Option<String>, AssetError> {
        if image.is_empty() {
            return Ok(None);
        }

        self.ensure_directory(post_id).await?;

        let name = stored_name(&image.filename, Utc::now().timestamp_millis());
        let path = self.post_dir(post_id)?.join(&name);
        fs::write(&path, &image.bytes)
            .await
            .map_err(|e| io_error(&path, e))?;

        tracing::debug!(
            post_id,
            path = %path.display(),
            bytes = image.bytes.len(),
            "Image stored"
        );
        Ok(Some(format!("{}/{}/{}", self.url_prefix(), post_id, name)))
    }

    async fn remove_image(&self, public_path: &str) -> Result<(), AssetError> {
        let path = self.resolve(public_path)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Image already gone");
                Ok(())
            }
            Err(e) => Err(io_error(&path, e)),
        }
    }

    async fn purge_directory(&self, post_id: &str) -> Result<(), AssetError> {
        let dir = self.post_dir(post_id)?;
        match fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&dir, e)),
        }
    }

    async fn list_images(&self) -> Result<Vec<String>, AssetError> {
        let root = self.root_dir();
        let mut found = Vec::new();
        let mut pending = vec![(root.clone(), self.url_prefix())];

        while let Some((dir, prefix)) = pending.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound && dir == root => break,
                Err(e) => return Err(io_error(&dir, e)),
            };

            while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(&dir, e))? {
                let name = entry.file_name().to_string_lossy().into_owned();
                let file_type = entry.file_type().await.map_err(|e| io_error(&dir, e))?;
                let url = format!("{prefix}/{name}");

                if file_type.is_dir() {
                    pending.push((entry.path(), url));
                } else if is_image(&name) {
                    found.push(url);
                }
            }
        }

        found.sort();
        Ok(found)
    }
}

/// `{millis}-{basename}`; directory parts of the client filename are dropped.
fn stored_name(filename: &str, millis: i64) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let base = match base {
        "" | "." | ".." => "image",
        other => other,
    };
    format!("{millis}-{base}")
}

fn is_single_segment(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn is_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn io_error(path: &Path, err: std::io::Error) -> AssetError {
    AssetError::Io(format!("{}: {}", path.display(), err))
}
