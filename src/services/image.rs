use crate::api::assets;
use crate::constants::{DEFAULT_PICTURE, PICTURES_DIR, STATIC_URL_PREFIX};
use crate::models::recipe::PhotoUpload;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};
use uuid::Uuid;

/// Stores uploaded recipe photos in a flat directory under generated names.
pub struct ImageService {
    pictures_dir: PathBuf,
}

impl ImageService {
    #[must_use]
    pub const fn new(pictures_dir: PathBuf) -> Self {
        Self { pictures_dir }
    }

    #[must_use]
    pub fn pictures_dir(&self) -> &Path {
        &self.pictures_dir
    }

    /// Creates the pictures directory and drops the placeholder picture into it.
    pub async fn ensure_dir(&self) -> Result<()> {
        if !self.pictures_dir.exists() {
            fs::create_dir_all(&self.pictures_dir).await.with_context(|| {
                format!(
                    "Failed to create pictures directory {}",
                    self.pictures_dir.display()
                )
            })?;
        }

        let placeholder = self.pictures_dir.join(DEFAULT_PICTURE);
        if !placeholder.exists() {
            let Some(data) = assets::default_picture() else {
                warn!("Placeholder picture is missing from the embedded assets");
                return Ok(());
            };
            fs::write(&placeholder, data).await.with_context(|| {
                format!("Failed to write placeholder {}", placeholder.display())
            })?;
            info!(path = %placeholder.display(), "Installed placeholder picture");
        }

        Ok(())
    }

    /// Writes the upload under a fresh name and returns that name.
    pub async fn save_upload(&self, upload: &PhotoUpload) -> Result<String> {
        let filename = unique_filename(&upload.filename);
        self.ensure_dir().await?;

        let file_path = self.pictures_dir.join(&filename);
        fs::write(&file_path, &upload.data)
            .await
            .with_context(|| format!("Failed to write image to {}", file_path.display()))?;

        info!(
            original = %upload.filename,
            path = %file_path.display(),
            bytes = upload.data.len(),
            "Saved recipe photo"
        );

        Ok(filename)
    }

    /// Deletes a stored photo. Returns `false` when the file was already gone.
    pub async fn remove(&self, filename: &str) -> Result<bool> {
        let file_path = self.pictures_dir.join(filename);
        if !file_path.exists() {
            warn!(path = %file_path.display(), "Photo to remove does not exist");
            return Ok(false);
        }

        fs::remove_file(&file_path)
            .await
            .with_context(|| format!("Failed to remove image {}", file_path.display()))?;
        info!(path = %file_path.display(), "Removed recipe photo");
        Ok(true)
    }

    #[must_use]
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.pictures_dir.join(filename)
    }

    /// Public URL of a recipe photo, or of the placeholder when there is none.
    #[must_use]
    pub fn public_url(image: Option<&str>) -> String {
        let name = image.unwrap_or(DEFAULT_PICTURE);
        format!("{STATIC_URL_PREFIX}/{PICTURES_DIR}/{name}")
    }
}

/// Reduces a client-supplied filename to a safe ASCII base name.
///
/// Directory components are dropped, whitespace runs become `_`, anything outside
/// `[A-Za-z0-9_.-]` is removed and leading/trailing `.`/`_` are trimmed.
#[must_use]
pub fn secure_filename(original: &str) -> String {
    let ascii: String = original.chars().filter(char::is_ascii).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Random hex identifier plus the sanitized extension of `original`.
#[must_use]
pub fn unique_filename(original: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    let safe = secure_filename(original);

    match Path::new(&safe).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{id}.{ext}"),
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("My cool photo.jpg"), "My_cool_photo.jpg");
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("C:\\Users\\me\\dish.PNG"), "C_Users_me_dish.PNG");
        assert_eq!(secure_filename("борщ.jpeg"), "jpeg");
        assert_eq!(secure_filename(".hidden"), "hidden");
    }

    #[test]
    fn test_unique_filename_keeps_extension() {
        let name = unique_filename("soup.jpg");
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.len(), 32 + ".jpg".len());
        assert_ne!(name, "soup.jpg");
        assert_ne!(unique_filename("soup.jpg"), name);
    }

    #[test]
    fn test_unique_filename_without_extension() {
        let name = unique_filename("README");
        assert_eq!(name.len(), 32);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit()));

        // Only the extension survives sanitizing, so it becomes a bare name
        assert_eq!(unique_filename("фото.png").len(), 32);
        assert_eq!(unique_filename("борщ").len(), 32);
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            ImageService::public_url(Some("abc.png")),
            "/static/pictures/abc.png"
        );
        assert_eq!(
            ImageService::public_url(None),
            "/static/pictures/default.jpg"
        );
    }

    #[tokio::test]
    async fn test_save_and_remove_upload() {
        let dir = std::env::temp_dir().join(format!("cookbook-images-{}", Uuid::new_v4()));
        let service = ImageService::new(dir.join("pictures"));

        let upload = PhotoUpload {
            filename: "cake.webp".to_string(),
            data: vec![1, 2, 3],
        };
        let name = service.save_upload(&upload).await.unwrap();
        let path = service.path_for(&name);
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);

        assert!(service.remove(&name).await.unwrap());
        assert!(!path.exists());
        assert!(!service.remove(&name).await.unwrap());

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_ensure_dir_installs_placeholder() {
        let dir = std::env::temp_dir().join(format!("cookbook-images-{}", Uuid::new_v4()));
        let service = ImageService::new(dir.join("pictures"));

        service.ensure_dir().await.unwrap();
        let placeholder = service.path_for(DEFAULT_PICTURE);
        let data = std::fs::read(&placeholder).unwrap();
        assert!(data.starts_with(&[0xFF, 0xD8]));

        // An existing placeholder is left alone
        std::fs::write(&placeholder, b"custom").unwrap();
        service.ensure_dir().await.unwrap();
        assert_eq!(std::fs::read(&placeholder).unwrap(), b"custom");

        std::fs::remove_dir_all(dir).ok();
    }
}
