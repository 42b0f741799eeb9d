//! Uploaded image persistence.
//!
//! Files are addressed by name only: `{filter}-{original file name}` inside
//! one flat directory. Two uploads with the same filter and the same
//! original name map to the same file and the later one wins; no
//! deduplication or locking is attempted.

use crate::error::AppError;
use reqwest::Url;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// An uploaded file, owned for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<ImageStore> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(ImageStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the original bytes under `{filter_name}-{file name}` and return
    /// the stored path. The filter name is not checked here.
    pub fn save(&self, image: &UploadedImage, filter_name: &str) -> Result<PathBuf, AppError> {
        let name = stored_file_name(filter_name, &image.file_name).ok_or(AppError::MissingImage)?;
        let path = self.dir.join(name);

        fs::write(&path, &image.bytes)?;
        log::info!("saved {} ({} bytes)", path.display(), image.bytes.len());

        Ok(path)
    }
}

/// `None` when the submitted name has no usable final component.
pub fn stored_file_name(filter_name: &str, original: &str) -> Option<String> {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")?;

    Some(format!("{filter_name}-{base}"))
}

/// Browsable reference to a stored file, relative to the page. The file
/// name is percent-encoded as one path segment.
pub fn image_url(path: &Path) -> String {
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();

    let Ok(mut url) = Url::parse("http://localhost/static/images") else {
        return format!("./static/images/{name}");
    };

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(&name);
    }

    format!(".{}", url.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    fn upload(file_name: &str, bytes: &[u8]) -> UploadedImage {
        UploadedImage {
            file_name: file_name.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_stored_file_name() {
        assert_eq!(stored_file_name("emboss", "cat.png").as_deref(), Some("emboss-cat.png"));
        assert_eq!(
            stored_file_name("edge enhance", "cat.png").as_deref(),
            Some("edge enhance-cat.png")
        );
        assert_eq!(
            stored_file_name("blur", "../../etc/passwd").as_deref(),
            Some("blur-passwd")
        );
        assert_eq!(
            stored_file_name("blur", "C:\\Users\\me\\dog.jpg").as_deref(),
            Some("blur-dog.jpg")
        );
        assert_eq!(stored_file_name("blur", ""), None);
        assert_eq!(stored_file_name("blur", "photos/"), None);
        assert_eq!(stored_file_name("blur", ".."), None);
    }

    #[test]
    fn test_save_prefixes_filter_name() -> Result<()> {
        let dir = tempdir()?;
        let store = ImageStore::open(dir.path().join("images"))?;

        let path = store.save(&upload("cat.png", b"meow"), "emboss")?;

        assert_eq!(path, store.dir().join("emboss-cat.png"));
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("emboss-"));
        assert_eq!(fs::read(&path)?, b"meow");
        Ok(())
    }

    #[test]
    fn test_save_does_not_validate_filter() -> Result<()> {
        let dir = tempdir()?;
        let store = ImageStore::open(dir.path())?;

        let path = store.save(&upload("cat.png", b"meow"), "sepia")?;
        assert!(path.ends_with("sepia-cat.png"));
        Ok(())
    }

    #[test]
    fn test_same_pair_overwrites() -> Result<()> {
        let dir = tempdir()?;
        let store = ImageStore::open(dir.path())?;

        let first = store.save(&upload("cat.png", b"first"), "blur")?;
        let second = store.save(&upload("cat.png", b"second"), "blur")?;

        assert_eq!(first, second);
        assert_eq!(fs::read(&second)?, b"second");
        Ok(())
    }

    #[test]
    fn test_different_filters_do_not_collide() -> Result<()> {
        let dir = tempdir()?;
        let store = ImageStore::open(dir.path())?;

        let emboss = store.save(&upload("cat.png", b"one"), "emboss")?;
        let blur = store.save(&upload("cat.png", b"two"), "blur")?;

        assert_ne!(emboss, blur);
        assert_eq!(fs::read(&emboss)?, b"one");
        assert_eq!(fs::read(&blur)?, b"two");
        Ok(())
    }

    #[test]
    fn test_missing_file_name() -> Result<()> {
        let dir = tempdir()?;
        let store = ImageStore::open(dir.path())?;

        assert!(matches!(
            store.save(&upload("", b"data"), "blur"),
            Err(AppError::MissingImage)
        ));
        Ok(())
    }

    #[test]
    fn test_unwritable_directory() -> Result<()> {
        let dir = tempdir()?;
        let store = ImageStore::open(dir.path().join("images"))?;
        fs::remove_dir_all(store.dir())?;

        assert!(matches!(
            store.save(&upload("cat.png", b"data"), "blur"),
            Err(AppError::Storage(_))
        ));
        Ok(())
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url(Path::new("/srv/static/images/emboss-cat.png")),
            "./static/images/emboss-cat.png"
        );
        assert_eq!(
            image_url(Path::new("images/blur-a#b.png")),
            "./static/images/blur-a%23b.png"
        );
        assert_eq!(
            image_url(Path::new("images/blur-50%off.png")),
            "./static/images/blur-50%25off.png"
        );
        assert_eq!(
            image_url(Path::new("images/edge enhance-cat.png")),
            "./static/images/edge%20enhance-cat.png"
        );
        assert_eq!(
            image_url(Path::new("images/blur-what?.png")),
            "./static/images/blur-what%3F.png"
        );
    }
}
