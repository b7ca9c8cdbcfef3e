// Native image picker.
//
// Desktop builds open an rfd dialog on a blocking thread and read the picked
// files into memory. Other targets return PlatformNotSupported.

use gallery_api::PendingFile;

use crate::error::AppError;

pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "heic"];

/// Whether a file name carries one of the accepted image extensions
pub fn is_image_name(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
mod native {
    use super::*;
    use std::path::PathBuf;

    fn dialog(title: &str) -> rfd::FileDialog {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Images", &IMAGE_EXTENSIONS[..])
    }

    async fn read_all(paths: Vec<PathBuf>) -> Result<Vec<PendingFile>, AppError> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if !is_image_name(&name) {
                log::warn!("Skipping non-image file {}", path.display());
                continue;
            }
            files.push(PendingFile::from_path(&path).await?);
        }
        Ok(files)
    }

    /// `Ok(None)` when the dialog was cancelled
    pub async fn pick_image() -> Result<Option<PendingFile>, AppError> {
        let picked = tokio::task::spawn_blocking(|| dialog("Select cover image").pick_file())
            .await
            .map_err(|e| AppError::PlatformNotSupported(format!("File dialog failed: {}", e)))?;
        match picked {
            Some(path) => Ok(read_all(vec![path]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Empty when the dialog was cancelled
    pub async fn pick_images() -> Result<Vec<PendingFile>, AppError> {
        let picked = tokio::task::spawn_blocking(|| dialog("Select photos").pick_files())
            .await
            .map_err(|e| AppError::PlatformNotSupported(format!("File dialog failed: {}", e)))?;
        let files = read_all(picked.unwrap_or_default()).await?;
        log::info!("Picked {} image(s)", files.len());
        Ok(files)
    }
}

#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
pub use native::{pick_image, pick_images};

#[cfg(any(target_arch = "wasm32", target_os = "android", target_os = "ios"))]
pub async fn pick_image() -> Result<Option<PendingFile>, AppError> {
    Err(AppError::PlatformNotSupported(
        "Image picker not available on this platform".to_string(),
    ))
}

#[cfg(any(target_arch = "wasm32", target_os = "android", target_os = "ios"))]
pub async fn pick_images() -> Result<Vec<PendingFile>, AppError> {
    Err(AppError::PlatformNotSupported(
        "Multi image picker not available on this platform".to_string(),
    ))
}
