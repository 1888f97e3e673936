//! Optional report assets.
//!
//! The logo is a best-effort asset: a missing or undecodable image must
//! never abort report generation, so the loader returns an explicit
//! `Option` and the composer falls back to a logo-less document.

use tracing::warn;

use crate::storage::ArtifactStore;

/// A decoded RGB logo image ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    /// Raw RGB8 pixel data, row-major.
    pub rgb: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl LogoImage {
    /// Decode a logo from raw image bytes (PNG).
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a decodable image.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = (decoded.width(), decoded.height());
        Ok(Self {
            rgb: decoded.into_raw(),
            width,
            height,
        })
    }
}

/// Load the report logo from storage, if present and decodable.
///
/// Failure is recovered locally: the asset is skipped and a warning is
/// logged, mirroring the report's tolerance for a missing letterhead.
pub async fn load_logo(store: &ArtifactStore, key: &str) -> Option<LogoImage> {
    let bytes = match store.read_asset(key).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(key, error = %e, "logo asset unavailable, generating report without it");
            return None;
        }
    };

    match LogoImage::decode(&bytes) {
        Ok(logo) => Some(logo),
        Err(e) => {
            warn!(key, error = %e, "logo asset undecodable, generating report without it");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageProvider;

    #[tokio::test]
    async fn test_missing_logo_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ArtifactStore::from_provider(&StorageProvider::local_fs(dir.path()))
            .expect("local store");

        assert!(load_logo(&store, "img/dpa.png").await.is_none());
    }

    #[tokio::test]
    async fn test_garbage_bytes_yield_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ArtifactStore::from_provider(&StorageProvider::local_fs(dir.path()))
            .expect("local store");
        store
            .write_report("img/dpa.png", b"not a png".to_vec())
            .await
            .expect("write");

        assert!(load_logo(&store, "img/dpa.png").await.is_none());
    }

    #[test]
    fn test_decode_valid_png() {
        // 2x1 white PNG rendered on the fly via the image crate itself.
        let mut png = Vec::new();
        let buffer = image::RgbImage::from_pixel(2, 1, image::Rgb([255, 255, 255]));
        image::DynamicImage::ImageRgb8(buffer)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("encode");

        let logo = LogoImage::decode(&png).expect("decode");
        assert_eq!(logo.width, 2);
        assert_eq!(logo.height, 1);
        assert_eq!(logo.rgb.len(), 6);
    }
}
