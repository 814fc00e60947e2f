// ABOUTME: Photo encoder converting image bytes into displayable data URIs
// ABOUTME: Owns the format whitelist and size policy for progress photos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use base64::{engine::general_purpose, Engine as _};
use fittrack_core::constants::photos;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{AssessmentPhotos, PhotoAngle};

/// Whether the encoder accepts this image content type
#[must_use]
pub fn is_supported_mime(mime: &str) -> bool {
    photos::SUPPORTED_MIME_TYPES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(mime))
}

/// Encode image bytes as a `data:` URI for display and storage
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for an unsupported content type or an
/// empty payload, and `AppError::ValueOutOfRange` when the payload
/// exceeds the size cap.
pub fn encode_image(mime: &str, bytes: &[u8]) -> AppResult<String> {
    if !is_supported_mime(mime) {
        return Err(AppError::invalid_input(format!(
            "unsupported image type {mime:?}; expected one of {:?}",
            photos::SUPPORTED_MIME_TYPES
        )));
    }
    if bytes.is_empty() {
        return Err(AppError::invalid_input("empty image payload"));
    }
    if bytes.len() > photos::MAX_IMAGE_BYTES {
        return Err(AppError::out_of_range(format!(
            "image of {} bytes exceeds the {} byte limit",
            bytes.len(),
            photos::MAX_IMAGE_BYTES
        )));
    }

    let encoded = general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{encoded}", mime.to_lowercase()))
}

/// Encode an image and place it into a named view slot
///
/// # Errors
///
/// Propagates the [`encode_image`] validation errors.
pub fn attach_photo(
    photoset: &mut AssessmentPhotos,
    angle: PhotoAngle,
    mime: &str,
    bytes: &[u8],
) -> AppResult<()> {
    let encoded = encode_image(mime, bytes)?;
    photoset.set(angle, encoded);
    tracing::debug!(?angle, bytes = bytes.len(), "photo attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn encodes_to_data_uri() {
        let uri = encode_image("image/png", b"not-a-real-png").unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn rejects_unsupported_types() {
        assert!(encode_image("image/gif", b"gif").is_err());
        assert!(encode_image("text/plain", b"hi").is_err());
    }

    #[test]
    fn rejects_oversized_payloads() {
        let oversized = vec![0u8; photos::MAX_IMAGE_BYTES + 1];
        assert!(encode_image("image/jpeg", &oversized).is_err());
    }

    #[test]
    fn attaches_into_the_requested_slot() {
        let mut set = AssessmentPhotos::default();
        attach_photo(&mut set, PhotoAngle::Front, "image/webp", b"webp").unwrap();
        assert!(set.get(PhotoAngle::Front).unwrap().contains("image/webp"));
        assert!(set.get(PhotoAngle::Back).is_none());
    }
}
