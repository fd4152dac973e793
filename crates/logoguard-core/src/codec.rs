//! Transport encoding for image assets.
//!
//! The remote model wants the bare base64 body, not the data-URL wrapper the
//! capture layer produces, so the metadata prefix is stripped before dispatch.

use crate::asset::ImageAsset;

/// Extract the transport-ready encoded body from an asset's data URL.
///
/// Returns everything after the first `,`. A payload with no separator yields
/// an empty string; callers must treat an empty body as "no usable image" and
/// refuse to proceed.
pub fn encoded_body(asset: &ImageAsset) -> &str {
    asset
        .data_url
        .split_once(',')
        .map(|(_, body)| body)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_url_prefix() {
        let asset = ImageAsset::new("data:image/png;base64,aGVsbG8=", "image/png");
        assert_eq!(encoded_body(&asset), "aGVsbG8=");
    }

    #[test]
    fn missing_separator_yields_empty() {
        let asset = ImageAsset::new("not-a-data-url", "image/png");
        assert_eq!(encoded_body(&asset), "");
    }

    #[test]
    fn only_first_separator_is_significant() {
        let asset = ImageAsset::new("data:image/png;base64,ab,cd", "image/png");
        assert_eq!(encoded_body(&asset), "ab,cd");
    }

    #[test]
    fn encoding_is_idempotent() {
        let asset = ImageAsset::from_bytes(b"pixels", "image/png");
        assert_eq!(encoded_body(&asset), encoded_body(&asset.clone()));
    }
}
