//! Base64 URL-safe codec for JWT segments.
//!
//! Padding is optional on input: `Zm8`, `Zm8=` are both accepted.
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

/// Engine used to decode segments.
///
/// Trailing bits are tolerated so that any well-formed sequence of alphabet
/// characters decodes, leaving the content check to the JSON layer.
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Checks if the give byte is part of the base64 URL-safe alphabet.
pub const fn is_url_safe_base64_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_')
}

/// Base64url decoding error.
#[derive(Debug, thiserror::Error)]
pub enum Base64UrlError {
    #[error("unexpected character `{0}` at offset {1}")]
    InvalidCharacter(char, usize),

    #[error(transparent)]
    Decode(#[from] base64::DecodeError),
}

/// Decodes a base64url segment.
///
/// Characters outside of the URL-safe alphabet are rejected before decoding,
/// except for `=` padding at the end of the segment.
pub fn decode(segment: &str) -> Result<Vec<u8>, Base64UrlError> {
    let unpadded = segment.trim_end_matches('=');
    if let Some((i, c)) = unpadded
        .char_indices()
        .find(|(_, c)| !c.is_ascii() || !is_url_safe_base64_char(*c as u8))
    {
        return Err(Base64UrlError::InvalidCharacter(c, i));
    }

    Ok(SEGMENT_ENGINE.decode(segment)?)
}

/// Encodes bytes as unpadded base64url.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    SEGMENT_ENGINE.encode(bytes)
}
