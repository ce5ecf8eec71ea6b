use crate::{base64url, AnyClaims, Token};

/// JWT decoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input is not made of exactly three `.`-separated segments.
    #[error("malformed JWT `{0}`: has {1} parts when it should have 3")]
    InvalidPartCount(String, usize),

    /// A header or payload segment is not valid base64url.
    #[error("failed to decode base64url value `{0}`")]
    InvalidBase64Url(String),

    /// A header or payload segment does not hold a JSON object.
    #[error("malformed JWT: failed to parse JSON value from base64url `{0}`")]
    InvalidJSON(String),
}

/// Decodes a compact JWT.
///
/// The signature is kept as-is and is not verified.
pub fn decode(jwt: &str) -> Result<Token, DecodeError> {
    let (header_b64, payload_b64, signature) = split_jwt(jwt)?;
    let header = decode_segment(header_b64)?;
    let payload = decode_segment(payload_b64)?;
    log::trace!(
        "decoded JWT with {} header and {} payload claims",
        header.len(),
        payload.len()
    );
    Ok(Token::new(header, payload, signature.to_owned(), jwt.to_owned()))
}

/// Splits a compact JWT into its header, payload and signature segments.
pub fn split_jwt(jwt: &str) -> Result<(&str, &str, &str), DecodeError> {
    let mut parts = jwt.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c), None) => Ok((a, b, c)),
        _ => {
            let count = jwt.split('.').count();
            log::debug!("rejected JWT with {count} parts");
            Err(DecodeError::InvalidPartCount(jwt.to_owned(), count))
        }
    }
}

/// Decodes a base64url segment holding a JSON object.
fn decode_segment(segment: &str) -> Result<AnyClaims, DecodeError> {
    let bytes = base64url::decode(segment).map_err(|e| {
        log::debug!("invalid base64url segment `{segment}`: {e}");
        DecodeError::InvalidBase64Url(segment.to_owned())
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        log::debug!("invalid JSON object in segment `{segment}`: {e}");
        DecodeError::InvalidJSON(segment.to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split() {
        assert_eq!(split_jwt("a.b.c"), Ok(("a", "b", "c")));
        assert_eq!(split_jwt("..").unwrap(), ("", "", ""));
    }

    #[test]
    fn split_wrong_part_count() {
        for (input, count) in [("", 1), ("a", 1), ("a.b", 2), ("a.b.c.d", 4), ("....", 5)] {
            assert_eq!(
                split_jwt(input),
                Err(DecodeError::InvalidPartCount(input.to_owned(), count))
            );
        }
    }

    #[test]
    fn segment_must_be_object() {
        // `[1]`
        assert_eq!(
            decode_segment("WzFd"),
            Err(DecodeError::InvalidJSON("WzFd".to_owned()))
        );
        // `{}`
        assert_eq!(decode_segment("e30"), Ok(AnyClaims::default()));
    }

    #[test]
    fn segment_must_be_utf8() {
        // 0xff 0xfe
        assert_eq!(
            decode_segment("__4"),
            Err(DecodeError::InvalidJSON("__4".to_owned()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DecodeError::InvalidPartCount("a.b".to_owned(), 2).to_string(),
            "malformed JWT `a.b`: has 2 parts when it should have 3"
        );
        assert_eq!(
            DecodeError::InvalidBase64Url("%".to_owned()).to_string(),
            "failed to decode base64url value `%`"
        );
    }
}
