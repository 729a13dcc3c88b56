//! JWT decoding without verification.
//!
//! Splits a token into its dot-separated segments and base64url-decodes
//! the header and claims into JSON. The signature is carried through as
//! an opaque string and never checked against a key.

use crate::error_codes;
use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JwtError {
    #[error("[DEVBELT_JWT_001] malformed token: expected 2 or 3 dot-separated segments, got {segments}. Suggestion: paste the full compact-serialized token.")]
    MalformedToken { segments: usize },
    #[error("[DEVBELT_JWT_002] {part} segment is not valid base64url: {message}. Suggestion: check the token was not truncated or re-encoded.")]
    InvalidSegmentEncoding { part: &'static str, message: String },
    #[error("[DEVBELT_JWT_003] {part} segment is not valid JSON: {message}. Suggestion: the token may not be a JWT.")]
    InvalidSegmentJson { part: &'static str, message: String },
}

impl JwtError {
    pub fn code(&self) -> &'static str {
        match self {
            JwtError::MalformedToken { .. } => error_codes::JWT_MALFORMED_TOKEN,
            JwtError::InvalidSegmentEncoding { .. } => error_codes::JWT_SEGMENT_ENCODING,
            JwtError::InvalidSegmentJson { .. } => error_codes::JWT_SEGMENT_JSON,
        }
    }
}

/// A decoded token: header and claims as JSON, signature as-is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DecodedToken {
    pub header: Value,
    pub claims: Value,
    /// Raw third segment, empty when the token had only two.
    pub signature: String,
}

impl DecodedToken {
    pub fn has_signature(&self) -> bool {
        !self.signature.is_empty()
    }
}

/// Decode a compact-serialized JWT without verifying the signature.
///
/// Accepts both signed (three-segment) and unsecured (two-segment)
/// tokens. Surrounding whitespace is ignored.
pub fn decode_token(token: &str) -> Result<DecodedToken, JwtError> {
    let token = token.trim();
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() < 2 || segments.len() > 3 {
        return Err(JwtError::MalformedToken {
            segments: segments.len(),
        });
    }
    let header = decode_json_segment(segments[0], "header")?;
    let claims = decode_json_segment(segments[1], "claims")?;
    let signature = segments.get(2).copied().unwrap_or("").to_string();
    tracing::debug!(signed = !signature.is_empty(), "decoded token");
    Ok(DecodedToken {
        header,
        claims,
        signature,
    })
}

fn decode_json_segment(segment: &str, part: &'static str) -> Result<Value, JwtError> {
    let bytes = decode_base64url(segment).map_err(|e| JwtError::InvalidSegmentEncoding {
        part,
        message: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| JwtError::InvalidSegmentJson {
        part,
        message: e.to_string(),
    })
}

fn decode_base64url(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // RFC 7515 wants unpadded base64url, but some emitters pad anyway.
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode_segment(value: &Value) -> String {
        URL_SAFE_NO_PAD.encode(value.to_string())
    }

    fn sample_token(signature: Option<&str>) -> String {
        let header = encode_segment(&json!({ "alg": "HS256", "typ": "JWT" }));
        let claims = encode_segment(&json!({
            "sub": "1234567890",
            "name": "John Doe",
            "iat": 1_516_239_022,
        }));
        match signature {
            Some(sig) => format!("{header}.{claims}.{sig}"),
            None => format!("{header}.{claims}"),
        }
    }

    #[test]
    fn three_segment_token_decodes_with_signature() {
        let decoded = decode_token(&sample_token(Some("sig-bytes"))).expect("decode");
        assert_eq!(decoded.header["alg"], json!("HS256"));
        assert_eq!(decoded.claims["name"], json!("John Doe"));
        assert_eq!(decoded.claims["iat"], json!(1_516_239_022));
        assert_eq!(decoded.signature, "sig-bytes");
        assert!(decoded.has_signature());
    }

    #[test]
    fn two_segment_token_decodes_without_signature() {
        let decoded = decode_token(&sample_token(None)).expect("decode");
        assert_eq!(decoded.claims["sub"], json!("1234567890"));
        assert_eq!(decoded.signature, "");
        assert!(!decoded.has_signature());
    }

    #[test]
    fn padded_segments_are_accepted() {
        let header = URL_SAFE.encode(json!({ "alg": "none" }).to_string());
        let claims = URL_SAFE.encode(json!({ "sub": "abc" }).to_string());
        let decoded = decode_token(&format!("{header}.{claims}")).expect("decode");
        assert_eq!(decoded.header["alg"], json!("none"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let token = format!("  {}\n", sample_token(None));
        assert!(decode_token(&token).is_ok());
    }

    #[test]
    fn one_segment_is_malformed() {
        let err = decode_token("justonepiece").expect_err("should fail");
        assert_eq!(err.code(), crate::error_codes::JWT_MALFORMED_TOKEN);
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn four_segments_are_malformed() {
        let err = decode_token("a.b.c.d").expect_err("should fail");
        assert_eq!(err.code(), crate::error_codes::JWT_MALFORMED_TOKEN);
    }

    #[test]
    fn bad_base64_names_the_segment() {
        let claims = encode_segment(&json!({ "sub": "abc" }));
        let err = decode_token(&format!("!!!.{claims}")).expect_err("should fail");
        assert_eq!(err.code(), crate::error_codes::JWT_SEGMENT_ENCODING);
        assert!(err.to_string().contains("header"));
    }

    #[test]
    fn non_json_segment_is_rejected() {
        let header = encode_segment(&json!({ "alg": "none" }));
        let not_json = URL_SAFE_NO_PAD.encode("plain text");
        let err = decode_token(&format!("{header}.{not_json}")).expect_err("should fail");
        assert_eq!(err.code(), crate::error_codes::JWT_SEGMENT_JSON);
        assert!(err.to_string().contains("claims"));
    }
}
