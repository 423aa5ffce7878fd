use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

/// Header carrying the base64 HMAC-SHA256 of the request body
pub const SIGNATURE_HEADER: &str = "x-line-signature";

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("missing X-Line-Signature header")]
    Missing,

    #[error("signature is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("invalid channel secret")]
    InvalidKey,

    #[error("signature does not match request body")]
    Mismatch,
}

/// Check `signature` against the HMAC-SHA256 of `body` keyed by the channel secret
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> Result<(), SignatureError> {
    let expected = STANDARD.decode(signature.trim())?;

    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .map_err(|_| SignatureError::InvalidKey)?;
    mac.update(body);
    mac.verify_slice(&expected).map_err(|_| SignatureError::Mismatch)
}

/// Compute the signature the platform would send for `body`
#[cfg(test)]
pub fn sign(channel_secret: &str, body: &[u8]) -> Result<String, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .map_err(|_| SignatureError::InvalidKey)?;
    mac.update(body);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "channel-secret";
    const BODY: &[u8] = br#"{"destination":"U1","events":[]}"#;

    #[test]
    fn test_valid_signature() {
        let signature = sign(SECRET, BODY).unwrap();
        assert!(verify_signature(SECRET, BODY, &signature).is_ok());
    }

    #[test]
    fn test_tampered_body() {
        let signature = sign(SECRET, BODY).unwrap();
        let err = verify_signature(SECRET, br#"{"destination":"U2","events":[]}"#, &signature).unwrap_err();
        assert!(matches!(err, SignatureError::Mismatch));
    }

    #[test]
    fn test_wrong_secret() {
        let signature = sign("other-secret", BODY).unwrap();
        assert!(matches!(
            verify_signature(SECRET, BODY, &signature),
            Err(SignatureError::Mismatch)
        ));
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(
            verify_signature(SECRET, BODY, "not base64!!"),
            Err(SignatureError::Encoding(_))
        ));
    }
}
