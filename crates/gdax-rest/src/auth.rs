//! Authentication for GDAX private endpoints
//!
//! Implements HMAC-SHA256 request signing as required by the exchange.
//! Authenticated requests carry the following headers:
//! - `CB-ACCESS-KEY`: API key
//! - `CB-ACCESS-SIGN`: HMAC-SHA256 signature (Base64 encoded)
//! - `CB-ACCESS-TIMESTAMP`: Unix epoch seconds with fractional precision
//! - `CB-ACCESS-PASSPHRASE`: API passphrase
//!
//! # Security
//!
//! The decoded secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RestError, RestResult};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key
pub const HEADER_KEY: &str = "CB-ACCESS-KEY";
/// Header carrying the request signature
pub const HEADER_SIGN: &str = "CB-ACCESS-SIGN";
/// Header carrying the signing timestamp
pub const HEADER_TIMESTAMP: &str = "CB-ACCESS-TIMESTAMP";
/// Header carrying the API passphrase
pub const HEADER_PASSPHRASE: &str = "CB-ACCESS-PASSPHRASE";

/// API credentials for authenticated requests
///
/// The secret is base64-decoded once at construction and the raw bytes are
/// zeroized when the credentials are dropped. Credentials are immutable;
/// rotating keys means constructing a new client.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API passphrase
    passphrase: String,
    /// Signing secret (decoded from base64, zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key, base64 secret, and passphrase
    ///
    /// # Errors
    /// Returns [`RestError::InvalidCredentials`] if the secret is not valid
    /// base64. This is the only failure mode of the signing component;
    /// signing itself is infallible once credentials exist.
    pub fn new(
        api_key: impl Into<String>,
        secret: impl AsRef<str>,
        passphrase: impl Into<String>,
    ) -> RestResult<Self> {
        let decoded = BASE64.decode(secret.as_ref()).map_err(|e| {
            RestError::InvalidCredentials(format!("Invalid base64 secret: {}", e))
        })?;

        Ok(Self {
            api_key: api_key.into(),
            passphrase: passphrase.into(),
            secret: SecretBox::new(Box::new(decoded)),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `GDAX_API_KEY`, `GDAX_API_SECRET`, and `GDAX_API_PASSPHRASE`.
    pub fn from_env() -> RestResult<Self> {
        let api_key = std::env::var("GDAX_API_KEY")
            .map_err(|_| RestError::EnvVarNotSet("GDAX_API_KEY".to_string()))?;
        let secret = std::env::var("GDAX_API_SECRET")
            .map_err(|_| RestError::EnvVarNotSet("GDAX_API_SECRET".to_string()))?;
        let passphrase = std::env::var("GDAX_API_PASSPHRASE")
            .map_err(|_| RestError::EnvVarNotSet("GDAX_API_PASSPHRASE".to_string()))?;

        Self::new(api_key, secret, passphrase)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the passphrase
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Sign a request descriptor
    ///
    /// The signed message is `timestamp + method + request_path + body`,
    /// plain concatenation with no delimiters, exactly as the exchange
    /// documents it:
    /// 1. message = timestamp + method + request_path + body
    /// 2. HMAC-SHA256(decoded_secret, message)
    /// 3. Base64 encode the raw digest
    ///
    /// `request_path` includes the query string; `body` is the exact JSON
    /// that will be transmitted, or an empty string for bodiless requests.
    /// Deterministic: identical inputs produce byte-identical signatures.
    pub fn sign(&self, timestamp: &str, method: &str, request_path: &str, body: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(timestamp.as_bytes());
        mac.update(method.as_bytes());
        mac.update(request_path.as_bytes());
        mac.update(body.as_bytes());

        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            passphrase: self.passphrase.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("passphrase", &"[REDACTED]")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Per-request signer holding the single timestamp shared by the
/// signature and the `CB-ACCESS-TIMESTAMP` header
///
/// The timestamp is captured once at construction; both the signed message
/// and the emitted header read it from here, so they cannot diverge.
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    timestamp: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer with a fresh timestamp
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            timestamp: unix_timestamp(),
        }
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Produce the four authentication headers for a request descriptor
    pub fn headers(&self, method: &Method, request_path: &str, body: &str) -> SignedHeaders {
        SignedHeaders {
            key: self.credentials.api_key().to_string(),
            signature: self
                .credentials
                .sign(&self.timestamp, method.as_str(), request_path, body),
            timestamp: self.timestamp.clone(),
            passphrase: self.credentials.passphrase().to_string(),
        }
    }
}

/// The four header values attached to an authenticated request
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    /// Value for `CB-ACCESS-KEY`
    pub key: String,
    /// Value for `CB-ACCESS-SIGN`
    pub signature: String,
    /// Value for `CB-ACCESS-TIMESTAMP`
    pub timestamp: String,
    /// Value for `CB-ACCESS-PASSPHRASE`
    pub passphrase: String,
}

/// Unix epoch seconds with microsecond precision, e.g. "1420674445.201000"
fn unix_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards");
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
