use std::fmt;

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use base64::{Engine, engine::general_purpose::STANDARD};
use futures::future::{Ready, ready};

/// Username/password pair forwarded to the spreadsheet endpoint.
///
/// Nothing is verified locally; the remote side accepts or rejects them.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parses an `Authorization: Basic ...` header value.
    pub fn from_basic_header(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let encoded = encoded.trim();
        let decoded = STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        if username.trim().is_empty() || password.is_empty() {
            return None;
        }
        Some(Self::new(username.trim(), password))
    }

    pub fn basic_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Cache key; exactly the username the sheet was asked about.
    pub fn cache_key(&self) -> String {
        self.username.clone()
    }
}

impl FromRequest for Credentials {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let header = match req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
        {
            Some(h) => h,
            None => return ready(Err(ErrorUnauthorized("Missing credentials"))),
        };

        match Credentials::from_basic_header(header) {
            Some(credentials) => ready(Ok(credentials)),
            None => ready(Err(ErrorUnauthorized("Invalid credentials"))),
        }
    }
}
