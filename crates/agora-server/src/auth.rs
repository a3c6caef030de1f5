//! Bearer-token authentication.
//!
//! The voting core performs no authentication itself; it receives an
//! already-resolved [`Identity`] from this collaborator. The seam is the
//! [`AuthProvider`] trait so deployments can plug in real token
//! validation; [`TokenRegistry`] is the static-token implementation used
//! in tests and small installs.

use std::collections::HashMap;
use std::sync::RwLock;

use agora_types::UserId;
use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::error::{ServerError, ServerResult};

/// A resolved current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user: UserId,
    pub name: String,
}

impl Identity {
    pub fn new(user: UserId, name: impl Into<String>) -> Self {
        Self {
            user,
            name: name.into(),
        }
    }
}

/// Credentials extracted from an inbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Bearer(String),
    Anonymous,
}

impl Credentials {
    /// Read credentials from request headers.
    ///
    /// Anything other than a well-formed `Authorization: Bearer <token>`
    /// header is treated as anonymous.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| Self::Bearer(token.to_string()))
            .unwrap_or(Self::Anonymous)
    }
}

/// Resolves credentials to an identity.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Authenticate, failing with `Unauthorized` for anonymous or unknown
    /// credentials.
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity>;
}

/// A static token-to-identity table.
pub struct TokenRegistry {
    tokens: RwLock<HashMap<String, Identity>>,
}

impl TokenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Register a token for an identity, replacing any previous binding.
    pub fn register(&self, token: impl Into<String>, identity: Identity) {
        self.tokens
            .write()
            .expect("lock poisoned")
            .insert(token.into(), identity);
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for TokenRegistry {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        match credentials {
            Credentials::Bearer(token) => {
                let tokens = self
                    .tokens
                    .read()
                    .map_err(|e| ServerError::Internal(format!("lock poisoned: {e}")))?;
                tokens
                    .get(token)
                    .cloned()
                    .ok_or_else(|| ServerError::Unauthorized("unknown token".into()))
            }
            Credentials::Anonymous => {
                Err(ServerError::Unauthorized("missing bearer token".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer secret".parse().unwrap());
        assert_eq!(
            Credentials::from_headers(&headers),
            Credentials::Bearer("secret".into())
        );
    }

    #[test]
    fn missing_or_malformed_header_is_anonymous() {
        assert_eq!(
            Credentials::from_headers(&HeaderMap::new()),
            Credentials::Anonymous
        );

        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Basic dXNlcg==".parse().unwrap());
        assert_eq!(Credentials::from_headers(&headers), Credentials::Anonymous);
    }

    #[tokio::test]
    async fn registry_resolves_known_token() {
        let registry = TokenRegistry::new();
        let identity = Identity::new(UserId::new(), "alice");
        registry.register("alice-token", identity.clone());

        let resolved = registry
            .authenticate(&Credentials::Bearer("alice-token".into()))
            .await
            .unwrap();
        assert_eq!(resolved, identity);
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let registry = TokenRegistry::new();
        let err = registry
            .authenticate(&Credentials::Bearer("nope".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn anonymous_is_unauthorized() {
        let registry = TokenRegistry::new();
        let err = registry
            .authenticate(&Credentials::Anonymous)
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Unauthorized(_)));
    }
}
