//! Authentication service: credential checks and signed bearer tokens.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::verify_password;

type HmacSha256 = Hmac<Sha256>;

/// Token claims: subject (user email) and expiry as unix seconds.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// The authenticated caller, resolved by the auth middleware and injected
/// into the request extensions for ownership checks.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

/// Service issuing and verifying bearer tokens.
///
/// Tokens follow the resource-server pattern: the payload
/// (`base64url(claims)`) is signed with HMAC-SHA256 keyed by a server-side
/// secret, so verification is stateless. The wire format is
/// `<base64url-claims>.<hex-mac>`.
pub struct AuthService<R: UserRepository> {
    user_repository: Arc<R>,
    signing_secret: String,
    token_ttl_seconds: u64,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `user_repository` - account lookup for login and token subjects
    /// - `signing_secret` - HMAC key; rotating it invalidates all tokens
    /// - `token_ttl_seconds` - lifetime of newly issued tokens
    pub fn new(user_repository: Arc<R>, signing_secret: String, token_ttl_seconds: u64) -> Self {
        Self {
            user_repository,
            signing_secret,
            token_ttl_seconds,
        }
    }

    /// Verifies credentials and issues a bearer token for the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on unknown email or wrong password.
    /// The two cases produce the same message so the endpoint does not leak
    /// which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(Self::bad_credentials)?;

        let valid = verify_password(password, &user.password_digest).map_err(|e| {
            AppError::internal(
                "Stored password digest is unreadable",
                json!({ "reason": e.to_string() }),
            )
        })?;

        if !valid {
            return Err(Self::bad_credentials());
        }

        self.issue_token(&user.email)
    }

    /// Authenticates a bearer token and resolves its subject to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the signature does not match,
    /// the token has expired, or the subject no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        let claims = self.verify_token(token)?;

        let user = self
            .user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Token subject no longer exists" }),
                )
            })?;

        Ok(AuthUser {
            id: user.id,
            email: user.email,
        })
    }

    /// Signs a fresh token for the given subject.
    pub fn issue_token(&self, email: &str) -> Result<String, AppError> {
        let claims = Claims {
            sub: email.to_string(),
            exp: Utc::now().timestamp() + self.token_ttl_seconds as i64,
        };

        let payload = serde_json::to_vec(&claims).map_err(|e| {
            AppError::internal("Failed to encode token", json!({ "reason": e.to_string() }))
        })?;
        let payload = URL_SAFE_NO_PAD.encode(payload);

        let signature = hex::encode(self.sign(payload.as_bytes()));

        Ok(format!("{payload}.{signature}"))
    }

    /// Checks the token signature and expiry, returning the claims.
    fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let (payload, signature_hex) = token.split_once('.').ok_or_else(Self::bad_token)?;

        let signature = hex::decode(signature_hex).map_err(|_| Self::bad_token())?;

        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).map_err(|_| Self::bad_token())?;

        let claims_bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| Self::bad_token())?;
        let claims: Claims = serde_json::from_slice(&claims_bytes).map_err(|_| Self::bad_token())?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Token has expired" }),
            ));
        }

        Ok(claims)
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }

    fn bad_credentials() -> AppError {
        AppError::unauthorized(
            "Invalid email or password",
            json!({ "reason": "Credentials did not match" }),
        )
    }

    fn bad_token() -> AppError {
        AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Invalid or malformed token" }),
        )
    }
}
