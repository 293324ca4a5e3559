//! Authentication service for user access tokens.

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{NewUser, Principal, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 keyed by `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Generates a random 256-bit token, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Service resolving Bearer tokens to principals.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were issued
    pub fn new(repository: Arc<dyn UserRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Authenticates a raw token and returns the acting principal.
    ///
    /// On success, updates the user's `last_used_at` timestamp. A failure of
    /// that bookkeeping write does not fail authentication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token matches no user.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let user = self
            .repository
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({"reason": "Invalid token"}))
            })?;

        if let Err(e) = self.repository.update_last_used(user.id).await {
            tracing::warn!("Failed to record token use for user {}: {}", user.id, e);
        }

        Ok(Principal::from(&user))
    }

    /// Creates a user with a fresh or caller-supplied token.
    ///
    /// Returns the stored user together with the raw token, which is not
    /// recoverable afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Conflict`] if the token is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn issue_user(
        &self,
        name: &str,
        is_admin: bool,
        token: Option<String>,
    ) -> Result<(User, String), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation(
                "User name must not be empty",
                json!({"fields": {"name": ["The name field is required."]}}),
            ));
        }

        let token = token.unwrap_or_else(generate_token);
        let new_user = NewUser {
            name: name.to_string(),
            is_admin,
            token_hash: hash_token(&self.signing_secret, &token),
        };

        let user = self.repository.create(new_user).await?;

        Ok((user, token))
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn create_test_user(id: i64, is_admin: bool, token_hash: &str) -> User {
        User {
            id,
            name: format!("user-{id}"),
            is_admin,
            token_hash: token_hash.to_string(),
            last_used_at: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_admin() {
        let mut mock_repo = MockUserRepository::new();

        let token = "valid-token";
        let expected_hash = hash_token(&test_secret(), token);
        let user = create_test_user(1, true, &expected_hash);

        mock_repo
            .expect_find_by_token_hash()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        mock_repo
            .expect_update_last_used()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let principal = service.authenticate(token).await.unwrap();

        assert_eq!(principal.user_id, 1);
        assert_eq!(principal.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_token_hash()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate("invalid-token").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_survives_last_used_failure() {
        let mut mock_repo = MockUserRepository::new();
        let user = create_test_user(2, false, "hash");

        mock_repo
            .expect_find_by_token_hash()
            .returning(move |_| Ok(Some(user.clone())));
        mock_repo
            .expect_update_last_used()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let principal = service.authenticate("token").await.unwrap();

        assert_eq!(principal.role, Role::Customer);
    }

    #[tokio::test]
    async fn test_issue_user_stores_hash_not_token() {
        let mut mock_repo = MockUserRepository::new();
        let expected_hash = hash_token(&test_secret(), "chosen-token");

        mock_repo
            .expect_create()
            .withf(move |new_user| {
                new_user.name == "Ops" && new_user.is_admin && new_user.token_hash == expected_hash
            })
            .times(1)
            .returning(|new_user| Ok(create_test_user(3, new_user.is_admin, &new_user.token_hash)));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let (user, token) = service
            .issue_user(" Ops ", true, Some("chosen-token".to_string()))
            .await
            .unwrap();

        assert_eq!(token, "chosen-token");
        assert_ne!(user.token_hash, token);
    }

    #[tokio::test]
    async fn test_issue_user_rejects_blank_name() {
        let mock_repo = MockUserRepository::new();
        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.issue_user("  ", false, None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_hash_token_consistency() {
        let hash1 = hash_token(&test_secret(), "test-token");
        let hash2 = hash_token(&test_secret(), "test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_hash_token_secret_matters() {
        assert_ne!(
            hash_token("secret-a", "token"),
            hash_token("secret-b", "token")
        );
    }

    #[test]
    fn test_generate_token_is_random_hex() {
        let a = generate_token();
        let b = generate_token();

        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
