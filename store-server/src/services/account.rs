//! Account Service
//!
//! Registration and password authentication.

use shared::ErrorCode;
use shared::models::{LoginRequest, RegisterRequest, User};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::credential;
use crate::db::repository::{RepoError, user};
use crate::error::{ServiceError, ServiceResult};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_email, validate_password, validate_required_text,
};

fn email_taken() -> ServiceError {
    ServiceError::conflict(ErrorCode::EmailExists, "Email is already taken")
}

fn username_taken() -> ServiceError {
    ServiceError::conflict(ErrorCode::UsernameExists, "Username is already taken")
}

/// Create a user. Email uniqueness is checked before username uniqueness.
#[instrument(skip(pool, req), fields(username = %req.username))]
pub async fn register(pool: &SqlitePool, req: RegisterRequest) -> ServiceResult<()> {
    validate_required_text(&req.username, "username", MAX_NAME_LEN)?;
    validate_password(&req.password)?;
    validate_email(&req.email)?;

    if user::email_exists(pool, &req.email).await? {
        return Err(email_taken());
    }
    if user::username_exists(pool, &req.username).await? {
        return Err(username_taken());
    }

    let salt = credential::generate_salt()?;
    let password = req.password;
    let hash = tokio::task::spawn_blocking(move || credential::derive_key(&password, &salt)).await?;

    let new_user = User {
        username: req.username,
        email: req.email,
        salt: salt.to_vec(),
        hash: hash.to_vec(),
        created_at: shared::util::now_millis(),
    };

    user::create(pool, &new_user).await.map_err(|e| match e {
        // Lost a race with a concurrent registration
        RepoError::Duplicate(constraint) if constraint.contains("users.email") => email_taken(),
        RepoError::Duplicate(_) => username_taken(),
        other => other.into(),
    })?;

    tracing::info!(username = %new_user.username, "User registered");
    Ok(())
}

/// Check a username/password pair.
///
/// An unknown username is `NotFound`; a wrong password is
/// `InvalidCredentials`. The façade reports both the same way.
#[instrument(skip(pool, req), fields(username = %req.username))]
pub async fn authenticate(pool: &SqlitePool, req: LoginRequest) -> ServiceResult<()> {
    validate_required_text(&req.username, "username", MAX_NAME_LEN)?;
    validate_password(&req.password)?;

    let stored = user::find_by_username(pool, &req.username)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("User {}", req.username)))?;

    let password = req.password;
    let (salt, hash) = (stored.salt, stored.hash);
    let matches =
        tokio::task::spawn_blocking(move || credential::verify_password(&password, &salt, &hash))
            .await?;

    if matches {
        tracing::debug!("Login succeeded");
        Ok(())
    } else {
        tracing::warn!("Login failed: password mismatch");
        Err(ServiceError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;

    fn register_req(username: &str, password: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    fn login_req(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let (_dir, pool) = test_pool().await;
        register(&pool, register_req("alice", "Str0ng!pwd", "a@x.com"))
            .await
            .unwrap();

        authenticate(&pool, login_req("alice", "Str0ng!pwd"))
            .await
            .unwrap();
        assert!(matches!(
            authenticate(&pool, login_req("alice", "wrong")).await,
            Err(ServiceError::InvalidCredentials)
        ));
        assert!(matches!(
            authenticate(&pool, login_req("nobody", "Str0ng!pwd")).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_stored_row_has_no_plain_password() {
        let (_dir, pool) = test_pool().await;
        register(&pool, register_req("alice", "Str0ng!pwd", "a@x.com"))
            .await
            .unwrap();

        let stored = user::find_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(stored.salt.len(), credential::SALT_LEN);
        assert_eq!(stored.hash.len(), credential::KEY_LEN);
        assert_ne!(stored.hash, b"Str0ng!pwd".to_vec());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_regardless_of_username() {
        let (_dir, pool) = test_pool().await;
        register(&pool, register_req("alice", "pw", "a@x.com"))
            .await
            .unwrap();

        assert!(matches!(
            register(&pool, register_req("bob", "pw", "a@x.com")).await,
            Err(ServiceError::Conflict {
                code: ErrorCode::EmailExists,
                ..
            })
        ));
        // Email is checked first even when the username is also taken
        assert!(matches!(
            register(&pool, register_req("alice", "pw", "a@x.com")).await,
            Err(ServiceError::Conflict {
                code: ErrorCode::EmailExists,
                ..
            })
        ));
        assert!(matches!(
            register(&pool, register_req("alice", "pw", "other@x.com")).await,
            Err(ServiceError::Conflict {
                code: ErrorCode::UsernameExists,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_register_validation_leaves_no_row() {
        let (_dir, pool) = test_pool().await;

        assert!(matches!(
            register(&pool, register_req("", "x", "a@b.com")).await,
            Err(ServiceError::Validation { .. })
        ));
        assert!(matches!(
            register(&pool, register_req("bob", "", "a@b.com")).await,
            Err(ServiceError::Validation { .. })
        ));
        assert!(matches!(
            register(&pool, register_req("bob", "x", "not-an-email")).await,
            Err(ServiceError::Validation { .. })
        ));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_authenticate_requires_fields() {
        let (_dir, pool) = test_pool().await;
        assert!(matches!(
            authenticate(&pool, login_req("", "pw")).await,
            Err(ServiceError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_whitespace_password_is_a_real_password() {
        let (_dir, pool) = test_pool().await;
        register(&pool, register_req("carol", "   ", "c@x.com"))
            .await
            .unwrap();

        authenticate(&pool, login_req("carol", "   ")).await.unwrap();
        assert!(matches!(
            authenticate(&pool, login_req("carol", "  ")).await,
            Err(ServiceError::InvalidCredentials)
        ));
    }
}
