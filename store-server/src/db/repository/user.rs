//! User Repository

use super::RepoResult;
use shared::models::User;
use sqlx::SqlitePool;

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let row = sqlx::query_as::<_, User>(
        "SELECT username, email, salt, hash, created_at FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn username_exists(pool: &SqlitePool, username: &str) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Insert a user row. A racing duplicate surfaces as `RepoError::Duplicate`
/// carrying the violated constraint (`users.email` or `users.username`).
pub async fn create(pool: &SqlitePool, user: &User) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO users (username, email, salt, hash, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(user.salt.as_slice())
    .bind(user.hash.as_slice())
    .bind(user.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;
    use crate::db::repository::testing::test_pool;

    fn user(username: &str, email: &str) -> User {
        User {
            username: username.into(),
            email: email.into(),
            salt: vec![1; 16],
            hash: vec![2; 64],
            created_at: 1,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let (_dir, pool) = test_pool().await;
        create(&pool, &user("alice", "a@x.com")).await.unwrap();

        let found = find_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(found.email, "a@x.com");
        assert_eq!(found.salt.len(), 16);
        assert_eq!(found.hash.len(), 64);

        assert!(email_exists(&pool, "a@x.com").await.unwrap());
        assert!(username_exists(&pool, "alice").await.unwrap());
        assert!(!username_exists(&pool, "bob").await.unwrap());
        assert!(find_by_username(&pool, "bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_names_constraint() {
        let (_dir, pool) = test_pool().await;
        create(&pool, &user("alice", "a@x.com")).await.unwrap();

        match create(&pool, &user("bob", "a@x.com")).await {
            Err(RepoError::Duplicate(msg)) => assert!(msg.contains("users.email")),
            other => panic!("expected duplicate, got {other:?}"),
        }
    }
}
