use sqlx::sqlite::SqlitePool;

use common::models::Store;

pub struct NewStore<'a> {
    pub name: &'a str,
    pub domain: &'a str,
    pub access_token: &'a str,
}

pub async fn count_stores(pool: &SqlitePool) -> anyhow::Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stores")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn list_stores(pool: &SqlitePool) -> anyhow::Result<Vec<Store>> {
    Ok(sqlx::query_as::<_, Store>(
        "SELECT id, name, domain, access_token, created_at FROM stores \
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn get_store(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<Store>> {
    Ok(sqlx::query_as::<_, Store>(
        "SELECT id, name, domain, access_token, created_at FROM stores WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

/// Insert a store and return its id. The domain is stored as given; callers
/// normalize it first.
pub async fn create_store(pool: &SqlitePool, params: &NewStore<'_>) -> anyhow::Result<i64> {
    let result = sqlx::query("INSERT INTO stores (name, domain, access_token) VALUES (?, ?, ?)")
        .bind(params.name)
        .bind(params.domain)
        .bind(params.access_token)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_unique_violation, memory_pool};

    fn new_store<'a>(name: &'a str, domain: &'a str) -> NewStore<'a> {
        NewStore {
            name,
            domain,
            access_token: "shpat_test",
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let pool = memory_pool().await;
        let id = create_store(&pool, &new_store("Shop", "shop.myshopify.com"))
            .await
            .unwrap();
        let store = get_store(&pool, id).await.unwrap().unwrap();
        assert_eq!(store.name, "Shop");
        assert_eq!(store.domain, "shop.myshopify.com");
        assert_eq!(store.access_token, "shpat_test");
        assert!(store.created_at.is_some());
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let pool = memory_pool().await;
        assert!(get_store(&pool, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_domain_rejected() {
        let pool = memory_pool().await;
        create_store(&pool, &new_store("A", "dup.myshopify.com"))
            .await
            .unwrap();
        let err = create_store(&pool, &new_store("B", "dup.myshopify.com"))
            .await
            .unwrap_err();
        assert!(is_unique_violation(&err));
        assert_eq!(count_stores(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn list_newest_first() {
        let pool = memory_pool().await;
        let first = create_store(&pool, &new_store("First", "a.myshopify.com"))
            .await
            .unwrap();
        let second = create_store(&pool, &new_store("Second", "b.myshopify.com"))
            .await
            .unwrap();
        let stores = list_stores(&pool).await.unwrap();
        let ids: Vec<i64> = stores.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second, first]);
        assert_eq!(count_stores(&pool).await.unwrap(), 2);
    }
}
