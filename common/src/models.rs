use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub domain: String,
    pub access_token: String,
    pub created_at: Option<String>,
}

impl Store {
    /// Access token with everything but the last four characters hidden.
    pub fn masked_token(&self) -> String {
        let count = self.access_token.chars().count();
        if count <= 4 {
            return "****".to_string();
        }
        let tail: String = self.access_token.chars().skip(count - 4).collect();
        format!("****{}", tail)
    }
}
