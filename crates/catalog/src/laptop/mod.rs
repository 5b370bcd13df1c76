use std::ops::Deref;

use laptop_review_shared::State;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

mod create;
mod delete;
mod repository;
mod update;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Laptop {
    pub id: i64,
    pub brand_id: i64,
    pub category_id: i64,
    pub name: String,
    pub release_year: i64,
    pub spec: String,
    pub price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Deserialize, Validate)]
pub struct LaptopInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 9999))]
    pub release_year: i64,
    #[serde(default)]
    pub spec: String,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub brand_id: i64,
    #[validate(range(min = 1))]
    pub category_id: i64,
}

#[derive(Clone)]
pub struct Command(pub State);

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    /// Soft-deleted laptops are never returned.
    pub async fn find(&self, id: i64) -> laptop_review_shared::Result<Option<Laptop>> {
        repository::find(&self.read_db, id).await
    }

    pub async fn list(&self) -> laptop_review_shared::Result<Vec<Laptop>> {
        repository::list(&self.read_db).await
    }
}
