use std::ops::Deref;

use laptop_review_shared::State;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

mod create;
mod repository;
mod update;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub fullname: String,
    pub bio: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(length(min = 1, max = 255))]
    pub fullname: String,
    #[validate(length(min = 1))]
    pub bio: String,
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
    pub async fn find_profile_by_user(
        &self,
        user_id: i64,
    ) -> laptop_review_shared::Result<Option<Profile>> {
        repository::find_by_user(&self.read_db, user_id).await
    }
}
