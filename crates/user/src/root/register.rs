use serde::Deserialize;
use validator::Validate;

use crate::{password, repository};

#[derive(Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

impl super::Command {
    pub async fn register(
        &self,
        mut input: RegisterInput,
    ) -> laptop_review_shared::Result<super::User> {
        input.username = input.username.trim().to_owned();
        input.validate()?;

        let password_hash = password::hash_password(&input.password)?;
        let now = laptop_review_shared::now();

        let id = match repository::create(
            &self.write_db,
            input.username.to_owned(),
            input.email.to_owned(),
            password_hash,
            now,
        )
        .await
        {
            Ok(id) => id,
            Err(err) if laptop_review_shared::is_unique_violation(&err) => {
                laptop_review_shared::conflict!("username or email already registered")
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(user_id = id, "user registered");

        Ok(super::User {
            id,
            username: input.username,
            email: input.email,
            created_at: now,
            updated_at: now,
        })
    }
}
