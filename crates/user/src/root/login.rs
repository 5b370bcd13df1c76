use serde::Deserialize;
use validator::Validate;

use crate::{password, repository};

#[derive(Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    /// Returns a signed token for the account.
    pub async fn login(&self, input: LoginInput) -> laptop_review_shared::Result<String> {
        input.validate()?;

        let Some(user_row) = repository::find(
            &self.read_db,
            repository::FindType::Username(input.username),
        )
        .await?
        else {
            // Same Argon2 cost as a wrong password.
            password::verify_password(&input.password, password::DUMMY_HASH)?;
            laptop_review_shared::unauthorized!("username or password is incorrect");
        };

        if !password::verify_password(&input.password, &user_row.password)? {
            laptop_review_shared::unauthorized!("username or password is incorrect");
        }

        let token = self.keys.issue(user_row.id)?;
        tracing::info!(user_id = user_row.id, "user logged in");

        Ok(token)
    }
}
