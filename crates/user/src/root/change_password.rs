use serde::Deserialize;
use validator::Validate;

use crate::{password, repository};

#[derive(Deserialize, Validate)]
pub struct ChangePasswordInput {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8, max = 72))]
    pub new_password: String,
}

impl super::Command {
    pub async fn change_password(
        &self,
        user_id: i64,
        input: ChangePasswordInput,
    ) -> laptop_review_shared::Result<()> {
        let Some(user_row) =
            repository::find(&self.read_db, repository::FindType::Id(user_id)).await?
        else {
            laptop_review_shared::not_found!("user not found");
        };

        if !password::verify_password(&input.current_password, &user_row.password)? {
            laptop_review_shared::unauthorized!("invalid current password");
        }

        input.validate()?;

        let password_hash = password::hash_password(&input.new_password)?;
        let now = laptop_review_shared::now();

        if repository::update_password(&self.write_db, user_id, password_hash, now).await? == 0 {
            laptop_review_shared::not_found!("user not found");
        }

        tracing::info!(user_id, "password changed");

        Ok(())
    }
}
