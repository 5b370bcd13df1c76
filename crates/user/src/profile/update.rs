use validator::Validate;

use super::{Profile, ProfileInput, repository};

impl super::Command {
    pub async fn update_profile(
        &self,
        user_id: i64,
        input: ProfileInput,
    ) -> laptop_review_shared::Result<Profile> {
        input.validate()?;

        let now = laptop_review_shared::now();
        let updated =
            repository::update(&self.write_db, user_id, input.fullname, input.bio, now).await?;

        if updated == 0 {
            laptop_review_shared::not_found!("profile not found");
        }

        let Some(profile) = repository::find_by_user(&self.write_db, user_id).await? else {
            laptop_review_shared::not_found!("profile not found");
        };

        Ok(profile)
    }
}
