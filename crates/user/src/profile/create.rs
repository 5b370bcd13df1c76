use validator::Validate;

use super::{Profile, ProfileInput, repository};

impl super::Command {
    /// A user owns at most one profile.
    pub async fn create_profile(
        &self,
        user_id: i64,
        input: ProfileInput,
    ) -> laptop_review_shared::Result<Profile> {
        input.validate()?;

        let now = laptop_review_shared::now();

        let id = match repository::create(
            &self.write_db,
            user_id,
            input.fullname.to_owned(),
            input.bio.to_owned(),
            now,
        )
        .await
        {
            Ok(id) => id,
            Err(err) if laptop_review_shared::is_unique_violation(&err) => {
                laptop_review_shared::conflict!("profile already exists for this user")
            }
            Err(err) if laptop_review_shared::is_foreign_key_violation(&err) => {
                laptop_review_shared::not_found!("user not found")
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Profile {
            id,
            user_id,
            fullname: input.fullname,
            bio: input.bio,
            created_at: now,
            updated_at: now,
        })
    }
}
