use validator::Validate;

use crate::{CommentInput, CommentWithAuthor, repository};

impl super::Command {
    /// The author is always the authenticated caller.
    pub async fn create_comment(
        &self,
        user_id: i64,
        input: CommentInput,
    ) -> laptop_review_shared::Result<CommentWithAuthor> {
        input.validate()?;

        if !repository::laptop_exists(&self.write_db, input.laptop_id).await? {
            laptop_review_shared::not_found!("laptop not found");
        }

        let now = laptop_review_shared::now();
        let id = match repository::create(&self.write_db, user_id, &input, now).await {
            Ok(id) => id,
            Err(err) if laptop_review_shared::is_foreign_key_violation(&err) => {
                laptop_review_shared::not_found!("user not found")
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            comment_id = id,
            user_id,
            laptop_id = input.laptop_id,
            "comment created"
        );

        let Some(comment) = repository::find_with_author(&self.write_db, id).await? else {
            laptop_review_shared::not_found!("comment not found");
        };

        Ok(comment)
    }
}
