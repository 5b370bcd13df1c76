use validator::Validate;

use crate::{CommentInput, CommentWithAuthor, repository};

impl super::Command {
    /// Only the author may rewrite a comment.
    pub async fn update_comment(
        &self,
        user_id: i64,
        id: i64,
        input: CommentInput,
    ) -> laptop_review_shared::Result<CommentWithAuthor> {
        input.validate()?;

        let Some(comment) = repository::find(&self.write_db, id).await? else {
            laptop_review_shared::not_found!("comment not found");
        };

        if comment.user_id != user_id {
            return Err(laptop_review_shared::Error::Forbidden);
        }

        if !repository::laptop_exists(&self.write_db, input.laptop_id).await? {
            laptop_review_shared::not_found!("laptop not found");
        }

        let now = laptop_review_shared::now();
        if repository::update(&self.write_db, id, &input, now).await? == 0 {
            laptop_review_shared::not_found!("comment not found");
        }

        let Some(comment) = repository::find_with_author(&self.write_db, id).await? else {
            laptop_review_shared::not_found!("comment not found");
        };

        Ok(comment)
    }
}
