use crate::repository;

impl super::Command {
    pub async fn delete_comment(
        &self,
        user_id: i64,
        id: i64,
    ) -> laptop_review_shared::Result<()> {
        let Some(comment) = repository::find(&self.write_db, id).await? else {
            laptop_review_shared::not_found!("comment not found");
        };

        if comment.user_id != user_id {
            return Err(laptop_review_shared::Error::Forbidden);
        }

        let now = laptop_review_shared::now();
        if repository::soft_delete(&self.write_db, id, now).await? == 0 {
            laptop_review_shared::not_found!("comment not found");
        }

        tracing::info!(comment_id = id, user_id, "comment deleted");

        Ok(())
    }
}
