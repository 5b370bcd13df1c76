use super::repository;

impl super::Command {
    pub async fn delete(&self, id: i64) -> laptop_review_shared::Result<()> {
        let now = laptop_review_shared::now();

        if repository::soft_delete(&self.write_db, id, now).await? == 0 {
            laptop_review_shared::not_found!("laptop not found");
        }

        tracing::info!(laptop_id = id, "laptop deleted");

        Ok(())
    }
}
