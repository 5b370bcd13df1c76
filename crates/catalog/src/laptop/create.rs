use validator::Validate;

use super::{Laptop, LaptopInput, repository};

impl super::Command {
    pub async fn create(&self, input: LaptopInput) -> laptop_review_shared::Result<Laptop> {
        input.validate()?;

        let now = laptop_review_shared::now();

        let id = match repository::create(&self.write_db, &input, now).await {
            Ok(id) => id,
            Err(err) if laptop_review_shared::is_foreign_key_violation(&err) => {
                laptop_review_shared::invalid!(
                    "brand_id or category_id does not reference an existing row"
                )
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(laptop_id = id, "laptop created");

        Ok(Laptop {
            id,
            brand_id: input.brand_id,
            category_id: input.category_id,
            name: input.name,
            release_year: input.release_year,
            spec: input.spec,
            price: input.price,
            created_at: now,
            updated_at: now,
        })
    }
}
