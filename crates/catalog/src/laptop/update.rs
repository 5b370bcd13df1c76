use validator::Validate;

use super::{Laptop, LaptopInput, repository};

impl super::Command {
    pub async fn update(
        &self,
        id: i64,
        input: LaptopInput,
    ) -> laptop_review_shared::Result<Laptop> {
        input.validate()?;

        let now = laptop_review_shared::now();

        let updated = match repository::update(&self.write_db, id, &input, now).await {
            Ok(updated) => updated,
            Err(err) if laptop_review_shared::is_foreign_key_violation(&err) => {
                laptop_review_shared::invalid!(
                    "brand_id or category_id does not reference an existing row"
                )
            }
            Err(err) => return Err(err.into()),
        };

        if updated == 0 {
            laptop_review_shared::not_found!("laptop not found");
        }

        let Some(laptop) = repository::find(&self.write_db, id).await? else {
            laptop_review_shared::not_found!("laptop not found");
        };

        Ok(laptop)
    }
}
