use std::collections::HashMap;

use laptop_review_catalog::{Brand, Category, Laptop};
use laptop_review_review::CommentWithAuthor;
use serde::Serialize;

/// A laptop with its brand, category and live comments.
#[derive(Debug, Serialize)]
pub struct LaptopDetail {
    #[serde(flatten)]
    pub laptop: Laptop,
    pub brand: Option<Brand>,
    pub category: Option<Category>,
    pub comments: Vec<CommentWithAuthor>,
}

pub async fn list_laptops(
    catalog: &laptop_review_catalog::Command,
    review: &laptop_review_review::Command,
) -> laptop_review_shared::Result<Vec<LaptopDetail>> {
    let laptops = catalog.laptop.list().await?;

    let brands = catalog
        .brand
        .list()
        .await?
        .into_iter()
        .map(|brand| (brand.id, brand))
        .collect::<HashMap<_, _>>();

    let categories = catalog
        .category
        .list()
        .await?
        .into_iter()
        .map(|category| (category.id, category))
        .collect::<HashMap<_, _>>();

    let mut comments = HashMap::<i64, Vec<CommentWithAuthor>>::new();
    for comment in review.list_with_author(None).await? {
        comments
            .entry(comment.comment.laptop_id)
            .or_default()
            .push(comment);
    }

    Ok(laptops
        .into_iter()
        .map(|laptop| LaptopDetail {
            brand: brands.get(&laptop.brand_id).cloned(),
            category: categories.get(&laptop.category_id).cloned(),
            comments: comments.remove(&laptop.id).unwrap_or_default(),
            laptop,
        })
        .collect())
}

pub async fn find_laptop(
    catalog: &laptop_review_catalog::Command,
    review: &laptop_review_review::Command,
    id: i64,
) -> laptop_review_shared::Result<Option<LaptopDetail>> {
    let Some(laptop) = catalog.laptop.find(id).await? else {
        return Ok(None);
    };

    let brand = catalog.brand.find(laptop.brand_id).await?;
    let category = catalog.category.find(laptop.category_id).await?;
    let comments = review.list_with_author(Some(laptop.id)).await?;

    Ok(Some(LaptopDetail {
        laptop,
        brand,
        category,
        comments,
    }))
}
