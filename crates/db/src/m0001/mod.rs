mod brand;
mod category;
mod comment;
mod laptop;
mod profile;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "laptop_review",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUsernameIdx,
        user::CreateEmailIdx,
        profile::CreateTable,
        profile::CreateUserIdx,
        brand::CreateTable,
        brand::CreateNameIdx,
        category::CreateTable,
        category::CreateNameIdx,
        laptop::CreateTable,
        laptop::CreateBrandIdx,
        laptop::CreateCategoryIdx,
        comment::CreateTable,
        comment::CreateLaptopIdx,
    ]
);
