use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    Password,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Profile {
    Table,
    Id,
    UserId,
    Fullname,
    Bio,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Brand {
    Table,
    Id,
    Name,
}

#[derive(Iden, Clone)]
pub enum Category {
    Table,
    Id,
    Name,
}

#[derive(Iden, Clone)]
pub enum Laptop {
    Table,
    Id,
    BrandId,
    CategoryId,
    Name,
    ReleaseYear,
    Spec,
    Price,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden, Clone)]
pub enum Comment {
    Table,
    Id,
    UserId,
    LaptopId,
    Content,
    Rating,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
