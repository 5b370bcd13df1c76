pub mod jwt;
pub mod password;
pub mod profile;

pub(crate) mod repository;
mod root;

pub use jwt::JwtKeys;
pub use profile::{Profile, ProfileInput};
pub use root::*;
