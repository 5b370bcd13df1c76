use std::ops::Deref;

use laptop_review_shared::State;
use serde::Serialize;

use crate::{
    JwtKeys,
    repository::{self, FindType, UserRow},
};

mod change_password;
mod login;
mod register;

pub use change_password::ChangePasswordInput;
pub use login::LoginInput;
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command {
    state: State,
    keys: JwtKeys,
    pub profile: crate::profile::Command,
}

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: State, keys: JwtKeys) -> Self {
        Self {
            profile: crate::profile::Command(state.clone()),
            state,
            keys,
        }
    }

    pub fn keys(&self) -> &JwtKeys {
        &self.keys
    }

    pub async fn find(&self, id: i64) -> laptop_review_shared::Result<Option<User>> {
        let row = repository::find(&self.read_db, FindType::Id(id)).await?;

        Ok(row.map(User::from))
    }

    pub async fn find_by_username(
        &self,
        username: impl Into<String>,
    ) -> laptop_review_shared::Result<Option<User>> {
        let row = repository::find(&self.read_db, FindType::Username(username.into())).await?;

        Ok(row.map(User::from))
    }
}

/// Public view of an account. The password digest never leaves the crate.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
