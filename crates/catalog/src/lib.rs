pub mod brand;
pub mod category;
pub mod laptop;

use laptop_review_shared::State;

pub use brand::{Brand, BrandInput};
pub use category::{Category, CategoryInput};
pub use laptop::{Laptop, LaptopInput};

#[derive(Clone)]
pub struct Command {
    pub brand: brand::Command,
    pub category: category::Command,
    pub laptop: laptop::Command,
}

impl Command {
    pub fn new(state: State) -> Self {
        Self {
            brand: brand::Command(state.clone()),
            category: category::Command(state.clone()),
            laptop: laptop::Command(state),
        }
    }
}
