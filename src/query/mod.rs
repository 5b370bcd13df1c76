mod laptop;

pub use laptop::*;
