mod product;
mod category;

pub use self::product::{Product, Rating};
pub use self::category::CategoryFilter;
