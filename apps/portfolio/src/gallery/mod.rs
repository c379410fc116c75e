// Featured projects gallery: category index, filter predicate, JSON endpoints.

pub mod catalog;
pub mod category;
pub mod handlers;

pub use catalog::{is_visible, Catalog, CategoryIndex, Project};
pub use category::Category;
