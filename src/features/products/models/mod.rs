mod product;

pub use product::{Product, ProductDraft, ProductFilter, ProductImage};
