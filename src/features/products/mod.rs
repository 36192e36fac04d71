//! Products of a store. A product is filed under one category, size and
//! color of the same store and carries one or more image URLs.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/{store_id}/products` | Yes | Create |
//! | GET | `/api/{store_id}/products` | No | List (filters: category, size, color, featured) |
//! | GET | `/api/{store_id}/products/{product_id}` | No | Get |
//! | PATCH | `/api/{store_id}/products/{product_id}` | Yes | Update |
//! | DELETE | `/api/{store_id}/products/{product_id}` | Yes | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgProductRepository, ProductRepository};
pub use services::{ProductReferences, ProductService};
