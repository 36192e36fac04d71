//! Categories of a store. Each category is shown with one billboard of the
//! same store and groups products.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/{store_id}/categories` | Yes | Create |
//! | GET | `/api/{store_id}/categories` | No | List |
//! | GET | `/api/{store_id}/categories/{category_id}` | No | Get |
//! | PATCH | `/api/{store_id}/categories/{category_id}` | Yes | Update |
//! | DELETE | `/api/{store_id}/categories/{category_id}` | Yes | Delete (409 while products use it) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::PgCategoryRepository;
pub use services::CategoryService;
