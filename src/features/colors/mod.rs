//! Colors a store sells its products in, each with a hex code for swatches.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/{store_id}/colors` | Yes | Create |
//! | GET | `/api/{store_id}/colors` | No | List |
//! | GET | `/api/{store_id}/colors/{color_id}` | No | Get |
//! | PATCH | `/api/{store_id}/colors/{color_id}` | Yes | Update |
//! | DELETE | `/api/{store_id}/colors/{color_id}` | Yes | Delete (409 while products use it) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::PgColorRepository;
pub use services::ColorService;
