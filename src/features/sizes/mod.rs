//! Sizes a store sells its products in.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/{store_id}/sizes` | Yes | Create |
//! | GET | `/api/{store_id}/sizes` | No | List |
//! | GET | `/api/{store_id}/sizes/{size_id}` | No | Get |
//! | PATCH | `/api/{store_id}/sizes/{size_id}` | Yes | Update |
//! | DELETE | `/api/{store_id}/sizes/{size_id}` | Yes | Delete (409 while products use it) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::PgSizeRepository;
pub use services::SizeService;
