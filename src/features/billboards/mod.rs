//! Billboards: the hero banners a category page is built around.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/{store_id}/billboards` | Yes | Create |
//! | GET | `/api/{store_id}/billboards` | No | List |
//! | GET | `/api/{store_id}/billboards/{billboard_id}` | No | Get |
//! | PATCH | `/api/{store_id}/billboards/{billboard_id}` | Yes | Update |
//! | DELETE | `/api/{store_id}/billboards/{billboard_id}` | Yes | Delete (409 while categories use it) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::PgBillboardRepository;
pub use services::BillboardService;
