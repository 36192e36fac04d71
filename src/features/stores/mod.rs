//! Stores (tenants) and the ownership guard every store-scoped resource
//! goes through.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/stores` | Yes | Create a store |
//! | GET | `/api/stores` | Yes | List own stores |
//! | GET | `/api/stores/{store_id}` | Yes | Get an own store |
//! | PATCH | `/api/stores/{store_id}` | Yes | Rename a store |
//! | DELETE | `/api/stores/{store_id}` | Yes | Delete an empty store |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgStoreRepository, StoreRepository};
pub use services::{OwnershipGuard, StoreService};
