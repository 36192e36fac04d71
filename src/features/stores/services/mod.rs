mod ownership_guard;
mod store_service;

pub use ownership_guard::{require_user, OwnershipGuard};
pub use store_service::StoreService;

#[cfg(test)]
pub use ownership_guard::STORE_ACCESS_DENIED;
