pub mod store_handler;

pub use store_handler::{
    __path_create_store, __path_delete_store, __path_get_store, __path_list_stores,
    __path_update_store, create_store, delete_store, get_store, list_stores, update_store,
};
