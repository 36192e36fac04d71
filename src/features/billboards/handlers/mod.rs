pub mod billboard_handler;

pub use billboard_handler::{
    __path_create_billboard, __path_delete_billboard, __path_get_billboard,
    __path_list_billboards, __path_update_billboard, create_billboard, delete_billboard,
    get_billboard, list_billboards, update_billboard,
};
