mod billboard_service;

pub use billboard_service::BillboardService;
