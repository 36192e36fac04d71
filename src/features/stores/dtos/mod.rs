mod store_dto;

pub use store_dto::{StoreRequestDto, StoreResponseDto};
