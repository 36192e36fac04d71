mod billboard_dto;

pub use billboard_dto::{BillboardRequestDto, BillboardResponseDto};
