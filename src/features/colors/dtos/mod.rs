mod color_dto;

pub use color_dto::{ColorRequestDto, ColorResponseDto};
