mod product_dto;

pub use product_dto::{
    ProductImageRequestDto, ProductImageResponseDto, ProductListQuery, ProductRequestDto,
    ProductResponseDto,
};
