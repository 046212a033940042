pub mod coordinate_mapper;
pub mod parse_decimal;
