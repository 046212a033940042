pub mod escape_time_algorithm;
pub mod palette;
