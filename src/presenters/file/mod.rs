pub mod json;
pub mod ppm;
