pub mod algorithm;
pub mod palettes;
