pub mod blue_white_gradient;
pub mod classic;
pub mod factory;
pub mod fire_gradient;
pub mod kinds;
pub mod palette;
