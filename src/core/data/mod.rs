pub mod colour;
pub mod complex;
pub mod frame;
pub mod pixel_request;
pub mod selection;
pub mod viewport;
