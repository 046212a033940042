pub mod render_frame;
pub mod zoom_into_box;
