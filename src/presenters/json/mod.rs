pub mod frame_json;
