pub mod color;
pub mod device_status;
pub mod light;
pub mod light_state;
