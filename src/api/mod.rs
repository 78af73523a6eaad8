pub mod device_client;
pub mod paths;
pub mod session;
