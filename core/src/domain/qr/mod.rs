pub mod ports;
pub mod value_objects;

pub use ports::QrEncoder;
pub use value_objects::{QrImage, public_device_url};
