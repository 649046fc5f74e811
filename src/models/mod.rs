/// Segment encoding modes
pub mod mode;
/// Version, correction level and encoded output
pub mod qr_code;

pub use mode::EncodingMode;
pub use qr_code::{ECLevel, EncodedData, Version};
