//! Garment pipeline stages.
//!
//! - **validate**: Byte-level checks before decoding
//! - **decode**: Content-sniffed decoding with dimension limits
//! - **matting**: Upsampling class masks and cutting garments out of the photo
//! - **encode**: JPEG re-encoding and artifact naming
//! - **discovery**: Finding photos on disk
//! - **processor**: Orchestrates one photo end to end

pub mod decode;
pub mod discovery;
pub mod encode;
pub mod matting;
pub mod processor;
pub mod validate;

pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{DiscoveredPhoto, PhotoDiscovery};
pub use matting::MaskIsolator;
pub use processor::GarmentPipeline;
pub use validate::Validator;
