//! vitrans-media: Image file reading and base64 encoding for inline upload.

pub mod encoder;
pub mod mime;
pub mod types;

pub use encoder::{decode, encode_bytes, encode_file, parse_data_url, to_data_url};
pub use types::{EncodedImage, EncodingError, SelectedImage};
