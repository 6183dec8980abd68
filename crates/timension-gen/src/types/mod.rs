mod image;
mod request;

pub use image::EncodedImage;
pub use request::{AspectRatio, ImageRequest, Shaping, TextRequest, IMAGE_MODEL, TEXT_MODEL};
