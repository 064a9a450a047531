use std::path::Path;

use flagwave_image::{Image, ImageSize};
use image::ImageEncoder;

use crate::error::IoError;

/// The JPEG quality used when writing files by extension.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Reads an image from the given file path as 8-bit RGB.
///
/// The method tries to read from any image format supported by the image crate
/// and converts the decoded pixels to three channels, so grayscale or RGBA
/// inputs are accepted too.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] before touching the decoder when the
/// path is missing.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(&file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    let image = decode_image_rgb8(&mmap)?;

    log::debug!("read {} ({})", file_path.display(), image.size());

    Ok(image)
}

/// Decodes an encoded image held in memory as 8-bit RGB.
///
/// The format is guessed from the leading bytes of the buffer.
///
/// # Arguments
///
/// * `bytes` - The encoded image, e.g. the body of an upload.
pub fn decode_image_rgb8(bytes: &[u8]) -> Result<Image<u8, 3>, IoError> {
    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
        .map_err(IoError::ImageDecodeError)?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Encodes an RGB image as JPEG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode.
/// * `quality` - The JPEG quality in `1..=100`.
pub fn encode_image_jpeg(image: &Image<u8, 3>, quality: u8) -> Result<Vec<u8>, IoError> {
    let mut buffer = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            image.as_slice(),
            image.width() as u32,
            image.height() as u32,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(IoError::ImageEncodeError)?;

    Ok(buffer)
}

/// Encodes an RGB image as PNG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode.
pub fn encode_image_png(image: &Image<u8, 3>) -> Result<Vec<u8>, IoError> {
    let mut buffer = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            image.as_slice(),
            image.width() as u32,
            image.height() as u32,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(IoError::ImageEncodeError)?;

    Ok(buffer)
}

/// Writes an RGB image to the given file path.
///
/// The format is chosen from the file extension: `jpg`/`jpeg` are written
/// with [`DEFAULT_JPEG_QUALITY`] and `png` is lossless.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to write.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedImageFormat`] for any other extension.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let data = match extension.as_deref() {
        Some("jpg") | Some("jpeg") => encode_image_jpeg(image, DEFAULT_JPEG_QUALITY)?,
        Some("png") => encode_image_png(image)?,
        _ => return Err(IoError::UnsupportedImageFormat(file_path.to_path_buf())),
    };

    // write the data directly to a file
    std::fs::write(file_path, data)?;

    log::debug!("wrote {} ({})", file_path.display(), image.size());

    Ok(())
}
