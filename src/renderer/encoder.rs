//! PNG output for rasters.
//!
//! - `save_png`: consume a `Raster` and write it as a 24-bit RGB PNG,
//!   replacing any existing file.
use image::{ImageBuffer, ImageFormat, Rgb};
use std::path::Path;

use super::raster::Raster;
use crate::error::{GridError, GridResult};

/// PNG dimensions for a `width` x `height` buffer of `found` bytes.
fn png_dimensions(width: usize, height: usize, found: usize) -> GridResult<(u32, u32)> {
    let size_error = || GridError::BufferSize {
        width,
        height,
        expected: width.saturating_mul(height).saturating_mul(3),
        found,
    };
    let w = u32::try_from(width).map_err(|_| size_error())?;
    let h = u32::try_from(height).map_err(|_| size_error())?;
    Ok((w, h))
}

pub fn save_png(raster: Raster, path: &Path) -> GridResult<()> {
    let (width, height) = (raster.width(), raster.height());
    let data = raster.into_raw();
    let found = data.len();
    let (w, h) = png_dimensions(width, height, found)?;
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(w, h, data).ok_or(GridError::BufferSize {
            width,
            height,
            expected: width * height * 3,
            found,
        })?;

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| match source {
            image::ImageError::IoError(e) => GridError::io(path, e),
            other => GridError::Encode {
                path: path.to_path_buf(),
                source: other,
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_png_roundtrip_dimensions_and_pixels() {
        let dir = std::env::temp_dir().join("griddiff_test_encoder");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.png");

        let raster = Raster::from_raw(2, 1, vec![255, 0, 0, 255, 255, 0]).unwrap();
        save_png(raster, &path).unwrap();

        let decoded = image::open(&path).unwrap().into_rgb8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(decoded.get_pixel(1, 0), &Rgb([255, 255, 0]));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_dimensions_beyond_u32_are_rejected() {
        let too_wide = u32::MAX as usize + 1;
        let err = png_dimensions(too_wide, 1, 0).unwrap_err();
        assert!(matches!(err, GridError::BufferSize { width, found: 0, .. } if width == too_wide));
        assert!(png_dimensions(1, too_wide, 0).is_err());
        assert_eq!(png_dimensions(640, 480, 640 * 480 * 3).unwrap(), (640, 480));
    }

    #[test]
    fn test_save_png_unwritable_path_is_io_error() {
        let path = std::env::temp_dir()
            .join("griddiff_test_no_such_dir")
            .join("nested")
            .join("out.png");
        let _ = std::fs::remove_dir_all(std::env::temp_dir().join("griddiff_test_no_such_dir"));

        let raster = Raster::from_raw(1, 1, vec![0, 0, 0]).unwrap();
        assert!(matches!(save_png(raster, &path), Err(GridError::Io { .. })));
    }
}
