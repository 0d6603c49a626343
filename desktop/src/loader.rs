use std::path::Path;

use log::{trace, warn};
use sprite_core::frame::Resolution;

use crate::error::{Error, Result};

/// A decoded image reduced to three 8-bit channels.
pub struct Bitmap {
    pub size: Resolution,
    /// Row-major `[r, g, b]` triples, `size.width * size.height` of them.
    pub pixels: Vec<[u8; 3]>,
}

/// Decodes `path` and drops any alpha channel.
///
/// A size other than `expected` is only a warning unless `strict` is set;
/// the image is never resized.
pub fn load(path: &Path, expected: Resolution, strict: bool) -> Result<Bitmap> {
    let image = image::open(path)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();

    let (width, height) = image.dimensions();
    let size = Resolution::new(width, height);
    trace!("Decoded {:?} as {}", path, size);
    if size != expected {
        if strict {
            return Err(Error::SizeMismatch {
                path: path.to_path_buf(),
                actual: size,
                expected,
            });
        }
        warn!(
            "Image {} is {}, expected: {}",
            path.display(),
            size,
            expected
        );
    }

    let pixels = image.pixels().map(|pixel| pixel.0).collect();
    Ok(Bitmap { size, pixels })
}
