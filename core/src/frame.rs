use alloc::{string::String, vec::Vec};
use core::fmt;

pub const DEFAULT_WIDTH: u32 = 96;
pub const DEFAULT_HEIGHT: u32 = 96;

/// Expected size of every frame in a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Resolution { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One decoded image as packed RGB565 values in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    source: String,
    size: Resolution,
    pixels: Vec<u16>,
}

impl Frame {
    pub fn new(source: impl Into<String>, size: Resolution, pixels: Vec<u16>) -> Self {
        debug_assert_eq!(size.pixel_count(), pixels.len());
        Frame {
            source: source.into(),
            size,
            pixels,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Decoded size, which may differ from the sheet's configured resolution.
    pub fn size(&self) -> Resolution {
        self.size
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }
}
