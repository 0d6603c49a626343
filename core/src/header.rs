//! Header Document generation.
//!
//! Output layout, for a base identifier `sprite` and two 96x96 frames:
//!
//! ```text
//! // sprite.h
//! #ifndef SPRITE_H
//! #define SPRITE_H
//!
//! #include <Arduino.h>
//!
//! const uint16_t sprite1[96 * 96] PROGMEM = {
//! 0x0000, 0xFFFF, ...
//! };
//!
//! const uint16_t sprite2[96 * 96] PROGMEM = {
//! ...
//! };
//!
//! const uint16_t* sprite_sheet[] PROGMEM = { sprite1, sprite2 };
//! const int sprite_frameCount = sizeof(sprite_sheet) / sizeof(sprite_sheet[0]);
//!
//! #endif // SPRITE_H
//! ```

use alloc::{format, string::String, vec::Vec};
use core::fmt;
use log::debug;

use crate::{
    frame::{Frame, Resolution},
    ident,
};

pub const VALUES_PER_LINE: usize = 12;
const STORAGE_INCLUDE: &str = "#include <Arduino.h>";
const STORAGE_ATTRIBUTE: &str = "PROGMEM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    IoError(embedded_io::ErrorKind),
    EmptyFrameSet,
    InvalidIdentifier,
}

impl HeaderError {
    pub(crate) fn from_io_error(error: impl embedded_io::Error) -> Self {
        HeaderError::IoError(error.kind())
    }
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::IoError(kind) => write!(f, "I/O error: {:?}", kind),
            HeaderError::EmptyFrameSet => f.write_str("no frames to write"),
            HeaderError::InvalidIdentifier => f.write_str("base name is not a valid identifier"),
        }
    }
}

type Result<T> = core::result::Result<T, HeaderError>;

/// Names derived from the base identifier.
pub struct Names<'a> {
    base: &'a str,
}

impl<'a> Names<'a> {
    pub fn new(base: &'a str) -> Result<Self> {
        if !ident::is_identifier(base) {
            return Err(HeaderError::InvalidIdentifier);
        }
        Ok(Names { base })
    }

    pub fn include_guard(&self) -> String {
        format!("{}_H", self.base.to_ascii_uppercase())
    }

    /// Array name for the 1-based frame `index`.
    pub fn frame(&self, index: usize) -> String {
        format!("{}{}", self.base, index)
    }

    pub fn sheet(&self) -> String {
        format!("{}_sheet", self.base)
    }

    pub fn frame_count(&self) -> String {
        format!("{}_frameCount", self.base)
    }
}

/// Declared element count of a frame array. Frames of the configured size use
/// the configured dimensions; any other frame is declared with its own so the
/// initializer count always matches.
fn declared_size(frame: &Frame, resolution: Resolution) -> Resolution {
    if frame.size() == resolution {
        resolution
    } else {
        frame.size()
    }
}

fn push_frame(out: &mut String, name: &str, size: Resolution, pixels: &[u16]) {
    out.push_str(&format!(
        "const uint16_t {}[{} * {}] {} = {{\n",
        name, size.height, size.width, STORAGE_ATTRIBUTE
    ));
    for (i, value) in pixels.iter().enumerate() {
        out.push_str(&format!("0x{:04X}", value));
        if i + 1 < pixels.len() {
            out.push_str(", ");
        }
        if (i + 1) % VALUES_PER_LINE == 0 {
            out.push('\n');
        }
    }
    if pixels.len() % VALUES_PER_LINE != 0 {
        out.push('\n');
    }
    out.push_str("};\n\n");
}

/// Renders the complete header text. `file_name` only appears in the leading
/// comment.
pub fn render(
    file_name: &str,
    base: &str,
    resolution: Resolution,
    frames: &[Frame],
) -> Result<String> {
    if frames.is_empty() {
        return Err(HeaderError::EmptyFrameSet);
    }
    let names = Names::new(base)?;
    let guard = names.include_guard();

    let mut out = String::new();
    out.push_str(&format!("// {}\n", file_name));
    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));
    out.push_str(STORAGE_INCLUDE);
    out.push_str("\n\n");

    for (index, frame) in frames.iter().enumerate() {
        let size = declared_size(frame, resolution);
        if size != resolution {
            debug!(
                "Declaring {} as {} instead of {}",
                names.frame(index + 1),
                size,
                resolution
            );
        }
        push_frame(&mut out, &names.frame(index + 1), size, frame.pixels());
    }

    let frame_names = (1..=frames.len())
        .map(|index| names.frame(index))
        .collect::<Vec<_>>()
        .join(", ");
    let sheet = names.sheet();
    out.push_str(&format!(
        "const uint16_t* {}[] {} = {{ {} }};\n",
        sheet, STORAGE_ATTRIBUTE, frame_names
    ));
    out.push_str(&format!(
        "const int {} = sizeof({}) / sizeof({}[0]);\n\n",
        names.frame_count(),
        sheet,
        sheet
    ));
    out.push_str(&format!("#endif // {}\n", guard));
    Ok(out)
}

/// Renders the header and writes it to `out` in one pass.
pub fn write(
    out: &mut impl embedded_io::Write,
    file_name: &str,
    base: &str,
    resolution: Resolution,
    frames: &[Frame],
) -> Result<()> {
    let text = render(file_name, base, resolution, frames)?;
    out.write_all(text.as_bytes())
        .map_err(HeaderError::from_io_error)?;
    out.flush().map_err(HeaderError::from_io_error)?;
    debug!("Wrote {} bytes for {} frames", text.len(), frames.len());
    Ok(())
}
