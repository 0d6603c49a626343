use std::path::{Path, PathBuf};

use log::{debug, info};
use sprite_core::{
    color::rgb_to_565,
    frame::{Frame, Resolution},
    natural::natural_sort_key,
};

use crate::{
    error::{Error, Result},
    loader,
    std_fs::StdDirectory,
};

pub const EXTENSION: &str = ".bmp";

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub resolution: Resolution,
    /// Reject frames whose size differs from `resolution`.
    pub strict: bool,
}

fn is_candidate(name: &str) -> bool {
    // Shell globs skip dotfiles unless the pattern starts with a dot.
    !name.starts_with('.') && name.ends_with(EXTENSION)
}

/// Lists `*.bmp` files directly inside `folder` in natural order.
pub fn discover(folder: &Path) -> Result<Vec<PathBuf>> {
    let directory =
        StdDirectory::open(folder).ok_or_else(|| Error::InvalidInputFolder(folder.to_path_buf()))?;
    let mut matches = directory
        .list()
        .map_err(|e| Error::io(folder, e))?
        .into_iter()
        .filter(|entry| entry.is_file() && is_candidate(entry.name()))
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();
    if matches.is_empty() {
        return Err(Error::NoInputFiles(folder.to_path_buf()));
    }
    matches.sort_by_cached_key(|path| natural_sort_key(&path.to_string_lossy()));
    debug!("Found {} bitmaps in {:?}", matches.len(), folder);
    Ok(matches)
}

pub fn load_frame(path: &Path, config: &Config) -> Result<Frame> {
    let bitmap = loader::load(path, config.resolution, config.strict)?;
    let pixels = bitmap
        .pixels
        .iter()
        .map(|&[r, g, b]| rgb_to_565(r, g, b))
        .collect();
    info!("Loaded {} ({})", path.display(), bitmap.size);
    Ok(Frame::new(path.display().to_string(), bitmap.size, pixels))
}

/// Decodes every bitmap in `folder`. The first failure aborts the whole run.
pub fn collect_frames(folder: &Path, config: &Config) -> Result<Vec<Frame>> {
    discover(folder)?
        .iter()
        .map(|path| load_frame(path, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScratchDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn discovers_in_natural_order() {
        let dir = ScratchDir::new("pipeline-order");
        for name in ["f10.bmp", "f2.bmp", "f1.bmp"] {
            dir.bmp(name, 1, 1, |_, _| [0, 0, 0]);
        }
        let found = discover(dir.path()).unwrap();
        assert_eq!(names(&found), ["f1.bmp", "f2.bmp", "f10.bmp"]);
    }

    #[test]
    fn ignores_other_entries() {
        let dir = ScratchDir::new("pipeline-filter");
        dir.bmp("a.bmp", 1, 1, |_, _| [0, 0, 0]);
        dir.file("notes.txt", b"hello");
        dir.file("upper.BMP", b"case sensitive");
        dir.file(".hidden.bmp", b"dotfile");
        std::fs::create_dir(dir.path().join("nested.bmp")).unwrap();
        let found = discover(dir.path()).unwrap();
        assert_eq!(names(&found), ["a.bmp"]);
    }

    #[test]
    fn empty_folder() {
        let dir = ScratchDir::new("pipeline-empty");
        assert!(matches!(discover(dir.path()), Err(Error::NoInputFiles(_))));
    }

    #[test]
    fn missing_folder() {
        let dir = ScratchDir::new("pipeline-missing");
        let missing = dir.path().join("nope");
        assert!(matches!(discover(&missing), Err(Error::InvalidInputFolder(_))));
        let file = dir.file("plain.bmp", b"");
        assert!(matches!(discover(&file), Err(Error::InvalidInputFolder(_))));
    }

    #[test]
    fn converts_to_rgb565() {
        let dir = ScratchDir::new("pipeline-convert");
        dir.bmp("one.bmp", 2, 1, |x, _| if x == 0 { [255, 0, 0] } else { [255, 255, 255] });
        let config = Config {
            resolution: Resolution::new(2, 1),
            strict: false,
        };
        let frames = collect_frames(dir.path(), &config).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].pixels(), &[0xF800, 0xFFFF]);
        assert_eq!(frames[0].size(), Resolution::new(2, 1));
        assert!(frames[0].source().ends_with("one.bmp"));
    }

    #[test]
    fn keeps_native_size_of_mismatched_frames() {
        let dir = ScratchDir::new("pipeline-native");
        dir.bmp("a1.bmp", 2, 2, |_, _| [0, 0, 0]);
        dir.bmp("a2.bmp", 3, 1, |_, _| [0, 0, 0]);
        let config = Config {
            resolution: Resolution::new(2, 2),
            strict: false,
        };
        let frames = collect_frames(dir.path(), &config).unwrap();
        assert_eq!(frames[0].pixels().len(), 4);
        assert_eq!(frames[1].pixels().len(), 3);
    }

    #[test]
    fn decode_failure_aborts() {
        let dir = ScratchDir::new("pipeline-abort");
        dir.bmp("a1.bmp", 1, 1, |_, _| [0, 0, 0]);
        dir.file("a2.bmp", b"garbage");
        let result = collect_frames(dir.path(), &Config::default());
        assert!(matches!(result, Err(Error::Decode { .. })));
    }
}
