use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Temporary directory removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("bmp2header-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        ScratchDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bmp(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color: impl Fn(u32, u32) -> [u8; 3],
    ) -> PathBuf {
        let path = self.path.join(name);
        RgbImage::from_fn(width, height, |x, y| Rgb(color(x, y)))
            .save(&path)
            .unwrap();
        path
    }

    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
