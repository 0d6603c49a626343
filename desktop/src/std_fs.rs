use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use embedded_io::ErrorType;
use log::{info, trace};

/// Buffered output file exposed through `embedded_io::Write`.
pub struct StdFileWriter {
    file: BufWriter<fs::File>,
}

impl StdFileWriter {
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(StdFileWriter {
            file: BufWriter::new(file),
        })
    }
}

impl ErrorType for StdFileWriter {
    type Error = std::io::Error;
}

impl embedded_io::Write for StdFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()?;
        self.file.get_ref().sync_all()
    }
}

pub struct StdDirectory {
    pub path: PathBuf,
}

impl StdDirectory {
    pub fn open(path: &Path) -> Option<Self> {
        if !path.is_dir() {
            return None;
        }
        Some(StdDirectory {
            path: path.to_path_buf(),
        })
    }

    /// Creates `path` and any missing parents.
    pub fn create_all(path: &Path) -> std::io::Result<Self> {
        if !path.exists() {
            info!("Creating output directory {:?}", path);
        }
        fs::create_dir_all(path)?;
        Ok(StdDirectory {
            path: path.to_path_buf(),
        })
    }

    /// Non-recursive listing. Symlinks are followed when classifying entries.
    pub fn list(&self) -> std::io::Result<Vec<StdDirEntry>> {
        let mut result = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_file = path.is_file();
            trace!("Listed {:?} (file: {})", path, is_file);
            result.push(StdDirEntry {
                name,
                path,
                is_file,
            });
        }
        Ok(result)
    }
}

pub struct StdDirEntry {
    name: String,
    path: PathBuf,
    is_file: bool,
}

impl StdDirEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
