//! Locating asset files relative to the running executable.
//!
//! Builds land in `<install-root>/<dir>/<dir>/<exe>` (for cargo that is
//! `target/debug/<exe>`), and assets live in `<install-root>/assets`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Longest path, in bytes, the locator will hand out. A 256-byte C buffer
/// minus its terminator.
pub const MAX_PATH_LEN: usize = 255;

/// Directory levels between the executable and the install root, counting
/// the executable itself.
const EXE_DEPTH: usize = 3;

const ASSETS_DIR: &str = "assets";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not determine the executable path: {0}")]
    CurrentExe(#[source] io::Error),
    #[error("executable path '{}' is not nested three directories deep", path.display())]
    TooShallow { path: PathBuf },
    #[error("path '{}' is longer than {max} bytes", path.display())]
    PathTooLong { path: PathBuf, max: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetLocator {
    root: PathBuf,
    assets: PathBuf,
}

impl AssetLocator {
    pub fn from_current_exe() -> Result<Self, AssetError> {
        let exe = std::env::current_exe().map_err(AssetError::CurrentExe)?;
        Self::from_exe_path(&exe)
    }

    pub fn from_exe_path(exe: &Path) -> Result<Self, AssetError> {
        let mut root = exe;
        for _ in 0..EXE_DEPTH {
            root = root.parent().ok_or_else(|| AssetError::TooShallow {
                path: exe.to_path_buf(),
            })?;
        }
        if root.as_os_str().is_empty() {
            return Err(AssetError::TooShallow {
                path: exe.to_path_buf(),
            });
        }
        Self::from_root(root)
    }

    pub fn from_root(root: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let root = bounded(root.into())?;
        let assets = bounded(root.join(ASSETS_DIR))?;
        log::debug!("Asset directory: {}", assets.display());
        Ok(Self { root, assets })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets
    }

    /// Full path of `name` inside the assets directory.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, AssetError> {
        bounded(self.assets.join(name))
    }
}

fn bounded(path: PathBuf) -> Result<PathBuf, AssetError> {
    if path.as_os_str().len() > MAX_PATH_LEN {
        return Err(AssetError::PathTooLong {
            path,
            max: MAX_PATH_LEN,
        });
    }
    Ok(path)
}
