//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the session token in a single file so desktop users stay
//! signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token        # the bearer token, UTF-8, no trailing newline
//! ```
//!
//! ## Platform data directories
//!
//! Callers use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/knowledge-hub/` |
//! | Linux | `~/.local/share/knowledge-hub/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\knowledge-hub\` |

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::token::{normalize, TokenStore};

const TOKEN_FILE: &str = "token";

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Directory holding the token file.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_FILE)
    }
}

/// Write `contents` to `path`, readable only by the owner on unix.
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;

    // A file created by an older build keeps its mode; tighten it
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents.as_bytes())
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        normalize(&content)
    }

    fn set(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create token directory {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = write_private(&self.token_path(), token.trim()) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session token: {}", e),
        }
    }
}
