use std::path::{Path, PathBuf};

/// Per-run shell state: the current-directory cursor and the display name
/// the user supplied at startup.
///
/// The cursor is the base for relative path resolution. It is mutated only
/// by the `up` and `cd` handlers, after they have validated the target, and
/// never while a command is in flight.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
    username: String,
}

impl Session {
    /// Create a session rooted at `home`, normally the host home directory.
    pub fn new(username: String, home: PathBuf) -> Self {
        Session {
            cwd: home,
            username,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn current_dir(&self) -> &Path {
        &self.cwd
    }

    /// Replace the cursor. No validation happens here; callers must have
    /// confirmed the target is an existing directory first.
    pub fn set_current_dir(&mut self, path: PathBuf) {
        self.cwd = path;
    }

    /// Resolve a raw path argument to an absolute path: absolute input is
    /// used verbatim, anything else is appended to the cursor. No `.` or
    /// `..` segment collapsing is performed.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        self.cwd.join(raw)
    }
}
