use crate::error::{Error, Result};
use crate::types::Response;
use log::debug;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Mode of the store file on unix; the picker often runs as another user.
#[cfg(unix)]
pub const STORE_MODE: u32 = 0o644;

/// JSON file holding every fetched [`Response`] between runs.
///
/// Writes replace the whole file through a temp file in the same directory,
/// so readers see either the previous list or the new one.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn write(&self, responses: &[Response]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = tempfile::NamedTempFile::new_in(dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(STORE_MODE))?;
        }
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer(&mut writer, responses)?;
            writer.flush()?;
        }
        // Contents must be on disk before the rename makes them visible.
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| Error::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;
        debug!("wrote {} responses to {}", responses.len(), self.path.display());
        Ok(())
    }

    pub fn read(&self) -> Result<Vec<Response>> {
        let data = std::fs::read_to_string(&self.path)?;
        let responses: Vec<Response> = serde_json::from_str(&data)?;
        debug!(
            "read {} responses from {}",
            responses.len(),
            self.path.display()
        );
        Ok(responses)
    }
}
