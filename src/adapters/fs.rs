use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::context::WaitContext;
use crate::core::registry::ResourcePlugin;
use crate::domain::ports::Resource;
use crate::utils::error::{Result, WaitError};

const SCHEME_PREFIX: &str = "file://";

/// Readiness probe for a local filesystem path.
///
/// Holds nothing but the resolved path; every `test` call stats the live
/// filesystem, so the probe can be kept around and asked again at any time.
#[derive(Debug)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    /// Build a probe from a `file://` identifier.
    ///
    /// The path is whatever follows the first seven bytes of the identifier,
    /// taken as-is: no scheme check, no percent-decoding, no host component.
    /// An empty remainder is accepted here and only fails in `test`.
    pub fn new(uri: Option<&str>) -> Result<Self> {
        let uri = uri.ok_or(WaitError::MissingResourceIdentifier)?;

        let path = uri
            .get(SCHEME_PREFIX.len()..)
            .ok_or_else(|| WaitError::InvalidResourceIdentifier {
                uri: uri.to_string(),
                reason: format!("shorter than the {:?} prefix", SCHEME_PREFIX),
            })?;

        Ok(Self {
            path: PathBuf::from(path),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Resource for FileResource {
    async fn test(&self, ctx: &WaitContext) -> Result<()> {
        // Budget first: an already-expired context must come back as the
        // caller's own cancellation/deadline signal, never masked by an
        // existence check that happened to race past it.
        if let Some(err) = ctx.error() {
            return Err(err);
        }

        tracing::debug!(path = %self.path.display(), "checking path");

        match tokio::fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) => Err(WaitError::ResourceNotReady(e)),
        }
    }
}

/// Registration adapter: binds the `file` scheme to `FileResource::new` in
/// the shape the host registry expects. Pure glue.
pub fn plugin() -> ResourcePlugin {
    fn make(uri: Option<&str>) -> Result<Box<dyn Resource>> {
        let resource = FileResource::new(uri)?;
        Ok(Box::new(resource))
    }

    ResourcePlugin {
        schemes: &["file"],
        factory: make,
    }
}
