//! Explicit workspace handle: an identifier paired with a root path.
//!
//! Callers that manage many extracted trees (one per upload, one per session)
//! key them by identifier and pass the workspace to the engine explicitly,
//! instead of resolving roots through shared global state.

use crate::classify::Classifier;
use crate::document::RenderedDocument;
use crate::engine;
use crate::error::FoldError;
use crate::filter::FilterSpec;
use crate::tree::{self, TreeNode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    id: String,
    root: PathBuf,
}
impl Workspace {
    pub fn new(id: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            root: root.into(),
        }
    }
    /// Creates a workspace over `root` with a fresh random identifier.
    pub fn generate(root: impl Into<PathBuf>) -> Self {
        Self::new(Uuid::new_v4().to_string(), root)
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    /// Describes this workspace's tree. See [`crate::describe`].
    pub fn describe(&self, classifier: &dyn Classifier) -> Result<TreeNode, FoldError> {
        tree::describe(&self.root, classifier)
    }
    /// Assembles this workspace's filtered document. See [`crate::assemble`].
    pub fn assemble(&self, spec: &FilterSpec) -> Result<RenderedDocument, FoldError> {
        engine::assemble(&self.root, spec)
    }
}
