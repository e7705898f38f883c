//! Structural description of a directory tree.

use crate::classify::{Classifier, is_textual_media_type};
use crate::error::FoldError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A node in a described directory tree.
///
/// Folders carry their children in directory-iteration order, which is not
/// guaranteed to be sorted; consumers needing deterministic order sort
/// themselves. Files are always leaves, annotated with the classifier's media
/// type and the derived text/binary flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Folder { name: String, children: Vec<TreeNode> },
    File {
        name: String,
        media_type: String,
        is_text: bool,
    },
}
impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Folder { name, .. } => name,
            TreeNode::File { name, .. } => name,
        }
    }
    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }
}

/// Recursively describes the tree under `root`.
///
/// Every regular file is classified via `classifier`; its `is_text` flag is
/// true when the media type is `text/*` or one of the textual `application/*`
/// types. A subdirectory that cannot be read is logged and described with no
/// children; the call as a whole still succeeds.
///
/// # Errors
///
/// Returns [`FoldError::RootNotFound`] if `root` does not exist or is not a
/// directory.
pub fn describe(root: &Path, classifier: &dyn Classifier) -> Result<TreeNode, FoldError> {
    if !root.is_dir() {
        return Err(FoldError::RootNotFound(root.to_path_buf()));
    }
    tracing::debug!("describing tree at {}", root.display());
    Ok(describe_dir(root, classifier))
}

fn describe_dir(dir: &Path, classifier: &dyn Classifier) -> TreeNode {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut children = Vec::new();
    match fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::warn!("error reading entry in {}: {}", dir.display(), e);
                        continue;
                    }
                };
                let path = entry.path();
                if path.is_dir() {
                    children.push(describe_dir(&path, classifier));
                } else {
                    let media_type = classifier.classify(&path);
                    let is_text = is_textual_media_type(&media_type);
                    children.push(TreeNode::File {
                        name: entry.file_name().to_string_lossy().into_owned(),
                        media_type,
                        is_text,
                    });
                }
            }
        }
        Err(e) => {
            tracing::warn!("error reading directory {}: {}", dir.display(), e);
        }
    }
    TreeNode::Folder { name, children }
}
