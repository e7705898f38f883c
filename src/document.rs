//! Rendered document types and formatting.
//!
//! A [`RenderedDocument`] is an ordered sequence of per-file blocks; rendering
//! is a pure function of that sequence, so an unchanged tree and spec always
//! produce byte-identical output.

use crate::error::FoldError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One file's contribution to the document: its root-relative path and its
/// content as read at assembly time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBlock {
    pub path: String,
    pub content: String,
}

/// The assembled document, one block per included file in visitation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub blocks: Vec<FileBlock>,
}
impl RenderedDocument {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
    /// Renders all blocks into the final markdown string.
    ///
    /// Each block is a `----` separator line, the backticked relative path,
    /// then the content inside an untagged triple-backtick fence. Content is
    /// emitted verbatim; embedded triple-backtick sequences are not escaped,
    /// so such content breaks the fence for markdown viewers (the raw text
    /// remains intact).
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(1024);
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str("----\n`");
            out.push_str(&block.path);
            out.push_str("`\n```\n");
            out.push_str(&block.content);
            out.push_str("\n```");
        }
        out
    }
    /// Renders the document and writes it to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), FoldError> {
        fs::write(&path, self.render()).map_err(|e| FoldError::io(path.as_ref(), e))?;
        Ok(())
    }
}
