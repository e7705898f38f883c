use crate::document::{FileBlock, RenderedDocument};
use crate::error::FoldError;
use crate::filter::{FilterMatcher, FilterSpec};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => Some(entry.path().to_path_buf()),
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                None
            }
        })
    }
}
fn read_file_content(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => decode_latin1(&e.into_bytes()),
        },
        Err(e) => {
            tracing::warn!("error reading file {}: {}", path.display(), e);
            format!("Error: Could not read file content ({})", e)
        }
    }
}
// Latin-1 maps every byte to the code point of the same value, so this
// decode cannot fail.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walks `root` depth-first with entries at each level in lexicographically
/// sorted order, and assembles one [`FileBlock`] per file passing `spec`.
///
/// Unreadable subdirectories are logged and contribute no files. A file that
/// passes the filters but cannot be read is still represented, with a literal
/// error marker as its content, so gaps are visible to the reader.
///
/// # Errors
///
/// Returns [`FoldError::RootNotFound`] if `root` does not exist or is not a
/// directory, and [`FoldError::InvalidRegex`] if a regex field of `spec`
/// fails to compile. All other failures degrade the output instead.
pub fn assemble(root: &Path, spec: &FilterSpec) -> Result<RenderedDocument, FoldError> {
    if !root.is_dir() {
        return Err(FoldError::RootNotFound(root.to_path_buf()));
    }
    let matcher = FilterMatcher::new(spec)?;
    tracing::debug!("assembling document from {}", root.display());
    let mut blocks = Vec::new();
    for path in Walker::new(root).into_iter() {
        if !path.is_file() {
            continue;
        }
        let relative = relative_path(root, &path);
        if !matcher.matches(&relative) {
            continue;
        }
        let content = read_file_content(&path);
        blocks.push(FileBlock {
            path: relative,
            content,
        });
    }
    Ok(RenderedDocument { blocks })
}
