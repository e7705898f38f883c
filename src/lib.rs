//! # Sourcefold
//!
//! `sourcefold` describes a directory tree (with per-file media-type and
//! text/binary annotations) and folds a filtered selection of its files into
//! a single markdown document, one fenced block per file.
//!
//! The two operations share a root but run independently: [`describe`] builds
//! the structural tree a caller uses to choose filters, and [`assemble`]
//! re-walks the root applying a [`FilterSpec`] and renders the matching files
//! in deterministic depth-first sorted order.
//!
//! # Example
//!
//! ```no_run
//! use sourcefold::{FilterSpecBuilder, MediaTypeClassifier, Workspace};
//!
//! let workspace = Workspace::generate("/tmp/extracted");
//!
//! let tree = workspace.describe(&MediaTypeClassifier::new()).expect("describe failed");
//! println!("root has {} entries", match &tree {
//!     sourcefold::TreeNode::Folder { children, .. } => children.len(),
//!     _ => 0,
//! });
//!
//! let spec = FilterSpecBuilder::new()
//!     .include_extensions(vec!["rs".into(), "toml".into()])
//!     .exclude_folders(vec!["target".into()])
//!     .build();
//! let document = workspace.assemble(&spec).expect("assemble failed");
//! println!("{}", document.render());
//! ```

mod classify;
mod document;
mod engine;
mod error;
mod filter;
mod tree;
mod workspace;

pub use classify::{Classifier, MediaTypeClassifier, is_textual_media_type};
pub use document::{FileBlock, RenderedDocument};
pub use engine::assemble;
pub use error::FoldError;
pub use filter::{FilterSpec, FilterSpecBuilder};
pub use tree::{TreeNode, describe};
pub use workspace::Workspace;
