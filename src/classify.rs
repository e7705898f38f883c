//! Media-type classification for files in a described tree.
//!
//! The engine only depends on the narrow [`Classifier`] trait, so the concrete
//! detection mechanism (magic-byte sniffing, extension heuristics, an external
//! library) is swappable. [`MediaTypeClassifier`] is the bundled default: a
//! static extension table backed by content sniffing for unknown extensions.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// Maps a file path to a media-type string.
///
/// Implementations must not fail: a classifier that cannot determine a type
/// returns a generic one (`application/octet-stream`) instead of erroring.
pub trait Classifier {
    fn classify(&self, path: &Path) -> String;
}

/// `application/*` media types that still carry textual content.
const TEXTUAL_APPLICATION_TYPES: &[&str] = &[
    "inode/x-empty",
    "application/json",
    "application/javascript",
    "application/xml",
    "application/x-www-form-urlencoded",
    "application/ld+json",
    "application/vnd.api+json",
    "application/x-sh",
    "application/x-python",
    "application/x-httpd-php",
    "application/x-yaml",
    "application/x-markdown",
    "application/x-perl",
    "application/x-latex",
    "application/x-c",
    "application/x-java",
    "application/x-tcl",
    "application/x-ruby",
    "application/x-shellscript",
    "application/x-ksh",
    "application/x-bash",
    "application/x-zsh",
    "application/x-csh",
    "application/x-scala",
    "application/x-lisp",
    "application/x-haskell",
    "application/x-sql",
    "application/x-php",
    "application/x-aspx",
    "application/x-typescript",
    "application/x-jsonlines",
    "application/vnd.curl",
];

/// Whether a media type denotes textual content: every `text/*` type, plus
/// the fixed allow-list of textual `application/*` types and the empty-file
/// sentinel.
pub fn is_textual_media_type(media_type: &str) -> bool {
    media_type.starts_with("text/") || TEXTUAL_APPLICATION_TYPES.contains(&media_type)
}

/// Default classifier: known extensions map to a fixed media type, everything
/// else is sniffed with [`content_inspector`] on the first 4 KiB.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaTypeClassifier;
impl MediaTypeClassifier {
    pub fn new() -> Self {
        Self
    }
}
impl Classifier for MediaTypeClassifier {
    fn classify(&self, path: &Path) -> String {
        if fs::metadata(path).is_ok_and(|m| m.len() == 0) {
            return "inode/x-empty".to_string();
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match media_type_from_extension(&extension) {
            Some(media_type) => media_type.to_string(),
            None => sniff_media_type(path),
        }
    }
}

fn media_type_from_extension(ext: &str) -> Option<&'static str> {
    let media_type = match ext {
        "txt" | "text" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "rs" => "text/x-rust",
        "go" => "text/x-go",
        "toml" => "text/x-toml",
        "ini" | "cfg" | "conf" => "text/x-ini",
        "cpp" | "cc" | "cxx" | "hpp" => "text/x-c++",
        "kt" | "kts" => "text/x-kotlin",
        "swift" => "text/x-swift",
        "py" => "application/x-python",
        "js" | "mjs" => "application/javascript",
        "ts" => "application/x-typescript",
        "json" => "application/json",
        "jsonl" | "ndjson" => "application/x-jsonlines",
        "xml" => "application/xml",
        "yml" | "yaml" => "application/x-yaml",
        "sh" | "bash" => "application/x-shellscript",
        "zsh" => "application/x-zsh",
        "ksh" => "application/x-ksh",
        "csh" => "application/x-csh",
        "php" => "application/x-php",
        "rb" => "application/x-ruby",
        "pl" | "pm" => "application/x-perl",
        "java" => "application/x-java",
        "scala" => "application/x-scala",
        "hs" => "application/x-haskell",
        "lisp" | "el" => "application/x-lisp",
        "sql" => "application/x-sql",
        "tcl" => "application/x-tcl",
        "tex" => "application/x-latex",
        "c" | "h" => "application/x-c",
        _ => return None,
    };
    Some(media_type)
}

fn sniff_media_type(path: &Path) -> String {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("could not open {} for sniffing: {}", path.display(), e);
            return "application/octet-stream".to_string();
        }
    };
    let mut reader = BufReader::new(file);
    let mut first_chunk = Vec::with_capacity(4096);
    if let Err(e) = reader.by_ref().take(4096).read_to_end(&mut first_chunk) {
        tracing::warn!("could not read {} for sniffing: {}", path.display(), e);
        return "application/octet-stream".to_string();
    }
    if content_inspector::inspect(&first_chunk).is_binary() {
        "application/octet-stream".to_string()
    } else {
        "text/plain".to_string()
    }
}
