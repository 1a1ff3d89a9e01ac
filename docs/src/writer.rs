//! Writes generated documents and the stylesheet that goes with them.

use std::fs;
use std::path::{Path, PathBuf};

use ontdoc_model::OutputFormat;

use crate::error::{Error, Result};
use crate::templates::html::{stylesheet, STYLESHEET_FILE};

/// Writes a document to the given path, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created or the file cannot be written.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `ontdoc.css` into `dir` and returns its path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_stylesheet(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(STYLESHEET_FILE);
    write_document(&path, stylesheet())?;
    Ok(path)
}

/// Output path for `source` rendered as `format` inside `out_dir`:
/// the source file stem with the format's extension.
#[must_use]
pub fn output_path(out_dir: &Path, source: &Path, format: OutputFormat) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("ontology"));
    out_dir.join(format!("{stem}.{}", format.as_str()))
}

/// Like [`output_path`], but `source`'s directory relative to `root` is
/// repeated under `out_dir`, so same-named sources in different
/// subdirectories do not collide.
#[must_use]
pub fn mirrored_output_path(
    out_dir: &Path,
    root: &Path,
    source: &Path,
    format: OutputFormat,
) -> PathBuf {
    let nested = source
        .strip_prefix(root)
        .ok()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    output_path(&out_dir.join(nested), source, format)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_extension() {
        assert_eq!(
            output_path(Path::new("out"), Path::new("src/onto.ttl"), OutputFormat::AsciiDoc),
            PathBuf::from("out/onto.adoc")
        );
    }

    #[test]
    fn mirrored_paths_keep_subdirectories_apart() {
        let root = Path::new("onts");
        let a = mirrored_output_path(Path::new("out"), root, Path::new("onts/a/core.ttl"), OutputFormat::Html);
        let b = mirrored_output_path(Path::new("out"), root, Path::new("onts/b/core.ttl"), OutputFormat::Html);
        assert_eq!(a, PathBuf::from("out/a/core.html"));
        assert_eq!(b, PathBuf::from("out/b/core.html"));
        assert_eq!(
            mirrored_output_path(Path::new("out"), root, Path::new("onts/top.nt"), OutputFormat::Markdown),
            PathBuf::from("out/top.md")
        );
    }

    #[test]
    fn writes_nested_documents() {
        let dir = std::env::temp_dir().join(format!("ontdoc-writer-{}", std::process::id()));
        let path = dir.join("a").join("b.md");
        write_document(&path, "# x\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# x\n");
        let css = write_stylesheet(&dir).unwrap();
        assert!(fs::read_to_string(css).unwrap().contains(".entity"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
