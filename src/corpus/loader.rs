use crate::corpus::{segment::segment_sentences, types::Corpus};
use glob::glob;
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Why a corpus could not be loaded. The previous corpus stays in place.
#[derive(Debug)]
pub enum LoadError {
    /// No path was supplied at all.
    NoPath,
    /// A glob pattern could not be parsed.
    BadPattern { pattern: String, reason: String },
    /// A file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// A file is larger than the configured limit.
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    /// The files were readable but held no sentences.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            LoadError::NoPath => write!(f, "no file selected"),
            LoadError::BadPattern { pattern, reason } => {
                write!(f, "invalid pattern {pattern}: {reason}")
            }
            LoadError::Read { path, source } => write!(f, "{}: {}", path.display(), source),
            LoadError::TooLarge { path, size, limit } => write!(
                f,
                "{} is {} bytes, exceeds {} bytes",
                path.display(),
                size,
                limit
            ),
            LoadError::Empty => write!(f, "the selected file is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Expands globs; an argument matching nothing is kept as a literal path so
/// the read step reports it as missing.
pub fn expand_paths(paths: &[String]) -> Result<Vec<PathBuf>, LoadError> {
    let mut expanded = Vec::new();
    for p in paths {
        let pattern = p.replace('\\', "/");
        let matches = glob(&pattern).map_err(|e| LoadError::BadPattern {
            pattern: pattern.clone(),
            reason: e.msg.to_string(),
        })?;
        let mut found: Vec<PathBuf> = matches.filter_map(Result::ok).collect();
        if found.is_empty() {
            expanded.push(PathBuf::from(p));
        } else {
            found.sort();
            expanded.extend(found);
        }
    }
    expanded.dedup();
    Ok(expanded)
}

/// Reads one file permissively: invalid UTF-8 is replaced, not rejected.
pub fn read_document(
    path: &Path,
    max_size: u64,
) -> Result<String, LoadError> {
    let read_err = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(path).map_err(read_err)?;
    if metadata.is_dir() {
        return Err(read_err(io::Error::other("is a directory")));
    }
    if metadata.len() > max_size {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: max_size,
        });
    }
    let bytes = fs::read(path).map_err(read_err)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Loads every file matched by `paths`, in order, as one document.
pub fn load_corpus(
    paths: &[String],
    max_size: u64,
) -> Result<Corpus, LoadError> {
    if paths.iter().all(|p| p.trim().is_empty()) {
        return Err(LoadError::NoPath);
    }
    let files = expand_paths(paths)?;
    let mut document = String::new();
    for file in &files {
        let text = read_document(file, max_size)?;
        debug!("read {} bytes from {}", text.len(), file.display());
        document.push_str(&text);
        // Files never run into each other's paragraphs.
        document.push_str("\n\n");
    }
    let sentences = segment_sentences(&document);
    if sentences.is_empty() {
        return Err(LoadError::Empty);
    }
    let sources = files
        .iter()
        .map(|f| dunce::canonicalize(f).unwrap_or_else(|_| f.clone()))
        .collect();
    info!("loaded {} sentences from {} file(s)", sentences.len(), files.len());
    Ok(Corpus::new(sentences, sources))
}
