//! Parallel file processing.
//!
//! Runs a per-file processor over several files on the rayon thread pool and
//! returns the results in the same order as the input paths, so callers can
//! combine them deterministically.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Result of processing a single file
#[derive(Debug)]
pub struct FileProcessResult<T> {
    pub file_path: PathBuf,
    pub data: T,
}

/// Process `files` concurrently with `processor`.
///
/// Fails on the first processor error, with the failing path attached as
/// context. An empty file list is an error.
pub fn process_files_parallel<P, T, F>(files: &[P], processor: F) -> Result<Vec<FileProcessResult<T>>>
where
    P: AsRef<Path> + Sync,
    T: Send,
    F: Fn(&Path) -> Result<T> + Send + Sync,
{
    if files.is_empty() {
        return Err(anyhow::anyhow!("No files provided for processing"));
    }

    tracing::debug!(files = files.len(), "processing files in parallel");

    files
        .par_iter()
        .map(|file_path| -> Result<FileProcessResult<T>> {
            let file_path = file_path.as_ref();
            let data = processor(file_path)
                .with_context(|| format!("Failed to process file: {}", file_path.display()))?;

            tracing::debug!(path = %file_path.display(), "file processed");

            Ok(FileProcessResult {
                file_path: file_path.to_path_buf(),
                data,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_results_keep_input_order() {
        let mut files = Vec::new();
        for i in 0..8 {
            let mut temp = NamedTempFile::new().unwrap();
            write!(temp, "{}", "x".repeat(i)).unwrap();
            temp.flush().unwrap();
            files.push(temp);
        }
        let paths: Vec<PathBuf> = files.iter().map(|f| f.path().to_path_buf()).collect();

        let results =
            process_files_parallel(&paths, |p| Ok(std::fs::read_to_string(p)?.len())).unwrap();

        let lengths: Vec<usize> = results.iter().map(|r| r.data).collect();
        assert_eq!(lengths, (0..8).collect::<Vec<_>>());
        assert_eq!(results[3].file_path, paths[3]);
    }

    #[test]
    fn test_empty_input() {
        let paths: Vec<PathBuf> = Vec::new();
        assert!(process_files_parallel(&paths, |_| Ok(())).is_err());
    }

    #[test]
    fn test_error_names_file() {
        let paths = vec![PathBuf::from("/nonexistent/a.csv")];
        let err = process_files_parallel(&paths, |p| Ok(std::fs::read_to_string(p)?)).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/a.csv"));
    }
}
