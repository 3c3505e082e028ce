use crate::extract::extract_endpoints;
use crate::models::Endpoint;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid docs directory: {0}")]
    InvalidDocsDir(String),
    #[error("Path is not relative to the docs directory: {0}")]
    InvalidPath(PathBuf),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, docs_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(docs_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for markdown files below `docs_root`, returned relative to it and sorted
pub fn scan_markdown_files(docs_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_docs_dir(docs_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(docs_root, &mut files)?;
    files.sort();

    files
        .into_iter()
        .map(|path| {
            let relative = path
                .strip_prefix(docs_root)
                .map_err(|_| IoError::InvalidPath(path.clone()))?;
            RelativePathBuf::from_path(relative).map_err(|_| IoError::InvalidPath(path.clone()))
        })
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_docs_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocsDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Resource a doc file belongs to: the name of the directory holding it.
///
/// `apps/_create.md` belongs to `apps`. Files at the docs root have no resource.
pub fn resource_name_for(relative_path: &RelativePath) -> String {
    relative_path
        .parent()
        .and_then(RelativePath::file_name)
        .unwrap_or_default()
        .to_string()
}

/// Read one doc file and extract its endpoints
pub fn extract_file(relative_path: &RelativePath, docs_root: &Path) -> Result<Vec<Endpoint>, IoError> {
    let resource_name = resource_name_for(relative_path);
    log::debug!("Extracting {relative_path} as resource '{resource_name}'");

    let content = read_file(relative_path, docs_root)?;
    let endpoints = extract_endpoints(&resource_name, &content);

    log::debug!("Found {} endpoint(s) in {relative_path}", endpoints.len());
    Ok(endpoints)
}
