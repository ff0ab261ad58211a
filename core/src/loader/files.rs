//! JSON point-set files

use super::{LoadError, LoadResult, PointSetProblem};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load a single problem from a JSON file
pub fn load_problem<P: AsRef<Path>>(path: P) -> LoadResult<PointSetProblem> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", path.display(), e)))?;

    let problem: PointSetProblem =
        serde_json::from_str(&contents).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if let Some(index) = problem.points.iter().position(|p| !p.is_finite()) {
        return Err(LoadError::InvalidFormat(format!(
            "{}: point {} is not finite",
            problem.id, index
        )));
    }

    Ok(problem)
}

/// Load every `.json` problem in a directory, sorted by file name
///
/// Files that fail to load are skipped with a warning.
pub fn load_problems<P: AsRef<Path>>(dir: P) -> LoadResult<Vec<PointSetProblem>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(LoadError::FileNotFound(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in
        fs::read_dir(dir).map_err(|e| LoadError::FileNotFound(format!("{}: {}", dir.display(), e)))?
    {
        let entry = entry.map_err(|e| LoadError::FileNotFound(e.to_string()))?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut problems = Vec::new();
    for path in paths {
        match load_problem(&path) {
            Ok(problem) => problems.push(problem),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping point-set file"),
        }
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = load_problem("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn test_not_a_directory() {
        let err = load_problems("does/not/exist").unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }
}
