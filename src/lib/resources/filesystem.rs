//! Module defining and implementing resource loaders for files in a directory.

use std::fmt;
use std::fs::File;
use std::iter;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob::{self, MatchOptions};

use super::Loader;


/// Loader for file paths from given directory.
///
/// The resources here are just file *paths* (std::path::PathBuf),
/// and no substantial "loading" is performing (only path resolution).
/// Resource names are matched against file names case-insensitively.
///
/// This isn't particularly useful on its own, but can be wrapped around
/// to make more interesting loaders.
#[derive(Clone)]
pub struct PathLoader {
    directory: PathBuf,
    predicate: Arc<dyn Fn(&Path) -> bool + Send + Sync>,
}

impl PathLoader {
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        Self::with_predicate(directory, |_| true)
    }

    #[inline]
    pub fn for_extension<D: AsRef<Path>, S>(directory: D, extension: S) -> Self
        where S: ToString
    {
        Self::for_extensions(directory, iter::once(extension))
    }

    /// Create a loader which only gives out paths to files
    /// that have one of the extensions given.
    pub fn for_extensions<D: AsRef<Path>, I, S>(directory: D, extensions: I) -> Self
        where I: IntoIterator<Item=S>, S: ToString
    {
        Self::with_predicate(directory, {
            let extensions: Vec<_> = extensions.into_iter()
                .map(|e| e.to_string()).map(|e| e.trim().to_lowercase())
                .collect();
            move |path| {
                let ext = path.extension().and_then(|e| e.to_str())
                    .map(|s| s.trim().to_lowercase());
                extensions.iter().any(|e| Some(e) == ext.as_ref())
            }
        })
    }

    pub fn with_predicate<D, P>(directory: D, predicate: P) -> Self
        where D: AsRef<Path>, P: Fn(&Path) -> bool + Send + Sync + 'static
    {
        PathLoader{
            directory: directory.as_ref().to_owned(),
            predicate: Arc::new(predicate),
        }
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Loader for PathLoader {
    type Item = PathBuf;
    type Err = io::Error;

    /// "Load" a path "resource" from the loader's directory.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        let file_part = format!("{}.*", glob::Pattern::escape(name));
        let pattern = format!("{}", self.directory.join(file_part).display());
        trace!("Globbing with {}", pattern);

        let options = MatchOptions{case_sensitive: false, ..MatchOptions::new()};
        let glob_iter = glob::glob_with(&pattern, options).map_err(|e| {
            error!("Failed to glob over files with {}: {}", pattern, e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;
        let matches: Vec<_> = glob_iter
            .filter_map(|entry| entry.map_err(|e| {
                warn!("Error while globbing for resource `{}`: {}", name, e);
            }).ok())
            .filter(|f| (self.predicate)(f))
            .collect();

        let count = matches.len();
        match matches.into_iter().next() {
            None => Err(io::Error::new(io::ErrorKind::NotFound,
                format!("resource `{}` not found in {}", name, self.directory.display()))),
            Some(path) if count == 1 => Ok(path),
            Some(_) => Err(io::Error::new(io::ErrorKind::InvalidInput,
                format!("ambiguous resource name `{}` matching {} files in {}",
                    name, count, self.directory.display()))),
        }
    }
}

impl fmt::Debug for PathLoader {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("PathLoader")
            .field("directory", &self.directory)
            .finish()
    }
}


/// Wrapper around PathLoader that loads the entire content of the files.
#[derive(Clone, Debug)]
pub struct BytesLoader {
    inner: PathLoader,
}

impl BytesLoader {
    #[inline]
    pub fn new(inner: PathLoader) -> Self {
        BytesLoader{inner}
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        self.inner.directory()
    }
}
impl From<PathLoader> for BytesLoader {
    fn from(input: PathLoader) -> Self {
        Self::new(input)
    }
}

impl Loader for BytesLoader {
    type Item = Vec<u8>;
    type Err = io::Error;

    /// Load a file resource as its byte content.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        let path = self.inner.load(name)?;
        trace!("Reading resource `{}` from {}", name, path.display());
        read_file(&path)
    }
}


/// Read the entire content of given file.
pub(super) fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;

    let mut bytes = match file.metadata() {
        Ok(stat) => Vec::with_capacity(stat.len() as usize),
        Err(e) => {
            warn!("Failed to stat file {} to obtain its size: {}", path.display(), e);
            Vec::new()
        },
    };

    let mut reader = BufReader::new(file);
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}


#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use spectral::prelude::*;

    use crate::resources::Loader;
    use crate::testing::temp_dir;
    use super::{BytesLoader, PathLoader};

    #[test]
    fn path_found_case_insensitively() {
        let dir = temp_dir("path-case");
        fs::write(dir.join("Impact.ttf"), b"font").unwrap();

        let loader = PathLoader::for_extension(&dir, "ttf");
        assert_that!(loader.load("impact")).is_ok().is_equal_to(dir.join("Impact.ttf"));
    }

    #[test]
    fn path_filtered_by_extension() {
        let dir = temp_dir("path-ext");
        fs::write(dir.join("impact.txt"), b"not a font").unwrap();

        let loader = PathLoader::for_extension(&dir, "ttf");
        let err = loader.load("impact").unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn path_ambiguous() {
        let dir = temp_dir("path-ambiguous");
        fs::write(dir.join("impact.ttf"), b"").unwrap();
        fs::write(dir.join("impact.otf"), b"").unwrap();

        let loader = PathLoader::new(&dir);
        let err = loader.load("impact").unwrap_err();
        assert_eq!(io::ErrorKind::InvalidInput, err.kind());
    }

    #[test]
    fn bytes_loaded() {
        let dir = temp_dir("bytes");
        fs::write(dir.join("impact-bold.ttf"), b"\x00\x01\x02").unwrap();

        let loader = BytesLoader::new(PathLoader::for_extension(&dir, "ttf"));
        assert_that!(loader.load("impact-bold")).is_ok().is_equal_to(vec![0, 1, 2]);
        assert_that!(loader.load("impact")).is_err();
    }
}
