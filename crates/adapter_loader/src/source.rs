//! Point sources.
//!
//! A [`PointSource`] yields a finite, ordered [`PointSet`]. Sources backed by
//! files can be loaded again; stream-backed sources are drained by the first
//! load.

use crate::error::LoadError;
use crate::parser::parse_points;
use interp_core::math::interpolators::PointSet;
use interp_core::types::Scalar;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Producer of sample points.
pub trait PointSource {
    /// Read every available point, in source order.
    fn load<T: Scalar + FromStr>(&mut self) -> Result<PointSet<T>, LoadError>;
}

/// Points parsed from any buffered reader (stdin, sockets, in-memory text).
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Give the reader back.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> PointSource for ReaderSource<R> {
    fn load<T: Scalar + FromStr>(&mut self) -> Result<PointSet<T>, LoadError> {
        let points = parse_points(&mut self.reader)?;
        debug!(points = points.len(), "Loaded sample points from stream");
        Ok(points)
    }
}

/// Points parsed from a text file. Each load re-reads the file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PointSource for FileSource {
    fn load<T: Scalar + FromStr>(&mut self) -> Result<PointSet<T>, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::FileIo {
            path: self.path.clone(),
            source,
        })?;
        let points = parse_points(BufReader::new(file))?;
        debug!(
            path = %self.path.display(),
            points = points.len(),
            "Loaded sample points from file"
        );
        Ok(points)
    }
}
