//! # adapter_loader: Sample Point Data Sources
//!
//! ## Adapter Layer Role
//!
//! Turns external text data into [`PointSet`](interp_core::math::interpolators::PointSet)s
//! for the interpolation kernel. The kernel never performs I/O itself.
//!
//! ## Input Format
//!
//! Whitespace-separated numeric tokens, consumed pairwise as `x y`. Line
//! breaks carry no meaning, and anything after `#` on a line is a comment:
//!
//! ```text
//! # year  accidents
//! 2008    1520
//! 2009    1487
//! 2010 1391 2011 1402
//! ```
//!
//! ## Usage Examples
//!
//! ```rust
//! use adapter_loader::{PointSource, ReaderSource};
//!
//! let text = "0 1\n1 2\n2 5\n";
//! let points = ReaderSource::new(text.as_bytes()).load::<f64>().unwrap();
//! assert_eq!(points.len(), 3);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod parser;
pub mod source;

pub use error::LoadError;
pub use parser::parse_points;
pub use source::{FileSource, PointSource, ReaderSource};
