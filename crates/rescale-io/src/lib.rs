//! rescale-io - Raster file I/O for the rescale workspace
//!
//! Two on-disk forms of the same thing, an 8-bit grayscale raster:
//!
//! - **raw**: headerless row-major sample bytes; the dimensions travel
//!   out of band (command line, protocol, convention)
//! - **PGM (P5)**: the binary Portable GrayMap form of the identical
//!   payload, with dimensions and maxval in a short ASCII header
//!
//! Each format has path-level convenience functions plus
//! reader/writer-generic versions for in-memory or streaming use.

mod error;
mod pgm;
mod raw;

pub use error::{IoError, IoResult};
pub use pgm::{read_pgm, read_pgm_from, write_pgm, write_pgm_to};
pub use raw::{read_raw, read_raw_from, write_raw, write_raw_to};
