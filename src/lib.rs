//! Host side of the packed-row Game of Life: seeding, presenting and the run
//! loop around the [`algo`] engine.

pub mod driver;
pub mod error;
pub mod patterns;
pub mod present;
pub mod rle;
pub mod seed;

pub use algo;
pub use error::{Error, Result};
