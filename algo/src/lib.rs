//! Game of Life on packed bit rows, advanced in place.
//!
//! The board lives in a buffer owned by the caller: `rows` words of live cells
//! followed by three scratch words. Nothing is allocated, so the engine runs
//! the same on a host and on a microcontroller.

#![cfg_attr(not(test), no_std)]

pub mod conway;
pub mod error;
pub mod row;
pub mod rule;
pub mod topology;

pub use conway::{Conway, SCRATCH_ROWS};
pub use error::{Error, Result};
pub use row::Row;
pub use topology::Topology;
