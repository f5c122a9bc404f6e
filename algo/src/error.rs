use thiserror::Error;

/// Construction-time contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  /// Fewer than one live row plus three scratch rows.
  #[error("buffer length {length} is too small, at least 4 slots are required")]
  BufferTooSmall { length: usize },

  #[error("length {length} exceeds the buffer capacity {capacity}")]
  LengthOutOfBounds { length: usize, capacity: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
