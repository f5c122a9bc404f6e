use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Engine(#[from] algo::Error),

  #[error("invalid RLE header {0:?}")]
  InvalidHeader(String),

  #[error("unsupported rule {0:?}, only B3/S23 is supported")]
  UnsupportedRule(String),

  #[error("unexpected character {0:?} in RLE data")]
  UnexpectedChar(char),

  #[error("RLE data ends without '!'")]
  UnexpectedEof,

  #[error("cell ({row}, {col}) lies outside the {width}x{height} box of the header")]
  OutsideHeader { row: u32, col: u32, width: u32, height: u32 },

  /// The pattern does not fit on the board at the requested offset.
  #[error("{width}x{height} pattern at ({row}, {col}) does not fit a {rows}x{cols} board")]
  DoesNotFit {
    width: u32,
    height: u32,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
  },

  #[error(transparent)]
  Regex(#[from] regex::Error),

  #[error(transparent)]
  Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
