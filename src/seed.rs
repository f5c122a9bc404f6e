//! Ways to fill the live rows of a board before the first generation.

use algo::Row;
use log::debug;
use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use crate::error::{Error, Result};
use crate::rle::{self, Pattern};

pub trait Seeder<T: Row> {
  /// Writes the initial pattern into `rows`, which the caller has cleared.
  fn seed(&mut self, rows: &mut [T]) -> Result<()>;
}

/// Fills every row with random bits, i.e. each cell is alive with
/// probability 1/2.
pub struct RandomSeeder<R> {
  rng: R,
}

impl<R: Rng> RandomSeeder<R> {
  pub fn new(rng: R) -> Self {
    Self { rng }
  }
}

impl RandomSeeder<ChaCha8Rng> {
  pub fn from_seed(seed: u64) -> Self {
    Self::new(ChaCha8Rng::seed_from_u64(seed))
  }
}

impl<T: Row, R: Rng> Seeder<T> for RandomSeeder<R>
where
  Standard: Distribution<T>,
{
  fn seed(&mut self, rows: &mut [T]) -> Result<()> {
    for row in rows.iter_mut() {
      *row = self.rng.gen();
    }
    Ok(())
  }
}

/// Places a fixed pattern with its top left corner at `(row, col)`.
#[derive(Debug, Clone)]
pub struct PatternSeeder {
  pattern: Pattern,
  row: usize,
  col: usize,
}

impl PatternSeeder {
  pub fn new(pattern: Pattern, row: usize, col: usize) -> Self {
    Self { pattern, row, col }
  }

  pub fn from_rle(src: impl AsRef<str>, row: usize, col: usize) -> Result<Self> {
    Ok(Self::new(rle::read(src)?, row, col))
  }
}

impl<T: Row> Seeder<T> for PatternSeeder {
  fn seed(&mut self, rows: &mut [T]) -> Result<()> {
    let cols = T::BITS as usize;
    let Pattern { width, height, .. } = self.pattern;
    if self.row + height as usize > rows.len() || self.col + width as usize > cols {
      return Err(Error::DoesNotFit {
        width,
        height,
        row: self.row,
        col: self.col,
        rows: rows.len(),
        cols,
      });
    }

    for &(y, x) in &self.pattern.cells {
      let word = &mut rows[self.row + y as usize];
      *word = word.with_bit((self.col + x as usize) as u32, true);
    }
    debug!("placed {} cells at ({}, {})", self.pattern.cells.len(), self.row, self.col);
    Ok(())
  }
}
