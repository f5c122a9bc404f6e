//! Turning the live rows into something to look at.

use algo::{Conway, Row};
use image::{GrayImage, ImageBuffer, Luma};
use itertools::Itertools;

/// What a presenter gets after each generation.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a, T> {
  pub rows: &'a [T],
  pub generation: u32,
  pub population: u32,
  pub staleness: u32,
}

impl<'a, T: Row> Frame<'a, T> {
  pub fn of(conway: &'a Conway<'_, T>) -> Self {
    Self {
      rows: conway.live_rows(),
      generation: conway.generation(),
      population: conway.population(),
      staleness: conway.staleness(),
    }
  }
}

pub trait Presenter<T: Row> {
  type Output;

  fn present(&mut self, frame: &Frame<'_, T>) -> Self::Output;
}

/// One line per row, column 0 first.
#[derive(Debug, Clone)]
pub struct TextPresenter {
  pub alive: char,
  pub dead: char,
  /// Prefix the board with a line of counters.
  pub header: bool,
}

impl Default for TextPresenter {
  fn default() -> Self {
    Self { alive: '#', dead: '.', header: false }
  }
}

impl<T: Row> Presenter<T> for TextPresenter {
  type Output = String;

  fn present(&mut self, frame: &Frame<'_, T>) -> String {
    let board = frame.rows.iter()
      .map(|row| {
        (0..T::BITS)
          .map(|col| if row.bit(col) { self.alive } else { self.dead })
          .collect::<String>()
      })
      .join("\n");

    if self.header {
      format!("generation {} population {} staleness {}\n{}",
        frame.generation, frame.population, frame.staleness, board)
    } else {
      board
    }
  }
}

/// A grayscale image with `scale` x `scale` pixels per cell.
#[derive(Debug, Clone, Copy)]
pub struct ImagePresenter {
  pub scale: u32,
}

impl<T: Row> Presenter<T> for ImagePresenter {
  type Output = GrayImage;

  fn present(&mut self, frame: &Frame<'_, T>) -> GrayImage {
    let scale = self.scale.max(1);
    let width = T::BITS * scale;
    let height = frame.rows.len() as u32 * scale;
    ImageBuffer::from_fn(width, height, |x, y| {
      let alive = frame.rows[(y / scale) as usize].bit(x / scale);
      Luma([if alive { 255 } else { 0 }])
    })
  }
}

/// Splits the board into 8x8 tiles for a chain of LED matrix drivers.
///
/// Tiles come row of tiles first. Byte `k` of tile `(r, c)` is byte `c` of
/// row `8 * r + k`, so each byte drives one line of a matrix. Trailing rows
/// that do not fill a whole tile are not shown.
pub fn led_blocks<T: Row>(rows: &[T]) -> Vec<[u8; 8]> {
  rows.chunks_exact(8)
    .flat_map(|tile| {
      (0..T::BITS / 8).map(move |c| {
        let mut block = [0u8; 8];
        for (k, row) in tile.iter().enumerate() {
          block[k] = row.byte(c);
        }
        block
      })
    })
    .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LedPresenter;

impl<T: Row> Presenter<T> for LedPresenter {
  type Output = Vec<[u8; 8]>;

  fn present(&mut self, frame: &Frame<'_, T>) -> Vec<[u8; 8]> {
    led_blocks(frame.rows)
  }
}
