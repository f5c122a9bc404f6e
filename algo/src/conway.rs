use log::{debug, trace};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::rule::next_cell_state;
use crate::topology::Topology;

/// Number of slots after the live rows that `advance` uses as working memory.
pub const SCRATCH_ROWS: usize = 3;

/// Game of Life over a caller-owned buffer of packed rows.
///
/// The buffer holds `rows` live rows followed by [`SCRATCH_ROWS`] scratch
/// slots. Only the live rows are meaningful between calls; the scratch slots
/// hold whatever the last `advance` left in them.
pub struct Conway<'a, T: Row> {
  state: &'a mut [T],
  rows: usize,
  topology: Topology,
  generation: u32,
  population: u32,
  staleness: u32,
  last_population: u32,
}

impl<'a, T: Row> Conway<'a, T> {
  /// Uses the first `length` slots of `buffer`, i.e. `length - 3` live rows.
  pub fn new(buffer: &'a mut [T], length: usize) -> Result<Self> {
    if length < SCRATCH_ROWS + 1 {
      return Err(Error::BufferTooSmall { length });
    }
    if length > buffer.len() {
      return Err(Error::LengthOutOfBounds { length, capacity: buffer.len() });
    }

    let rows = length - SCRATCH_ROWS;
    debug!("new board: {} rows x {} columns", rows, T::BITS);
    Ok(Self {
      state: &mut buffer[..length],
      rows,
      topology: Topology::default(),
      generation: 0,
      population: 0,
      staleness: 0,
      last_population: 0,
    })
  }

  pub fn from_slice(buffer: &'a mut [T]) -> Result<Self> {
    let length = buffer.len();
    Self::new(buffer, length)
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    T::BITS as usize
  }

  pub fn generation(&self) -> u32 {
    self.generation
  }

  /// Live cells counted while reading the previous generation, see
  /// [`Conway::advance`].
  pub fn population(&self) -> u32 {
    self.population
  }

  /// Consecutive generations whose population equalled the one before.
  pub fn staleness(&self) -> u32 {
    self.staleness
  }

  pub fn topology(&self) -> Topology {
    self.topology
  }

  pub fn set_topology(&mut self, topology: Topology) {
    if topology != self.topology {
      debug!("topology {:?} -> {:?}", self.topology, topology);
      self.topology = topology;
    }
  }

  pub fn live_rows(&self) -> &[T] {
    &self.state[..self.rows]
  }

  pub fn live_rows_mut(&mut self) -> &mut [T] {
    &mut self.state[..self.rows]
  }

  /// # Panics
  ///
  /// If `row` or `col` is off the board.
  pub fn cell(&self, row: usize, col: usize) -> bool {
    assert!(col < self.cols(), "column {} out of range", col);
    self.live_rows()[row].bit(col as u32)
  }

  /// # Panics
  ///
  /// If `row` or `col` is off the board.
  pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
    assert!(col < self.cols(), "column {} out of range", col);
    let word = &mut self.live_rows_mut()[row];
    *word = word.with_bit(col as u32, alive);
  }

  /// Zeroes the live rows and the scratch slots. Counters are kept.
  pub fn clear(&mut self) {
    for word in self.state.iter_mut() {
      *word = T::ZERO;
    }
  }

  /// Zeroes the board and all counters.
  pub fn reset(&mut self) {
    self.clear();
    self.generation = 0;
    self.population = 0;
    self.staleness = 0;
    self.last_population = 0;
  }

  /// State of the cell at `(i, j)`; indices off the board follow the topology.
  pub fn cell_state(&self, i: isize, j: isize) -> bool {
    let row = self.topology.resolve(i, self.rows);
    let col = self.topology.resolve(j, self.cols());
    match (row, col) {
      (Some(row), Some(col)) => self.state[row].bit(col as u32),
      _ => false,
    }
  }

  fn row_word(&self, i: isize) -> T {
    match self.topology.resolve(i, self.rows) {
      Some(row) => self.state[row],
      None => T::ZERO,
    }
  }

  fn column_sum(&self, i: isize, j: isize) -> u8 {
    self.cell_state(i - 1, j) as u8 +
      self.cell_state(i, j) as u8 +
      self.cell_state(i + 1, j) as u8
  }

  /// Computes the next generation in place and returns the population.
  ///
  /// The population is the number of live cells of the generation that was
  /// *read*, not of the one just written: after the first call it lags the
  /// board by one generation. Staleness is tracked on the same figure.
  ///
  /// A closed board is closed on all four edges: the first and last rows see
  /// dead rows beyond them, never the opposite edge.
  pub fn advance(&mut self) -> u32 {
    let mut population = 0;

    for i in 0..self.rows {
      let (next, alive) = self.compute_row(i);
      population += alive;
      let slot = self.scratch_slot(i);
      self.state[slot] = next;

      // Row `i - 1` was last read by row `i`. Row 0 stays in scratch because
      // the last row still reads its old value.
      if i >= 2 {
        self.commit(i - 1);
      }
    }

    self.commit(0);
    if self.rows > 1 {
      self.commit(self.rows - 1);
    }

    self.generation = self.generation.wrapping_add(1);
    self.population = population;
    if population == self.last_population {
      self.staleness = self.staleness.saturating_add(1);
    } else {
      self.last_population = population;
      self.staleness = 0;
    }
    trace!("generation {}: population {}, staleness {}",
      self.generation, population, self.staleness);

    population
  }

  /// Scratch slot holding the new value of row `i` until it is committed.
  ///
  /// Row 0 gets its own slot. The other rows alternate between two slots:
  /// row `i + 2` reuses the slot of row `i`, which has been committed by then.
  fn scratch_slot(&self, i: usize) -> usize {
    if i == 0 {
      self.rows + 2
    } else {
      self.rows + ((i - 1) & 1)
    }
  }

  fn commit(&mut self, i: usize) {
    self.state[i] = self.state[self.scratch_slot(i)];
  }

  /// New value of row `i` and the number of live cells in its old value.
  ///
  /// Keeps the three column sums of a sliding 3x3 window. Only the columns
  /// off the left and right edges go through the topology cell lookup.
  fn compute_row(&self, i: usize) -> (T, u32) {
    let cols = self.cols() as isize;
    let i = i as isize;
    let mut up = self.row_word(i - 1);
    let mut mid = self.row_word(i);
    let mut down = self.row_word(i + 1);

    let mut old = mid.low_bit();
    let mut sum_l = self.column_sum(i, -1);
    let mut sum_m = up.low_bit() as u8 + old as u8 + down.low_bit() as u8;
    let mut next = T::ZERO;
    let mut population = 0;

    for j in 0..cols {
      let (sum_r, old_r) = if j + 1 < cols {
        up = up.shr1();
        mid = mid.shr1();
        down = down.shr1();
        let old_r = mid.low_bit();
        (up.low_bit() as u8 + old_r as u8 + down.low_bit() as u8, old_r)
      } else {
        (self.column_sum(i, cols), false)
      };

      next = next.push_msb(next_cell_state(old, sum_l + sum_m + sum_r));
      population += old as u32;

      old = old_r;
      sum_l = sum_m;
      sum_m = sum_r;
    }

    (next, population)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  /// `#` is alive, anything else is dead. The first character is column 0.
  fn parse(lines: &[&str]) -> Vec<u8> {
    lines.iter()
      .map(|line| {
        line.bytes()
          .enumerate()
          .fold(0u8, |row, (col, c)| row.with_bit(col as u32, c == b'#'))
      })
      .collect()
  }

  fn board(lines: &[&str]) -> Vec<u8> {
    let mut buffer = parse(lines);
    buffer.extend_from_slice(&[0; SCRATCH_ROWS]);
    buffer
  }

  #[test]
  fn test_new_rejects_short_buffer() {
    let mut buffer = [0u16; 3];
    assert_eq!(Conway::from_slice(&mut buffer).err(),
      Some(Error::BufferTooSmall { length: 3 }));

    let mut buffer = [0u16; 5];
    assert_eq!(Conway::new(&mut buffer, 6).err(),
      Some(Error::LengthOutOfBounds { length: 6, capacity: 5 }));
  }

  #[test]
  fn test_new() {
    let mut buffer = [0u32; 11];
    let conway = Conway::new(&mut buffer, 10).unwrap();
    assert_eq!(conway.rows(), 7);
    assert_eq!(conway.cols(), 32);
    assert_eq!(conway.topology(), Topology::Wrapped);
    assert_eq!((conway.generation(), conway.population(), conway.staleness()), (0, 0, 0));
  }

  #[test]
  fn test_cell_state_wrapped() {
    let mut buffer = board(&[
      "#......#",
      "........",
      "........",
      ".#.....#",
    ]);
    let conway = Conway::from_slice(&mut buffer).unwrap();
    assert_eq!(conway.cell_state(-1, 0), conway.cell_state(3, 0));
    assert_eq!(conway.cell_state(-1, 1), conway.cell_state(3, 1));
    assert_eq!(conway.cell_state(4, 0), conway.cell_state(0, 0));
    assert!(conway.cell_state(-1, -1));
    assert!(conway.cell_state(4, 8));
    assert!(conway.cell_state(0, -1));
    assert!(!conway.cell_state(1, 8));
  }

  #[test]
  fn test_cell_state_closed() {
    let mut buffer = board(&[
      "########",
      "########",
    ]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.set_topology(Topology::Closed);
    assert!(conway.cell_state(0, 0));
    assert!(conway.cell_state(1, 7));
    assert!(!conway.cell_state(-1, 0));
    assert!(!conway.cell_state(2, 0));
    assert!(!conway.cell_state(0, -1));
    assert!(!conway.cell_state(0, 8));
    assert!(!conway.cell_state(-1, -1));
  }

  #[test]
  fn test_clear_keeps_counters() {
    let mut buffer = board(&[
      "........",
      ".##.....",
      ".##.....",
      "........",
    ]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.advance();
    conway.advance();
    conway.clear();
    conway.clear();
    assert_eq!(conway.live_rows(), &[0; 4]);
    assert_eq!(conway.generation(), 2);
    assert_eq!(conway.population(), 4);
    assert_eq!(conway.staleness(), 1);
    drop(conway);
    assert_eq!(buffer, vec![0; 7]);
  }

  #[test]
  fn test_reset() {
    let mut buffer = board(&[
      "........",
      ".###....",
      "........",
      "........",
    ]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.advance();
    conway.reset();
    assert_eq!(conway.live_rows(), &[0; 4]);
    assert_eq!((conway.generation(), conway.population(), conway.staleness()), (0, 0, 0));
  }

  #[test]
  fn test_empty_fixed_point() {
    let mut buffer = [0u64; 8];
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    for _ in 0..3 {
      assert_eq!(conway.advance(), 0);
      assert_eq!(conway.live_rows(), &[0; 5]);
    }
  }

  #[test]
  fn test_block_is_stable() {
    let lines = [
      "........",
      "........",
      "........",
      "...##...",
      "...##...",
      "........",
      "........",
      "........",
    ];
    let mut buffer = board(&lines);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();

    assert_eq!(conway.advance(), 4);
    assert_eq!(conway.staleness(), 0);
    for staleness in 1..=5 {
      assert_eq!(conway.advance(), 4);
      assert_eq!(conway.staleness(), staleness);
      assert_eq!(conway.live_rows(), &parse(&lines)[..]);
    }
    assert_eq!(conway.generation(), 6);
  }

  #[test]
  fn test_blinker() {
    let horizontal = [
      "........",
      "........",
      "..###...",
      "........",
      "........",
    ];
    let vertical = [
      "........",
      "...#....",
      "...#....",
      "...#....",
      "........",
    ];
    let mut buffer = board(&horizontal);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.advance();
    assert_eq!(conway.live_rows(), &parse(&vertical)[..]);
    conway.advance();
    assert_eq!(conway.live_rows(), &parse(&horizontal)[..]);
  }

  #[test]
  fn test_blinker_across_corner_wrapped() {
    let mut buffer = board(&[
      "#.......",
      "........",
      "........",
      "........",
      "#.......",
      "#.......",
    ]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.advance();
    assert_eq!(conway.live_rows(), &parse(&[
      "........",
      "........",
      "........",
      "........",
      "........",
      "##.....#",
    ])[..]);
  }

  #[test]
  fn test_blinker_at_edge_closed() {
    let mut buffer = board(&[
      "..###...",
      "........",
      "........",
      "........",
      "#.......",
      "#.......",
      "#.......",
    ]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.set_topology(Topology::Closed);
    assert_eq!(conway.advance(), 6);
    assert_eq!(conway.live_rows(), &parse(&[
      "...#....",
      "...#....",
      "........",
      "........",
      "........",
      "##......",
      "........",
    ])[..]);
    assert_eq!(conway.advance(), 4);
    assert_eq!(conway.advance(), 0);
    assert_eq!(conway.live_rows(), &[0; 7]);
  }

  #[test]
  fn test_closed_first_row_ignores_last_row() {
    let lines = [
      "........",
      "........",
      "........",
      "..###...",
    ];
    let mut buffer = board(&lines);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.set_topology(Topology::Closed);
    assert_eq!(conway.advance(), 3);
    assert_eq!(conway.live_rows(), &parse(&[
      "........",
      "........",
      "...#....",
      "...#....",
    ])[..]);

    let mut buffer = board(&lines);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    assert_eq!(conway.advance(), 3);
    assert_eq!(conway.live_rows(), &parse(&[
      "...#....",
      "........",
      "...#....",
      "...#....",
    ])[..]);
  }

  #[test]
  fn test_single_row() {
    let mut buffer = board(&["###....."]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    assert_eq!(conway.advance(), 3);
    assert_eq!(conway.live_rows(), &parse(&["...#...#"])[..]);

    let mut buffer = board(&["###....."]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.set_topology(Topology::Closed);
    conway.advance();
    assert_eq!(conway.live_rows(), &parse(&[".#......"])[..]);
  }

  #[test]
  fn test_two_rows() {
    let mut buffer = board(&[
      ".##.....",
      ".##.....",
    ]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.set_topology(Topology::Closed);
    conway.advance();
    assert_eq!(conway.live_rows(), &parse(&[
      ".##.....",
      ".##.....",
    ])[..]);
  }

  #[test]
  fn test_glider() {
    let mut buffer = [0u16; 19];
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    for &(row, col) in &glider {
      conway.set_cell(row + 5, col + 5, true);
    }

    for _ in 0..4 {
      assert_eq!(conway.advance(), 5);
    }

    let mut expected = [0u16; 16];
    for &(row, col) in &glider {
      expected[row + 6] |= 1 << col + 6;
    }
    assert_eq!(conway.live_rows(), &expected[..]);
  }

  #[test]
  fn test_glider_wraps_around_torus() {
    let mut buffer = [0u8; 11];
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    for &(row, col) in &glider {
      conway.set_cell(row, col, true);
    }
    let start = conway.live_rows().to_vec();

    // one full lap of an 8x8 torus
    for _ in 0..32 {
      assert_eq!(conway.advance(), 5);
    }
    assert_eq!(conway.live_rows(), &start[..]);
  }

  #[test]
  fn test_population_lags_one_generation() {
    let mut buffer = board(&[
      "........",
      "...#....",
      "........",
      "........",
    ]);
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    assert_eq!(conway.advance(), 1);
    assert_eq!(conway.live_rows(), &[0; 4]);
    assert_eq!(conway.advance(), 0);
  }

  #[test]
  #[should_panic]
  fn test_set_cell_out_of_range() {
    let mut buffer = [0u8; 5];
    let mut conway = Conway::from_slice(&mut buffer).unwrap();
    conway.set_cell(0, 8, true);
  }
}
