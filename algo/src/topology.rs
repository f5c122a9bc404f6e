/// What lies beyond the edges of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
  /// Edges connect to the opposite edge (a torus).
  Wrapped,
  /// Cells beyond the edges are permanently dead.
  Closed,
}

impl Default for Topology {
  fn default() -> Self {
    Topology::Wrapped
  }
}

impl Topology {
  /// Maps a signed index onto `[0, len)`, or `None` if the cell is dead.
  #[inline]
  pub fn resolve(self, index: isize, len: usize) -> Option<usize> {
    let len = len as isize;
    match self {
      Topology::Wrapped => Some(index.rem_euclid(len) as usize),
      Topology::Closed => {
        if index >= 0 && index < len {
          Some(index as usize)
        } else {
          None
        }
      }
    }
  }
}
