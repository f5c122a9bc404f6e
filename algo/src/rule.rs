/// Next state of a cell under B3/S23.
///
/// `live_cells` is the number of live cells in the whole 3x3 square,
/// **including the cell itself**. A count of 3 is either a birth (dead cell,
/// 3 neighbors) or a survival (live cell, 2 neighbors); a count of 4 keeps the
/// cell as it was (live cell with 3 neighbors survives, dead cell with 4 stays
/// dead).
#[inline]
pub const fn next_cell_state(old_state: bool, live_cells: u8) -> bool {
  match live_cells {
    3 => true,
    4 => old_state,
    _ => false,
  }
}
