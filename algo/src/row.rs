use core::fmt::Debug;

/// A packed row of cells.
///
/// # Bit-cell correspondence
///
/// ```ignored
/// column  0    1    2   ...  BITS-1
/// bit    [00] [01] [02] ... [BITS-1]
/// ```
///
/// I.e. bit 0 (the lowest bit) is the leftmost cell and the highest bit is the
/// rightmost cell. The number of columns is fixed by the word type.
pub trait Row: Copy + Eq + Default + Debug {
  const BITS: u32;
  const ZERO: Self;

  fn bit(self, col: u32) -> bool;

  #[must_use]
  fn with_bit(self, col: u32, alive: bool) -> Self;

  fn low_bit(self) -> bool;

  /// Drops the leftmost column.
  #[must_use]
  fn shr1(self) -> Self;

  /// Shifts every cell one column to the left and puts `alive` in the
  /// rightmost column.
  #[must_use]
  fn push_msb(self, alive: bool) -> Self;

  fn count_ones(self) -> u32;

  /// `k`-th byte, least significant first.
  fn byte(self, k: u32) -> u8;
}

macro_rules! impl_row {
  ($($t:ty),*) => {
    $(
      impl Row for $t {
        const BITS: u32 = <$t>::BITS;
        const ZERO: Self = 0;

        #[inline]
        fn bit(self, col: u32) -> bool {
          self >> col & 1 != 0
        }

        #[inline]
        fn with_bit(self, col: u32, alive: bool) -> Self {
          let mask = 1 << col;
          if alive {
            self | mask
          } else {
            self & !mask
          }
        }

        #[inline]
        fn low_bit(self) -> bool {
          self & 1 != 0
        }

        #[inline]
        fn shr1(self) -> Self {
          self >> 1
        }

        #[inline]
        fn push_msb(self, alive: bool) -> Self {
          self >> 1 | (alive as $t) << (<$t>::BITS - 1)
        }

        #[inline]
        fn count_ones(self) -> u32 {
          <$t>::count_ones(self)
        }

        #[inline]
        fn byte(self, k: u32) -> u8 {
          (self >> 8 * k) as u8
        }
      }
    )*
  };
}

impl_row!(u8, u16, u32, u64);
