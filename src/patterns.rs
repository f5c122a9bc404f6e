//! A few well-known patterns in RLE.

pub const BLOCK: &str = "x = 2, y = 2, rule = B3/S23\n2o$2o!\n";

pub const BLINKER: &str = "x = 3, y = 1, rule = B3/S23\n3o!\n";

pub const GLIDER: &str = "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";

pub const R_PENTOMINO: &str = "x = 3, y = 3, rule = B3/S23\nb2o$2o$bo!\n";

pub const PATTERNS: &[(&str, &str)] = &[
  ("block", BLOCK),
  ("blinker", BLINKER),
  ("glider", GLIDER),
  ("r-pentomino", R_PENTOMINO),
];

pub fn find(name: &str) -> Option<&'static str> {
  PATTERNS.iter()
    .find(|(n, _)| n.eq_ignore_ascii_case(name))
    .map(|&(_, rle)| rle)
}
