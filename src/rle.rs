use regex::Regex;
use crate::error::{Error, Result};

/// A pattern decoded from RLE, as `(row, col)` pairs of live cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
  pub width: u32,
  pub height: u32,
  pub cells: Vec<(u32, u32)>,
}

/// Read a Life pattern from a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn read(src: impl AsRef<str>) -> Result<Pattern> {
  let header_re = Regex::new(
    r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)\s*(?:,\s*rule\s*=\s*(\S+)\s*)?$")?;

  let mut lines = src.as_ref()
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with('#'));

  let header = lines.next().ok_or(Error::UnexpectedEof)?;
  let caps = header_re.captures(header)
    .ok_or_else(|| Error::InvalidHeader(header.to_owned()))?;
  let width = caps[1].parse()
    .map_err(|_| Error::InvalidHeader(header.to_owned()))?;
  let height = caps[2].parse()
    .map_err(|_| Error::InvalidHeader(header.to_owned()))?;
  if let Some(rule) = caps.get(3) {
    let rule = rule.as_str();
    if !rule.eq_ignore_ascii_case("B3/S23") && rule != "23/3" {
      return Err(Error::UnsupportedRule(rule.to_owned()));
    }
  }

  let mut cells = vec![];
  let mut x = 0u32;
  let mut y = 0u32;
  let mut num: Option<u32> = None;
  for c in lines.flat_map(str::chars) {
    if let Some(d) = c.to_digit(10) {
      num = Some(num.unwrap_or(0).saturating_mul(10).saturating_add(d));
      continue;
    }

    let n = num.take().unwrap_or(1);
    let outside = |row: u32, col: u32| Error::OutsideHeader { row, col, width, height };
    match c {
      'b' => {
        x = x.checked_add(n).ok_or_else(|| outside(y, u32::MAX))?;
      }
      'o' if n == 0 => {}
      'o' => {
        let end = x.checked_add(n)
          .filter(|&end| end <= width && y < height)
          .ok_or_else(|| outside(y, x.saturating_add(n - 1)))?;
        cells.extend((x..end).map(|col| (y, col)));
        x = end;
      }
      '$' => {
        x = 0;
        y = y.checked_add(n).ok_or_else(|| outside(u32::MAX, 0))?;
      }
      '!' => {
        return Ok(Pattern { width, height, cells });
      }
      c if c.is_whitespace() => {}
      c => {
        return Err(Error::UnexpectedChar(c));
      }
    }
  }

  Err(Error::UnexpectedEof)
}
