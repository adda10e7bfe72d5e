//! Sparse simulated memory
//!
//! Memory is a lookup table from address to value, not a byte array. No
//! machine operation ever writes to it; it is seeded from outside — by a
//! test harness calling [`Memory::store`] directly, or by the binary loading
//! a memory-image file through [`parse_memory_image`].
//!
//! A load from an unseeded address yields 0 rather than failing, which keeps
//! the `load` operation total: the learner can probe any address and always
//! get an answer.
//!
//! # Image format
//!
//! One cell per line, `address value`, decimal or `0x`-prefixed hex. Blank
//! lines and `#` comments are ignored:
//!
//! ```text
//! # string table base
//! 0x1000 42
//! 0x1004 100
//! ```

use rustc_hash::FxHashMap;
use std::fmt;

/// Sparse address → value table
#[derive(Debug, Clone, Default)]
pub struct Memory {
    cells: FxHashMap<i64, i64>,
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    /// Read the cell at `address`, 0 if unseeded
    pub fn load(&self, address: i64) -> i64 {
        self.cells.get(&address).copied().unwrap_or(0)
    }

    /// Seed the cell at `address`
    pub fn store(&mut self, address: i64, value: i64) {
        self.cells.insert(address, value);
    }

    /// Number of seeded cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cells are seeded
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Seeded cells sorted by address (for display)
    pub fn cells(&self) -> Vec<(i64, i64)> {
        let mut cells: Vec<_> = self.cells.iter().map(|(a, v)| (*a, *v)).collect();
        cells.sort_by_key(|(address, _)| *address);
        cells
    }
}

impl FromIterator<(i64, i64)> for Memory {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        Memory {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Errors produced while parsing a memory-image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// A line did not split into exactly `address value`
    MalformedLine { line: usize, text: String },
    /// A field was not a decimal or `0x` hex integer
    BadNumber { line: usize, field: String },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::MalformedLine { line, text } => {
                write!(f, "line {}: expected 'address value', got '{}'", line, text)
            }
            ImageError::BadNumber { line, field } => {
                write!(f, "line {}: '{}' is not a number", line, field)
            }
        }
    }
}

impl std::error::Error for ImageError {}

/// Parse a decimal or `0x`-prefixed hex integer
pub fn parse_int(field: &str) -> Option<i64> {
    if let Some(hex) = field.strip_prefix("0x").or_else(|| field.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else {
        field.parse().ok()
    }
}

/// Parse a memory-image file into a seeded [`Memory`]
pub fn parse_memory_image(source: &str) -> Result<Memory, ImageError> {
    let mut memory = Memory::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let mut fields = text.split_whitespace();
        let (address, value) = match (fields.next(), fields.next(), fields.next()) {
            (Some(address), Some(value), None) => (address, value),
            _ => {
                return Err(ImageError::MalformedLine {
                    line,
                    text: text.to_string(),
                })
            }
        };

        let address = parse_int(address).ok_or_else(|| ImageError::BadNumber {
            line,
            field: address.to_string(),
        })?;
        let value = parse_int(value).ok_or_else(|| ImageError::BadNumber {
            line,
            field: value.to_string(),
        })?;
        memory.store(address, value);
    }
    Ok(memory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_address_loads_zero() {
        let memory = Memory::new();
        assert_eq!(memory.load(0x1000), 0);
    }

    #[test]
    fn parses_hex_and_decimal() {
        let memory = parse_memory_image("0x1000 42\n4100 0x64\n").unwrap();
        assert_eq!(memory.load(0x1000), 42);
        assert_eq!(memory.load(4100), 100);
    }

    #[test]
    fn skips_comments_and_blanks() {
        let memory = parse_memory_image("# header\n\n0x10 1 # trailing\n").unwrap();
        assert_eq!(memory.len(), 1);
        assert_eq!(memory.load(0x10), 1);
    }

    #[test]
    fn rejects_malformed_line() {
        let err = parse_memory_image("0x1000\n").unwrap_err();
        assert_eq!(
            err,
            ImageError::MalformedLine {
                line: 1,
                text: "0x1000".to_string()
            }
        );
    }

    #[test]
    fn rejects_bad_number_with_line() {
        let err = parse_memory_image("0x1000 42\nbase ten\n").unwrap_err();
        assert_eq!(
            err,
            ImageError::BadNumber {
                line: 2,
                field: "base".to_string()
            }
        );
    }
}
