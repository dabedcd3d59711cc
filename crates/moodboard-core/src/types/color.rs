//! Color swatches and hex color values

use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, BoardResult};

/// A 24-bit color written as `#RRGGBB`
///
/// Always displays in upper case, e.g. `#0EA5E9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Build a color from its channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color literal at compile time.
    ///
    /// Intended for `const` tables: a malformed literal stops the build
    /// instead of reaching runtime. Use [`HexColor::parse`] for anything
    /// that comes from outside the binary.
    pub const fn from_literal(s: &'static str) -> Self {
        match Self::parse_bytes(s.as_bytes()) {
            Some(color) => color,
            None => panic!("hex color literal must be `#` followed by six hex digits"),
        }
    }

    /// Parse `#RRGGBB` (either case)
    pub fn parse(s: &str) -> BoardResult<Self> {
        Self::parse_bytes(s.as_bytes()).ok_or_else(|| BoardError::InvalidHex(s.to_string()))
    }

    const fn parse_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != 7 || bytes[0] != b'#' {
            return None;
        }
        let r = match channel(bytes[1], bytes[2]) {
            Some(v) => v,
            None => return None,
        };
        let g = match channel(bytes[3], bytes[4]) {
            Some(v) => v,
            None => return None,
        };
        let b = match channel(bytes[5], bytes[6]) {
            Some(v) => v,
            None => return None,
        };
        Some(Self { r, g, b })
    }
}

const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

const fn channel(hi: u8, lo: u8) -> Option<u8> {
    match (nibble(hi), nibble(lo)) {
        (Some(h), Some(l)) => Some((h << 4) | l),
        _ => None,
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A labelled solid-color sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch {
    /// Short label, also the render key
    pub name: &'static str,
    pub hex: HexColor,
    /// Short mood phrase shown under the hex code
    pub description: &'static str,
}

impl ColorSwatch {
    pub const fn new(name: &'static str, hex: &'static str, description: &'static str) -> Self {
        Self {
            name,
            hex: HexColor::from_literal(hex),
            description,
        }
    }
}
