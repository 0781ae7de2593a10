//! Sticker color tags
//!
//! The six recognised sticker colors plus the reserved `Unknown` tag that
//! classification returns when no calibrated range matches.

use std::fmt;

use crate::cube::FaceId;

/// Single-character sticker color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorTag {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Orange,
    /// No calibrated range matched; never stored in a registry or cube
    Unknown,
}

impl ColorTag {
    /// The six recognisable colors
    pub const KNOWN: [ColorTag; 6] = [
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Yellow,
        ColorTag::White,
        ColorTag::Orange,
    ];

    /// Single-character code
    pub fn code(self) -> char {
        match self {
            ColorTag::Red => 'r',
            ColorTag::Green => 'g',
            ColorTag::Blue => 'b',
            ColorTag::Yellow => 'y',
            ColorTag::White => 'w',
            ColorTag::Orange => 'o',
            ColorTag::Unknown => 'u',
        }
    }

    /// Parse a single-character code
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'r' => Some(ColorTag::Red),
            'g' => Some(ColorTag::Green),
            'b' => Some(ColorTag::Blue),
            'y' => Some(ColorTag::Yellow),
            'w' => Some(ColorTag::White),
            'o' => Some(ColorTag::Orange),
            'u' => Some(ColorTag::Unknown),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn long_name(self) -> &'static str {
        match self {
            ColorTag::Red => "Red",
            ColorTag::Green => "Green",
            ColorTag::Blue => "Blue",
            ColorTag::Yellow => "Yellow",
            ColorTag::White => "White",
            ColorTag::Orange => "Orange",
            ColorTag::Unknown => "Unknown",
        }
    }

    /// Parse a human-readable name (case-insensitive); unrecognised names map to `Unknown`
    pub fn from_long_name(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|tag| tag.long_name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(ColorTag::Unknown)
    }

    /// Whether this tag names a real sticker color
    pub fn is_known(self) -> bool {
        self != ColorTag::Unknown
    }

    /// Face whose center carries this color
    pub fn face(self) -> Option<FaceId> {
        FaceId::for_center(self)
    }

    /// RGB used to draw this tag on overlays and cube nets
    pub fn display_rgb(self) -> [u8; 3] {
        match self {
            ColorTag::Red => [255, 0, 0],
            ColorTag::Green => [0, 255, 0],
            ColorTag::Blue => [0, 0, 255],
            ColorTag::Yellow => [255, 255, 0],
            ColorTag::White => [255, 255, 255],
            ColorTag::Orange => [255, 165, 0],
            ColorTag::Unknown => [0, 0, 0],
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<char> = ColorTag::KNOWN.iter().map(|t| t.code()).collect();
        codes.push(ColorTag::Unknown.code());
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 7);
    }

    #[test]
    fn test_code_parsing() {
        for tag in ColorTag::KNOWN {
            assert_eq!(ColorTag::from_code(tag.code()), Some(tag));
        }
        assert_eq!(ColorTag::from_code('u'), Some(ColorTag::Unknown));
        assert_eq!(ColorTag::from_code('x'), None);
    }

    #[test]
    fn test_long_names() {
        assert_eq!(ColorTag::from_long_name("Green"), ColorTag::Green);
        assert_eq!(ColorTag::from_long_name("orange"), ColorTag::Orange);
        assert_eq!(ColorTag::from_long_name("Purple"), ColorTag::Unknown);
        assert_eq!(ColorTag::Unknown.long_name(), "Unknown");
    }

    #[test]
    fn test_unknown_has_no_face() {
        assert!(!ColorTag::Unknown.is_known());
        assert_eq!(ColorTag::Unknown.face(), None);
        assert_eq!(ColorTag::Green.face(), Some(FaceId::Front));
    }
}
