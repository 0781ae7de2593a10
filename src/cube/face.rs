//! Face identifiers and the center-color table

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::ColorTag;

/// Cube face, named by its position in the solved reference orientation
///
/// Serializes as its single-letter code (`"U"`, `"R"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaceId {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "F")]
    Front,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "B")]
    Back,
}

impl FaceId {
    /// Faces in solver serialization order
    pub const ALL: [FaceId; 6] = [
        FaceId::Up,
        FaceId::Right,
        FaceId::Front,
        FaceId::Down,
        FaceId::Left,
        FaceId::Back,
    ];

    /// Position in solver serialization order
    pub fn index(self) -> usize {
        match self {
            FaceId::Up => 0,
            FaceId::Right => 1,
            FaceId::Front => 2,
            FaceId::Down => 3,
            FaceId::Left => 4,
            FaceId::Back => 5,
        }
    }

    /// Single-letter code used in cube strings
    pub fn code(self) -> char {
        match self {
            FaceId::Up => 'U',
            FaceId::Right => 'R',
            FaceId::Front => 'F',
            FaceId::Down => 'D',
            FaceId::Left => 'L',
            FaceId::Back => 'B',
        }
    }

    /// Parse a single-letter code
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'U' => Some(FaceId::Up),
            'R' => Some(FaceId::Right),
            'F' => Some(FaceId::Front),
            'D' => Some(FaceId::Down),
            'L' => Some(FaceId::Left),
            'B' => Some(FaceId::Back),
            _ => None,
        }
    }

    /// Full face name
    pub fn name(self) -> &'static str {
        match self {
            FaceId::Up => "Up",
            FaceId::Right => "Right",
            FaceId::Front => "Front",
            FaceId::Down => "Down",
            FaceId::Left => "Left",
            FaceId::Back => "Back",
        }
    }

    /// Sticker color at this face's center
    pub fn center_color(self) -> ColorTag {
        match self {
            FaceId::Up => ColorTag::Yellow,
            FaceId::Right => ColorTag::Orange,
            FaceId::Front => ColorTag::Green,
            FaceId::Down => ColorTag::White,
            FaceId::Left => ColorTag::Red,
            FaceId::Back => ColorTag::Blue,
        }
    }

    /// Face identified by a center sticker color
    ///
    /// This table is fixed for the whole process; `Unknown` has no face.
    pub fn for_center(color: ColorTag) -> Option<Self> {
        match color {
            ColorTag::Yellow => Some(FaceId::Up),
            ColorTag::Orange => Some(FaceId::Right),
            ColorTag::Green => Some(FaceId::Front),
            ColorTag::White => Some(FaceId::Down),
            ColorTag::Red => Some(FaceId::Left),
            ColorTag::Blue => Some(FaceId::Back),
            ColorTag::Unknown => None,
        }
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_table_is_a_bijection() {
        for face in FaceId::ALL {
            assert_eq!(FaceId::for_center(face.center_color()), Some(face));
        }
        for color in ColorTag::KNOWN {
            let face = FaceId::for_center(color).unwrap();
            assert_eq!(face.center_color(), color);
        }
    }

    #[test]
    fn test_index_matches_serialization_order() {
        for (i, face) in FaceId::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(FaceId::from_code(face.code()), Some(*face));
        }
    }

    #[test]
    fn test_serde_uses_letter_codes() {
        let json = serde_json::to_string(&vec![FaceId::Front, FaceId::Back]).unwrap();
        assert_eq!(json, r#"["F","B"]"#);
        let parsed: Vec<FaceId> = serde_json::from_str(r#"["U","D"]"#).unwrap();
        assert_eq!(parsed, vec![FaceId::Up, FaceId::Down]);
    }
}
