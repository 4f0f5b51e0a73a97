//! Shape catalog - the immutable table of figure bitmaps and colors
//!
//! One ordered record per [`FigureKind`]. The table is built once for the
//! whole process ([`Catalog::standard`]) and handed to figures, cells and the
//! renderer by reference.

use std::sync::OnceLock;

use crate::types::{FigureKind, NamedColor};

/// Occupancy bitmap of a figure, rows top to bottom
pub type Bitmap = &'static [&'static [u8]];

/// A single catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: FigureKind,
    pub bitmap: Bitmap,
    pub color: NamedColor,
}

const I_BITMAP: Bitmap = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]];
const J_BITMAP: Bitmap = &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]];
const L_BITMAP: Bitmap = &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]];
const O_BITMAP: Bitmap = &[&[1, 1], &[1, 1]];
const S_BITMAP: Bitmap = &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]];
const Z_BITMAP: Bitmap = &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]];
const T_BITMAP: Bitmap = &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]];

const STANDARD_SHAPES: [ShapeDef; 7] = [
    ShapeDef {
        kind: FigureKind::I,
        bitmap: I_BITMAP,
        color: NamedColor::Red,
    },
    ShapeDef {
        kind: FigureKind::J,
        bitmap: J_BITMAP,
        color: NamedColor::Blue,
    },
    ShapeDef {
        kind: FigureKind::L,
        bitmap: L_BITMAP,
        color: NamedColor::Purple,
    },
    ShapeDef {
        kind: FigureKind::O,
        bitmap: O_BITMAP,
        color: NamedColor::Yellow,
    },
    ShapeDef {
        kind: FigureKind::S,
        bitmap: S_BITMAP,
        color: NamedColor::Green,
    },
    ShapeDef {
        kind: FigureKind::Z,
        bitmap: Z_BITMAP,
        color: NamedColor::Cyan,
    },
    ShapeDef {
        kind: FigureKind::T,
        bitmap: T_BITMAP,
        color: NamedColor::Orange,
    },
];

/// Ordered shape table plus the colors used for empty and unknown content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shapes: Vec<ShapeDef>,
    empty_color: NamedColor,
    fallback_color: NamedColor,
}

impl Catalog {
    /// The process-wide standard catalog
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| Catalog {
            shapes: STANDARD_SHAPES.to_vec(),
            empty_color: NamedColor::Black,
            fallback_color: NamedColor::DarkBlue,
        })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape at catalog position `index`
    pub fn get(&self, index: usize) -> Option<&ShapeDef> {
        self.shapes.get(index)
    }

    pub fn shape(&self, kind: FigureKind) -> &ShapeDef {
        &self.shapes[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeDef> {
        self.shapes.iter()
    }

    /// Display color for a grid content id
    ///
    /// 0 is the background, ids past the table map to the fallback color.
    pub fn color_for(&self, content: u8) -> NamedColor {
        if content == 0 {
            return self.empty_color;
        }
        self.shapes
            .get(content as usize - 1)
            .map(|s| s.color)
            .unwrap_or(self.fallback_color)
    }
}
