//! Text style types for console output.

use crate::types::PieceKind;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-span styling. `fg: None` keeps the terminal's default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
}

impl TextStyle {
    pub const PLAIN: TextStyle = TextStyle {
        fg: None,
        bold: false,
    };

    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub const ERROR_COLOR: Rgb = Rgb::new(220, 80, 80);
pub const WARNING_COLOR: Rgb = Rgb::new(240, 220, 80);
pub const DIM_COLOR: Rgb = Rgb::new(120, 120, 130);

/// Color used for a piece tag.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}
