//! Fixed color tables keyed by wood species and hardware finish.

use crate::domain::{
    color::Color,
    value_objects::{HardwareFinish, Wood},
};

/// Base, mid and dark tones of one wood species.
///
/// Every other wood shade in the schematic is derived from these three with
/// [`Color::shade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WoodPalette {
    pub base: Color,
    pub mid: Color,
    pub dark: Color,
}

impl WoodPalette {
    pub const CEDAR: Self = Self {
        base: Color::from_u32(0xB7773A),
        mid: Color::from_u32(0x9C5F24),
        dark: Color::from_u32(0x6E3F16),
    };

    pub const PINE: Self = Self {
        base: Color::from_u32(0xD6C5A8),
        mid: Color::from_u32(0xC4B090),
        dark: Color::from_u32(0xA08D73),
    };

    pub const fn for_wood(wood: Wood) -> Self {
        match wood {
            Wood::Cedar => Self::CEDAR,
            Wood::Pine => Self::PINE,
        }
    }
}

/// Stroke color of the hardware-cloth mesh and the door latch.
pub const fn mesh_stroke(finish: HardwareFinish) -> Color {
    match finish {
        HardwareFinish::Black => Color::from_u32(0x0A0A0A),
        HardwareFinish::Galvanized => Color::from_u32(0x9CA3AF),
    }
}

/// Everything the schematic generator needs besides geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub wood: WoodPalette,
    pub mesh_stroke: Color,
}

impl Palette {
    pub const fn new(wood: Wood, finish: HardwareFinish) -> Self {
        Self {
            wood: WoodPalette::for_wood(wood),
            mesh_stroke: mesh_stroke(finish),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wood_lookup() {
        assert_eq!(WoodPalette::for_wood(Wood::Cedar).base.to_hex(), "#b7773a");
        assert_eq!(WoodPalette::for_wood(Wood::Pine).dark.to_hex(), "#a08d73");
    }

    #[test]
    fn mesh_stroke_depends_on_finish() {
        assert_eq!(mesh_stroke(HardwareFinish::Black).to_hex(), "#0a0a0a");
        assert_eq!(mesh_stroke(HardwareFinish::Galvanized).to_hex(), "#9ca3af");
    }

    #[test]
    fn palette_combines_both_tables() {
        let p = Palette::new(Wood::Pine, HardwareFinish::Galvanized);
        assert_eq!(p.wood, WoodPalette::PINE);
        assert_eq!(p.mesh_stroke, mesh_stroke(HardwareFinish::Galvanized));
    }
}
