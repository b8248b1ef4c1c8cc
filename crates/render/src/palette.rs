use cubeview_common::COLOR_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub rgb: Rgb,
    pub name: &'static str,
    pub symbol: char,
}

/// Facelet value to color lookup, one entry per face color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: [PaletteEntry; COLOR_COUNT],
}

impl Palette {
    /// Used for facelet values outside the palette.
    pub const UNMAPPED: PaletteEntry = PaletteEntry {
        rgb: Rgb(0x80_80_80),
        name: "unmapped",
        symbol: '?',
    };

    pub const fn new(entries: [PaletteEntry; COLOR_COUNT]) -> Self {
        Self { entries }
    }

    /// Entry for `value`, if it is a palette index.
    pub fn get(&self, value: u8) -> Option<&PaletteEntry> {
        self.entries.get(value as usize)
    }

    /// Entry for `value`, falling back to [`Palette::UNMAPPED`].
    pub fn entry(&self, value: u8) -> &PaletteEntry {
        self.get(value).unwrap_or(&Self::UNMAPPED)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }
}

impl Default for Palette {
    /// White, yellow, green, blue, orange, red for U, D, L, R, F, B.
    fn default() -> Self {
        const fn e(rgb: u32, name: &'static str, symbol: char) -> PaletteEntry {
            PaletteEntry {
                rgb: Rgb(rgb),
                name,
                symbol,
            }
        }
        Self::new([
            e(0xFF_FF_FF, "white", 'W'),
            e(0xFF_FF_00, "yellow", 'Y'),
            e(0x00_FF_00, "green", 'G'),
            e(0x00_00_FF, "blue", 'B'),
            e(0xFF_A5_00, "orange", 'O'),
            e(0xFF_00_00, "red", 'R'),
        ])
    }
}
