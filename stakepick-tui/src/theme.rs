//! Dark palette and text roles for the picker.

use crate::ui::Rgb;

/// Named color roles. Purely cosmetic; nothing behavioral hangs off these.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub apr: Rgb,
    pub delegated: Rgb,
    pub price: Rgb,
    pub warning: Rgb,
    /// Row under the cursor.
    pub cursor: Rgb,
    /// Row holding the current selection.
    pub selection: Rgb,
    pub border: Rgb,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            background: Rgb::hex(0x121212),
            surface: Rgb::hex(0x1E1B26),
            foreground: Rgb::hex(0xE1DFEB),
            muted: Rgb::hex(0x9895A6),
            accent: Rgb::hex(0xE1DFEB),
            apr: Rgb::hex(0x88D1FF),
            delegated: Rgb::hex(0xE1DFEB),
            price: Rgb::hex(0x7CF9BA),
            warning: Rgb::hex(0xFFB74D),
            cursor: Rgb::hex(0xA277FF),
            selection: Rgb::hex(0x6E5494),
            border: Rgb::hex(0x3A3645),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
