//! Colours for the multi-select widget

use eframe::egui::Color32;

/// Chip backgrounds by catalog position, cycled past the end
pub const CHIP_COLORS: [Color32; 8] = [
    Color32::from_rgb(0xFF, 0xED, 0xD5), // orange
    Color32::from_rgb(0xDC, 0xFC, 0xE7), // green
    Color32::from_rgb(0xFE, 0xE2, 0xE2), // red
    Color32::from_rgb(0xFE, 0xF9, 0xC3), // yellow
    Color32::from_rgb(0xDB, 0xEA, 0xFE), // blue
    Color32::from_rgb(0xF3, 0xE8, 0xFF), // purple
    Color32::from_rgb(0xFC, 0xE7, 0xF3), // pink
    Color32::from_rgb(0xE5, 0xE7, 0xEB), // gray
];

pub const CHIP_TEXT: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
pub const CHIP_UNSELECTED: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

pub const LABEL: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);
pub const MANDATORY: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

pub const BORDER: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);
pub const BORDER_ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);
pub const BORDER_SUCCESS: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

pub const INPUT_BG: Color32 = Color32::WHITE;
pub const LOCKED_BG: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

pub const PLACEHOLDER: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);
pub const SUMMARY_BG: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
pub const INPUT_TEXT: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

pub const HELPER: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);
pub const HELPER_ERROR: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);
pub const HELPER_SUCCESS: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

pub fn chip_color(index: usize, selected: bool, locked: bool) -> Color32 {
    if !selected || locked {
        return CHIP_UNSELECTED;
    }
    CHIP_COLORS[index % CHIP_COLORS.len()]
}
