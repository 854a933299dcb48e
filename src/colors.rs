//! Colors in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const GRID: u32 = 0xFF333333;
pub const OUTLINE: u32 = 0xFFFFFFFF;
pub const VERTEX: u32 = 0xFFFF0000;

pub const RED: u32 = 0xFFE0453A;
pub const ORANGE: u32 = 0xFFF29B30;
pub const YELLOW: u32 = 0xFFF2D64B;
pub const GREEN: u32 = 0xFF5DBB63;
pub const CYAN: u32 = 0xFF3DBFD6;
pub const BLUE: u32 = 0xFF4A6FE3;
pub const MAGENTA: u32 = 0xFFFF00FF;

/// Fill colors cycled through by the demo scene.
pub const PALETTE: [u32; 7] = [RED, ORANGE, YELLOW, GREEN, CYAN, BLUE, MAGENTA];

/// Splits a packed ARGB color into `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}
