//! Colors in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFF000000;
pub const FOREGROUND: u32 = 0xFFFFFFFF;
