//! Logical pen descriptions and the extended-pen reduction.

use crate::types::ColorRef;

/// Pen style values and masks (`PS_*`).
pub mod pen_style {
    pub const SOLID: u32 = 0;
    pub const DASH: u32 = 1;
    pub const DOT: u32 = 2;
    pub const DASHDOT: u32 = 3;
    pub const DASHDOTDOT: u32 = 4;
    pub const NULL: u32 = 5;
    pub const INSIDEFRAME: u32 = 6;
    pub const USERSTYLE: u32 = 7;
    pub const ALTERNATE: u32 = 8;
    pub const STYLE_MASK: u32 = 0x0000_000F;

    pub const ENDCAP_ROUND: u32 = 0x0000_0000;
    pub const ENDCAP_SQUARE: u32 = 0x0000_0100;
    pub const ENDCAP_FLAT: u32 = 0x0000_0200;

    pub const JOIN_ROUND: u32 = 0x0000_0000;
    pub const JOIN_BEVEL: u32 = 0x0000_1000;
    pub const JOIN_MITER: u32 = 0x0000_2000;

    pub const COSMETIC: u32 = 0x0000_0000;
    pub const GEOMETRIC: u32 = 0x0001_0000;
}

/// A two-axis extent; only `x` carries meaning for pen widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// In-memory `LOGPEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogPen {
    pub style: u32,
    pub width: Point,
    pub color: ColorRef,
}

impl LogPen {
    pub fn new(style: u32, width: i32, color: ColorRef) -> Self {
        Self {
            style,
            width: Point { x: width, y: 0 },
            color,
        }
    }
}

/// In-memory `EXTLOGPEN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtLogPen {
    pub pen_style: u32,
    pub width: u32,
    pub brush_style: u32,
    pub color: ColorRef,
    pub hatch: u64,
    /// Dash and gap lengths for `PS_USERSTYLE` pens
    pub style_entries: Vec<u32>,
}

impl ExtLogPen {
    /// Reduce to the simple pen shape the metafile record can carry.
    ///
    /// Dash arrays, brush style and hatch are dropped; the width becomes
    /// `(width, 0)`.
    pub fn to_log_pen(&self) -> LogPen {
        LogPen {
            style: self.pen_style,
            width: Point {
                x: self.width as i32,
                y: 0,
            },
            color: self.color,
        }
    }

    /// True when the reduction loses information the pen carries.
    pub fn is_lossy(&self) -> bool {
        !self.style_entries.is_empty() || self.pen_style > u16::MAX as u32
    }
}
