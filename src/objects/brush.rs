//! Logical brush description.

use crate::types::ColorRef;

/// Brush style (`BS_*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushStyle {
    Solid,
    /// `BS_NULL` / `BS_HOLLOW`
    Null,
    Hatched,
    Pattern,
    Indexed,
    DibPattern,
    DibPatternPt,
    Pattern8x8,
    DibPattern8x8,
    MonoPattern,
    /// A style value with no named constant
    Other(u32),
}

impl BrushStyle {
    /// Create from the raw `BS_*` value.
    pub fn from_value(value: u32) -> Self {
        match value {
            0 => Self::Solid,
            1 => Self::Null,
            2 => Self::Hatched,
            3 => Self::Pattern,
            4 => Self::Indexed,
            5 => Self::DibPattern,
            6 => Self::DibPatternPt,
            7 => Self::Pattern8x8,
            8 => Self::DibPattern8x8,
            9 => Self::MonoPattern,
            v => Self::Other(v),
        }
    }

    /// Raw `BS_*` value.
    pub fn value(&self) -> u32 {
        match self {
            Self::Solid => 0,
            Self::Null => 1,
            Self::Hatched => 2,
            Self::Pattern => 3,
            Self::Indexed => 4,
            Self::DibPattern => 5,
            Self::DibPatternPt => 6,
            Self::Pattern8x8 => 7,
            Self::DibPattern8x8 => 8,
            Self::MonoPattern => 9,
            Self::Other(v) => *v,
        }
    }

    /// Styles recorded as a DIB pattern brush.
    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern | Self::DibPattern)
    }
}

/// Hatch pattern (`HS_*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum HatchStyle {
    Horizontal = 0,
    Vertical = 1,
    FDiagonal = 2,
    BDiagonal = 3,
    Cross = 4,
    DiagCross = 5,
}

/// In-memory `LOGBRUSH`.
///
/// `hatch` is a pointer-sized field in memory; for hatched brushes it holds
/// an `HS_*` value and only its low 16 bits survive in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogBrush {
    pub style: BrushStyle,
    pub color: ColorRef,
    pub hatch: u64,
}

impl LogBrush {
    pub fn solid(color: ColorRef) -> Self {
        Self {
            style: BrushStyle::Solid,
            color,
            hatch: 0,
        }
    }

    pub fn null() -> Self {
        Self {
            style: BrushStyle::Null,
            color: ColorRef::BLACK,
            hatch: 0,
        }
    }

    pub fn hatched(hatch: HatchStyle, color: ColorRef) -> Self {
        Self {
            style: BrushStyle::Hatched,
            color,
            hatch: hatch as u64,
        }
    }
}
