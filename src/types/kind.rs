//! GDI object kinds

/// The kind of a GDI object as reported by its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Pen,
    /// Geometric or cosmetic pen created through `ExtCreatePen`
    ExtPen,
    Brush,
    Font,
    Palette,
    Bitmap,
    Region,
}

/// The per-kind slots of the "currently selected" pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionSlot {
    Pen,
    Brush,
    Font,
}

impl ObjectKind {
    /// The selection pointer this kind occupies, if it can be selected
    /// through `select_object` at all.
    ///
    /// Extended pens share the pen pointer.
    pub fn selection_slot(&self) -> Option<SelectionSlot> {
        match self {
            ObjectKind::Pen | ObjectKind::ExtPen => Some(SelectionSlot::Pen),
            ObjectKind::Brush => Some(SelectionSlot::Brush),
            ObjectKind::Font => Some(SelectionSlot::Font),
            ObjectKind::Palette | ObjectKind::Bitmap | ObjectKind::Region => None,
        }
    }
}
