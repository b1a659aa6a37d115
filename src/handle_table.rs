//! Metafile object table.
//!
//! Maps GDI object ids to the small slot indices that SELECTOBJECT and
//! DELETEOBJECT records refer to. Freed slots are handed out again before
//! the table grows, lowest index first; index 0 is an ordinary slot.

use crate::error::{Result, WmfError};
use crate::types::ObjectId;

/// Number of slots added each time the table runs out of room.
pub const DEFAULT_GROWTH: u16 = 20;

/// Slot table for one recording session.
#[derive(Debug, Clone)]
pub struct HandleTable {
    slots: Vec<Option<ObjectId>>,
    growth: usize,
    live: usize,
    max_objects: u16,
    /// Every slot below this index is live
    free_hint: usize,
}

impl HandleTable {
    /// Create an empty table growing by [`DEFAULT_GROWTH`] slots.
    pub fn new() -> Self {
        Self::with_growth(DEFAULT_GROWTH)
    }

    /// Create an empty table growing by `growth` slots at a time.
    pub fn with_growth(growth: u16) -> Self {
        Self {
            slots: Vec::new(),
            growth: growth.max(1) as usize,
            live: 0,
            max_objects: 0,
            free_hint: 0,
        }
    }

    /// Store `id` in the lowest empty slot and return its index.
    ///
    /// Grows the table when every slot is taken. Raises the high-water mark
    /// reported in the metafile header when the live count exceeds it.
    pub fn add(&mut self, id: ObjectId) -> Result<u16> {
        let free = self.slots[self.free_hint..]
            .iter()
            .position(Option::is_none)
            .map(|offset| self.free_hint + offset);
        let index = match free {
            Some(index) => index,
            None => {
                let first_new = self.slots.len();
                if first_new > u16::MAX as usize {
                    return Err(WmfError::HandleTableFull(self.live));
                }
                let new_len = (first_new + self.growth).min(u16::MAX as usize + 1);
                self.slots.resize(new_len, None);
                first_new
            }
        };

        self.slots[index] = Some(id);
        self.free_hint = index + 1;
        self.live += 1;
        if self.live > self.max_objects as usize {
            self.max_objects = self.live.min(u16::MAX as usize) as u16;
        }

        Ok(index as u16)
    }

    /// Clear slot `index`. Returns `false` if it was out of range or empty.
    pub fn remove(&mut self, index: u16) -> bool {
        match self.slots.get_mut(index as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.live -= 1;
                self.free_hint = self.free_hint.min(index as usize);
                true
            }
            _ => false,
        }
    }

    /// Find the slot holding `id`.
    pub fn find(&self, id: ObjectId) -> Option<u16> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(id))
            .map(|index| index as u16)
    }

    /// Object stored at `index`, if any.
    pub fn get(&self, index: u16) -> Option<ObjectId> {
        self.slots.get(index as usize).copied().flatten()
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.live
    }

    /// True when no slot is live.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// True when every addressable 16-bit index is live.
    pub fn is_full(&self) -> bool {
        self.live > u16::MAX as usize
    }

    /// Number of allocated slots, live or empty.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Largest number of objects that were live at the same time.
    pub fn max_objects(&self) -> u16 {
        self.max_objects
    }

    /// Iterate over `(index, id)` pairs of live slots.
    pub fn iter(&self) -> impl Iterator<Item = (u16, ObjectId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|id| (i as u16, id)))
    }
}

impl Default for HandleTable {
    fn default() -> Self {
        Self::new()
    }
}
