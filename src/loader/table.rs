//! Call table - one slot per catalog entry

use crate::catalog::EntryId;
use crate::errors::{GlError, GlResult};
use core::ffi::c_void;
use core::ptr::NonNull;

/// Resolution result for one entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Bound(NonNull<c_void>),
    Unbound,
}

impl Slot {
    #[inline]
    pub fn is_bound(self) -> bool {
        matches!(self, Self::Bound(_))
    }
}

/// Lifecycle of a table; it only ever moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TableState {
    Uninitialized,
    Loading,
    Ready,
}

/// Resolved addresses, indexed by `EntryId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTable {
    state: TableState,
    slots: Box<[Slot]>,
}

// Slots hold code addresses that are never written after `finish`.
unsafe impl Send for CallTable {}
unsafe impl Sync for CallTable {}

impl CallTable {
    /// A table that answers every lookup with `NotInitialized`
    pub fn uninitialized() -> Self {
        Self {
            state: TableState::Uninitialized,
            slots: Box::default(),
        }
    }

    pub(crate) fn loading() -> Self {
        Self {
            state: TableState::Loading,
            slots: vec![Slot::Unbound; EntryId::COUNT].into_boxed_slice(),
        }
    }

    pub(crate) fn bind(&mut self, id: EntryId, address: NonNull<c_void>) {
        debug_assert_eq!(self.state, TableState::Loading);
        self.slots[id.index()] = Slot::Bound(address);
    }

    pub(crate) fn finish(mut self) -> Self {
        self.state = TableState::Ready;
        self
    }

    #[inline]
    pub fn state(&self) -> TableState {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == TableState::Ready
    }

    /// Slot for `id`; `Unbound` until the table is ready
    #[inline]
    pub fn slot(&self, id: EntryId) -> Slot {
        self.slots.get(id.index()).copied().unwrap_or(Slot::Unbound)
    }

    /// Address for `id`, or the reason there is none
    #[inline]
    pub fn address(&self, id: EntryId) -> GlResult<NonNull<c_void>> {
        if self.state != TableState::Ready {
            return Err(GlError::NotInitialized);
        }
        match self.slot(id) {
            Slot::Bound(address) => Ok(address),
            Slot::Unbound => Err(GlError::Unavailable { name: id.name() }),
        }
    }

    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_bound()).count()
    }

    /// `(id, slot)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, Slot)> + '_ {
        EntryId::ALL.iter().map(move |&id| (id, self.slot(id)))
    }
}

impl Default for CallTable {
    fn default() -> Self {
        Self::uninitialized()
    }
}
