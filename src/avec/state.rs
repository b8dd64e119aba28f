//! Global and local decoding context.

use alloc::{collections::BTreeMap, vec::Vec};

use log::debug;
use thiserror::Error;

use crate::sans::tag::{GlobalTag, LocalTag};

use super::item::ItemId;

/// An item arriving in a state it cannot apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// `End Collection` with no open collection.
    #[error("No open collection to close")]
    NoOpenCollection,
    /// `Input`, `Output` or `Feature` with no open collection.
    #[error("Field declared outside of any collection")]
    FieldOutsideCollection,
    /// `Pop` with nothing pushed.
    #[error("Pop without a matching push")]
    EmptyStack,
}

type Globals = BTreeMap<GlobalTag, ItemId>;

/// Context tracked while items arrive.
///
/// Global items persist until reassigned (or restored by `Pop`); local items
/// last until the next snapshot.
#[derive(Debug, Default, Clone)]
pub struct State {
    global: Globals,
    stack: Vec<Globals>,
    local: Vec<(ItemId, LocalTag)>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a global item. `Push` saves a copy of the current global values
    /// and `Pop` restores the most recent copy.
    pub fn assign_global(&mut self, id: ItemId, tag: GlobalTag) -> Result<(), StateError> {
        match tag {
            GlobalTag::Push => {
                self.stack.push(self.global.clone());
                debug!("push global state (depth {})", self.stack.len());
            }
            GlobalTag::Pop => {
                self.global = self.stack.pop().ok_or(StateError::EmptyStack)?;
                debug!("pop global state (depth {})", self.stack.len());
            }
            tag => {
                self.global.insert(tag, id);
            }
        }
        Ok(())
    }

    pub fn append_local(&mut self, id: ItemId, tag: LocalTag) {
        self.local.push((id, tag));
    }

    /// Current global value for a tag.
    pub fn global(&self, tag: GlobalTag) -> Option<ItemId> {
        self.global.get(&tag).copied()
    }

    pub fn usage_page(&self) -> Option<ItemId> {
        self.global(GlobalTag::UsagePage)
    }

    /// Local `Usage` items accumulated so far, in arrival order.
    pub fn usages(&self) -> Vec<ItemId> {
        self.local
            .iter()
            .filter(|(_, tag)| *tag == LocalTag::Usage)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of saved global states.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Freeze the current context: global values in tag order, then local
    /// values in arrival order. Local values are cleared.
    pub fn snapshot_and_reset_local(&mut self) -> Vec<ItemId> {
        let mut snapshot: Vec<_> = self.global.values().copied().collect();
        snapshot.extend(self.local.drain(..).map(|(id, _)| id));
        snapshot
    }
}
