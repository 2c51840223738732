use pixelcraft_blocks::BlockType;
use serde::{Deserialize, Serialize};

/// Slots in the player inventory
pub const INVENTORY_SIZE: usize = 27;
/// The first slots of the inventory double as the hotbar
pub const HOTBAR_SIZE: usize = 9;

/// One inventory or furnace slot
///
/// A slot is either empty (`Air`, count 0) or holds 1..=stack size items of a
/// single non-air block. The fields are private so no mutation can leave a
/// zero-count block or a counted air slot behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawSlot", into = "RawSlot")]
pub struct Slot {
    block: BlockType,
    count: u32,
}

#[derive(Serialize, Deserialize)]
struct RawSlot {
    block: BlockType,
    count: u32,
}

impl From<RawSlot> for Slot {
    fn from(raw: RawSlot) -> Self {
        Slot::new(raw.block, raw.count)
    }
}

impl From<Slot> for RawSlot {
    fn from(slot: Slot) -> Self {
        RawSlot {
            block: slot.block,
            count: slot.count,
        }
    }
}

impl Slot {
    pub const EMPTY: Slot = Slot {
        block: BlockType::Air,
        count: 0,
    };

    /// Build a slot, normalizing empty stacks and clamping to the stack size
    pub fn new(block: BlockType, count: u32) -> Self {
        if block.is_air() || count == 0 {
            return Slot::EMPTY;
        }
        Slot {
            block,
            count: count.min(block.stack_size()),
        }
    }

    #[inline]
    pub fn block(&self) -> BlockType {
        self.block
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        !self.is_empty() && self.count >= self.block.stack_size()
    }

    /// How many more of `block` this slot can take
    pub fn space_for(&self, block: BlockType) -> u32 {
        if block.is_air() {
            0
        } else if self.is_empty() {
            block.stack_size()
        } else if self.block == block {
            block.stack_size().saturating_sub(self.count)
        } else {
            0
        }
    }

    pub fn can_accept(&self, block: BlockType, amount: u32) -> bool {
        self.space_for(block) >= amount
    }

    /// Add items, returns the amount that didn't fit
    pub fn add(&mut self, block: BlockType, amount: u32) -> u32 {
        let moved = amount.min(self.space_for(block));
        if moved > 0 {
            self.block = block;
            self.count += moved;
        }
        amount - moved
    }

    /// Remove up to `amount` items and return them as a slot of their own
    pub fn take(&mut self, amount: u32) -> Slot {
        let taken = amount.min(self.count);
        let out = Slot::new(self.block, taken);
        self.count -= taken;
        if self.count == 0 {
            *self = Slot::EMPTY;
        }
        out
    }

    /// Empty the slot, returning what it held
    pub fn take_all(&mut self) -> Slot {
        std::mem::take(self)
    }
}

/// Player inventory: a fixed row of slots, the first `HOTBAR_SIZE` being the hotbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Slot>,
    selected: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            slots: vec![Slot::EMPTY; INVENTORY_SIZE],
            selected: 0,
        }
    }

    /// Try to add items to the inventory
    /// Returns the amount that couldn't be added (0 if all added successfully)
    pub fn add_item(&mut self, block: BlockType, mut amount: u32) -> u32 {
        if block.is_air() {
            return amount;
        }

        // First top up existing stacks of the same block
        for slot in self.slots.iter_mut().filter(|s| s.block() == block) {
            amount = slot.add(block, amount);
            if amount == 0 {
                return 0;
            }
        }

        // Then start new stacks in empty slots
        for slot in self.slots.iter_mut().filter(|s| s.is_empty()) {
            amount = slot.add(block, amount);
            if amount == 0 {
                return 0;
            }
        }

        amount
    }

    /// Remove `amount` of `block`, taking from the last slot backwards
    ///
    /// Nothing is removed unless the whole amount is available.
    pub fn consume_items(&mut self, block: BlockType, amount: u32) -> bool {
        if self.count_of(block) < amount {
            return false;
        }

        let mut remaining = amount;
        for slot in self.slots.iter_mut().rev().filter(|s| s.block() == block) {
            remaining -= slot.take(remaining).count();
            if remaining == 0 {
                break;
            }
        }
        true
    }

    /// Count how many of a block are in the inventory
    pub fn count_of(&self, block: BlockType) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.block() == block)
            .map(|s| s.count())
            .sum()
    }

    pub fn has_item(&self, block: BlockType, amount: u32) -> bool {
        self.count_of(block) >= amount
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn hotbar(&self) -> &[Slot] {
        &self.slots[..HOTBAR_SIZE]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select a hotbar slot; indices past the hotbar are ignored
    pub fn select(&mut self, index: usize) {
        if index < HOTBAR_SIZE {
            self.selected = index;
        }
    }

    pub fn selected(&self) -> Slot {
        self.slots[self.selected]
    }

    /// Remove every item of `block` (used when a tool breaks)
    pub fn remove_all(&mut self, block: BlockType) -> u32 {
        self.slots
            .iter_mut()
            .filter(|s| s.block() == block)
            .map(|s| s.take_all().count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }
}
