// Undo history: full canvas snapshots in a fixed ring.
//
// Behaves like a stack (undo pops the newest) but never refuses a push: when
// it is full the OLDEST snapshot is overwritten. So after N+1 pushes the very
// first state is gone for good. There is no redo.

use crate::canvas::PixelBuffer;

pub const DEFAULT_CAPACITY: usize = 10;

pub struct History {
    slots: Vec<Option<PixelBuffer>>, // ring storage, len == capacity
    top: usize,                      // slot the next push writes to
    len: usize,                      // live snapshots, <= capacity
}

impl History {
    /// Capacity 0 is bumped to 1; a history that can hold nothing would make
    /// every undo a no-op.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { slots: (0..capacity).map(|_| None).collect(), top: 0, len: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store a deep copy of `canvas` as the newest entry.
    pub fn snapshot(&mut self, canvas: &PixelBuffer) {
        self.push(canvas.clone());
    }

    /// Push an owned snapshot. At capacity this lands on the oldest slot.
    pub fn push(&mut self, snapshot: PixelBuffer) {
        let evicting = self.len == self.capacity();
        self.slots[self.top] = Some(snapshot);
        self.top = (self.top + 1) % self.capacity();
        if evicting {
            tracing::trace!("history full, oldest snapshot dropped");
        } else {
            self.len += 1;
        }
    }

    /// Take the newest snapshot, if any.
    pub fn pop(&mut self) -> Option<PixelBuffer> {
        if self.len == 0 {
            return None;
        }
        self.top = (self.top + self.capacity() - 1) % self.capacity();
        self.len -= 1;
        self.slots[self.top].take()
    }

    /// Restore the newest snapshot into `live`. Returns false (and leaves
    /// `live` alone) when there is nothing to undo.
    pub fn undo(&mut self, live: &mut PixelBuffer) -> bool {
        match self.pop() {
            Some(prev) => {
                *live = prev;
                true
            }
            None => false,
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
