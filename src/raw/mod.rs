mod prime;
mod probe;

use std::mem;

use self::probe::Probe;

pub use self::prime::{is_prime, next_prime};

// Resize before an insert would push the occupancy to this fraction of
// the capacity. Keeping at least 20% of the slots open is also what makes
// the unbounded insert probe safe in practice.
const LOAD_FACTOR: f64 = 0.8;

// Requested capacity for `ProbeSet::new`; rounds up to a table of 11 slots.
pub const DEFAULT_CAPACITY: usize = 10;

/// A single position in the backing array.
///
/// `Tombstone` marks a slot that held a key and was cleared by a removal.
/// It is distinct from `Empty` so that a lookup can keep probing past it:
/// a matching key may have been placed beyond this slot while it was still
/// occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Never occupied since the backing array was allocated.
    Empty,
    /// Occupied at some point, then removed.
    Tombstone,
    /// Holds a live key.
    Occupied(u64),
}

// An open-addressed table of prime length.
#[derive(Clone)]
pub struct RawTable {
    slots: Box<[Slot]>,
    // Occupied slots only; tombstones are not counted.
    len: usize,
}

impl RawTable {
    pub fn with_capacity(capacity: usize) -> RawTable {
        let capacity = next_prime(capacity);
        RawTable {
            slots: vec![Slot::Empty; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    // The key's home slot in a table of `capacity` slots.
    #[inline]
    fn home(key: u64, capacity: usize) -> usize {
        (key % capacity as u64) as usize
    }

    // Insert `key`, growing the table first if it is at the load limit.
    //
    // Duplicate keys are not detected; inserting a key twice occupies two
    // slots. Returns the index of the slot the key was placed in.
    pub fn insert(&mut self, key: u64) -> usize {
        // The incoming key counts toward the limit: the table must still be
        // below the threshold once this insert completes.
        if (self.len + 1) as f64 / self.capacity() as f64 >= LOAD_FACTOR {
            self.resize();
        }

        let mut probe = Probe::start(Self::home(key, self.capacity()), self.capacity());
        loop {
            match self.slots[probe.index] {
                // A tombstone is reusable for insertion, unlike for lookup.
                Slot::Empty | Slot::Tombstone => {
                    self.slots[probe.index] = Slot::Occupied(key);
                    self.len += 1;
                    return probe.index;
                }
                Slot::Occupied(_) => probe.next(),
            }
        }
    }

    // Find the slot holding `key`, walking the probe sequence until an
    // `Empty` slot or `capacity` failed attempts. Tombstones do not stop
    // the walk.
    pub fn find(&self, key: u64) -> Option<usize> {
        let capacity = self.capacity();
        let mut probe = Probe::start(Self::home(key, capacity), capacity);

        while probe.attempt < capacity {
            match self.slots[probe.index] {
                Slot::Occupied(stored) if stored == key => return Some(probe.index),
                Slot::Empty => return None,
                _ => probe.next(),
            }
        }

        // The sequence cycled without hitting an empty slot.
        None
    }

    // Convert the first slot holding `key` into a tombstone. Absent keys
    // are ignored; duplicates beyond the first remain findable.
    pub fn remove(&mut self, key: u64) {
        if let Some(index) = self.find(key) {
            self.slots[index] = Slot::Tombstone;
            self.len -= 1;
        }
    }

    pub fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
        self.len = 0;
    }

    // Grow to the next prime at least double the current capacity and
    // rehash every occupied slot, in ascending slot order, with a fresh
    // probe sequence against the new length. Tombstones are dropped here;
    // this is the table's only tombstone reclamation.
    fn resize(&mut self) {
        let capacity = next_prime(2 * self.capacity());
        let old = mem::replace(
            &mut self.slots,
            vec![Slot::Empty; capacity].into_boxed_slice(),
        );

        for slot in old.iter() {
            if let Slot::Occupied(key) = *slot {
                let mut probe = Probe::start(Self::home(key, capacity), capacity);
                while self.slots[probe.index] != Slot::Empty {
                    probe.next();
                }
                self.slots[probe.index] = Slot::Occupied(key);
            }
        }

        debug_assert!(self.load_factor() < LOAD_FACTOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rounds_to_prime() {
        assert_eq!(RawTable::with_capacity(0).capacity(), 2);
        assert_eq!(RawTable::with_capacity(10).capacity(), 11);
        assert_eq!(RawTable::with_capacity(23).capacity(), 23);
    }

    #[test]
    fn probe_walks_collision_chain() {
        // Worked example: capacity 5, keys 5 and 10 both hash to slot 0.
        let mut table = RawTable::with_capacity(5);
        assert_eq!(table.insert(5), 0);
        assert_eq!(table.insert(10), 1);

        table.remove(5);
        assert_eq!(table.slots()[0], Slot::Tombstone);

        // The lookup must continue through the tombstone at slot 0.
        assert_eq!(table.find(10), Some(1));
        assert_eq!(table.find(5), None);
    }

    #[test]
    fn tombstone_reused_by_insert() {
        let mut table = RawTable::with_capacity(5);
        table.insert(5);
        table.insert(10);
        table.remove(5);

        // 15 also hashes to slot 0 and lands on the tombstone there.
        assert_eq!(table.insert(15), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn resize_triggers_before_placement() {
        let mut table = RawTable::with_capacity(10);
        for key in 0..8 {
            table.insert(key);
        }
        // 8 occupied out of 11 is still under the limit.
        assert_eq!(table.capacity(), 11);

        // A 9th key would land at 9/11, so the table doubles first.
        table.insert(100);
        assert_eq!(table.capacity(), 23);
        assert_eq!(table.len(), 9);
        for key in (0..8).chain([100]) {
            assert!(table.find(key).is_some(), "lost {key} across resize");
        }
    }

    #[test]
    fn resize_purges_tombstones() {
        let mut table = RawTable::with_capacity(10);
        for key in 0..8 {
            table.insert(key);
        }
        table.remove(3);
        assert!(table.slots().contains(&Slot::Tombstone));

        table.insert(100);
        table.insert(101); // 9th occupied slot, forces the resize
        assert_eq!(table.capacity(), 23);
        assert!(!table.slots().contains(&Slot::Tombstone));
        assert_eq!(table.find(3), None);
    }
}
