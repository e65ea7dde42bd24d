use crate::raw::{self, RawTable, Slot};

use std::fmt;

/// An open-addressing hash set for `u64` keys.
///
/// Keys are stored directly in a single prime-length array and collisions
/// are resolved with quadratic probing. See the [crate-level
/// documentation](crate) for details.
///
/// Unlike [`std::collections::HashSet`], inserting a key that is already
/// present stores a second copy in another slot; [`remove`](ProbeSet::remove)
/// clears one copy at a time.
#[derive(Clone)]
pub struct ProbeSet {
    raw: RawTable,
}

impl ProbeSet {
    /// Creates an empty `ProbeSet` with a small default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let set = ProbeSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> ProbeSet {
        ProbeSet::with_capacity(raw::DEFAULT_CAPACITY)
    }

    /// Creates an empty `ProbeSet` with at least the specified capacity.
    ///
    /// The actual capacity is `capacity` rounded up to the next prime. The
    /// set can hold strictly fewer keys than its capacity before growing:
    /// it doubles once an insert would bring the occupancy to 80%.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let set = ProbeSet::with_capacity(10);
    /// assert_eq!(set.capacity(), 11);
    /// ```
    pub fn with_capacity(capacity: usize) -> ProbeSet {
        ProbeSet {
            raw: RawTable::with_capacity(capacity),
        }
    }

    /// Returns the number of keys in the set.
    ///
    /// Tombstones left behind by removals are not counted.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let mut set = ProbeSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let mut set = ProbeSet::new();
    /// assert!(set.is_empty());
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of slots in the backing array.
    ///
    /// Always prime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the fraction of slots currently occupied.
    ///
    /// Strictly less than `0.8` after every insert.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.raw.load_factor()
    }

    /// Inserts a key into the set, returning the index of the slot it was
    /// placed in.
    ///
    /// If the key is already present a second copy is stored; the set does
    /// not deduplicate. The insert may grow the table first, in which case
    /// every existing key is rehashed and previously returned slot indices
    /// are invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let mut set = ProbeSet::with_capacity(5);
    /// assert_eq!(set.insert(5), 0);
    /// // 10 % 5 == 0 collides, so the probe moves on to slot 1.
    /// assert_eq!(set.insert(10), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: u64) -> usize {
        self.raw.insert(key)
    }

    /// Returns the index of a slot holding `key`, or `None` if the key is
    /// not present.
    ///
    /// The lookup probes through tombstones and gives up after `capacity`
    /// attempts.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let mut set = ProbeSet::new();
    /// set.insert(42);
    /// assert!(set.find(42).is_some());
    /// assert_eq!(set.find(7), None);
    /// ```
    #[inline]
    pub fn find(&self, key: u64) -> Option<usize> {
        self.raw.find(key)
    }

    /// Returns `true` if the set contains `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let mut set = ProbeSet::new();
    /// set.insert(1);
    /// assert!(set.contains(1));
    /// assert!(!set.contains(2));
    /// ```
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        self.find(key).is_some()
    }

    /// Removes one copy of `key` from the set, leaving a tombstone in its
    /// slot. Does nothing if the key is not present.
    ///
    /// The first copy encountered along the probe sequence is the one
    /// removed; any duplicates stay findable.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let mut set = ProbeSet::new();
    /// set.insert(1);
    /// set.remove(1);
    /// assert!(!set.contains(1));
    /// set.remove(1); // absent keys are ignored
    /// ```
    #[inline]
    pub fn remove(&mut self, key: u64) {
        self.raw.remove(key)
    }

    /// Clears the set, resetting every slot to empty.
    ///
    /// The capacity is retained.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let mut set = ProbeSet::new();
    /// set.insert(1);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear()
    }

    /// An iterator over the keys in the set, in ascending slot order.
    ///
    /// Slot order is the only iteration order the set defines, and it
    /// changes when the table grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumquat::ProbeSet;
    ///
    /// let set = ProbeSet::from([5, 10]);
    /// let keys: Vec<u64> = set.iter().collect();
    /// assert_eq!(keys, [5, 10]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.raw.slots().iter(),
        }
    }

    /// The per-slot view of the backing array, in index order.
    ///
    /// This is the state the [`Display`](fmt::Display) implementation
    /// renders; it exposes tombstones, which [`iter`](ProbeSet::iter)
    /// skips.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        self.raw.slots()
    }
}

impl Default for ProbeSet {
    fn default() -> ProbeSet {
        ProbeSet::new()
    }
}

impl fmt::Debug for ProbeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the full slot array, one line per slot in index order, with
/// `[empty]` and `[deleted]` placeholders for unoccupied slots.
///
/// ```
/// use kumquat::ProbeSet;
///
/// let mut set = ProbeSet::with_capacity(3);
/// set.insert(4);
/// assert_eq!(set.to_string(), "0 -> [empty]\n1 -> 4\n2 -> [empty]\n");
/// ```
impl fmt::Display for ProbeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots().iter().enumerate() {
            match slot {
                Slot::Occupied(key) => writeln!(f, "{index} -> {key}")?,
                Slot::Empty => writeln!(f, "{index} -> [empty]")?,
                Slot::Tombstone => writeln!(f, "{index} -> [deleted]")?,
            }
        }
        Ok(())
    }
}

impl Extend<u64> for ProbeSet {
    fn extend<T: IntoIterator<Item = u64>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<const N: usize> From<[u64; N]> for ProbeSet {
    fn from(arr: [u64; N]) -> Self {
        ProbeSet::from_iter(arr)
    }
}

impl FromIterator<u64> for ProbeSet {
    fn from_iter<T: IntoIterator<Item = u64>>(iter: T) -> Self {
        let iter = iter.into_iter();
        // Size for the hint so a well-behaved iterator triggers at most
        // one late resize.
        let (lower, _) = iter.size_hint();
        let mut set = ProbeSet::with_capacity(lower.max(raw::DEFAULT_CAPACITY));
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a ProbeSet {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a set's keys, in ascending slot order.
///
/// This struct is created by the [`iter`](ProbeSet::iter) method on
/// [`ProbeSet`]. See its documentation for details.
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Slot>,
}

impl Iterator for Iter<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied(key) => Some(*key),
            _ => None,
        })
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter {
                slots: self.slots.clone(),
            })
            .finish()
    }
}
