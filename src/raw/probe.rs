// A quadratic probe sequence.
//
// For attempt `i = 0, 1, 2, ...` the probed slot is
// `(home + i*i) % capacity`, where `home` is the key's hash-determined
// origin. The squared offsets spread colliding keys away from each other's
// clusters, at the cost of not being guaranteed to visit every slot of an
// arbitrary prime-length table. Callers bound the walk at `capacity`
// attempts where termination is not otherwise guaranteed.
pub struct Probe {
    // The slot currently being probed.
    pub index: usize,
    // The number of probes performed so far.
    pub attempt: usize,
    home: usize,
    capacity: usize,
}

impl Probe {
    // Initialize the probe sequence at the key's home slot.
    #[inline]
    pub fn start(home: usize, capacity: usize) -> Probe {
        debug_assert!(home < capacity);

        Probe {
            index: home,
            attempt: 0,
            home,
            capacity,
        }
    }

    // Advance to the next slot in the sequence.
    #[inline]
    pub fn next(&mut self) {
        self.attempt += 1;
        self.index = (self.home + self.attempt * self.attempt) % self.capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_offsets() {
        let mut probe = Probe::start(0, 11);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(probe.index);
            probe.next();
        }
        assert_eq!(seen, [0, 1, 4, 9, 5]); // 16 % 11 == 5
    }

    #[test]
    fn wraps_around_from_home() {
        let mut probe = Probe::start(9, 11);
        probe.next();
        assert_eq!(probe.index, 10);
        probe.next();
        assert_eq!(probe.index, 2); // (9 + 4) % 11
    }
}
