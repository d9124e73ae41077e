use super::constants;

/// Append-only cart. Entries are product ids in insertion order; adding the
/// same product twice keeps both entries, there is no quantity aggregation
/// and no removal path.
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<u64>,
}

impl Cart {
    /// Appends an entry and returns the new length for the counter.
    pub fn add(&mut self, id: u64) -> usize {
        self.entries.push(id);
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[u64] {
        &self.entries
    }
}

/// Add-to-cart quantity, clamped to the stepper's inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(constants::QUANTITY_MIN, constants::QUANTITY_MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::new(constants::QUANTITY_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_adds_grow_by_two_and_keep_order() {
        let mut cart = Cart::default();
        cart.add(3);
        cart.add(7);
        cart.add(3);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.entries(), &[3, 7, 3]);
    }

    #[test]
    fn counter_matches_length_after_each_add() {
        let mut cart = Cart::default();
        assert_eq!(cart.add(1), 1);
        assert_eq!(cart.add(1), 2);
        assert_eq!(cart.add(2), 3);
    }

    #[test]
    fn quantity_never_leaves_bounds() {
        assert_eq!(Quantity::new(4).get(), 4);
        assert_eq!(Quantity::new(0).get(), 1);
        assert_eq!(Quantity::new(99).get(), 10);
        assert_eq!(Quantity::default().get(), 1);
    }
}
