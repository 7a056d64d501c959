pub const DEFAULT_INITIAL_CAPACITY: usize = 10; // buckets allocated by `new()`
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7; // growth trigger, checked after insert
pub const DEFAULT_GROWTH_FACTOR: usize = 2; // capacity multiplier on growth

/// Tuning knobs for a table instance, fixed at construction.
///
/// All three fields default to the module constants above. Values that would
/// break the table's invariants are clamped by [`TableOptions::normalized`]
/// rather than rejected: a table with one bucket is slow, not wrong.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    /// Number of buckets allocated up front. Clamped to >= 1.
    pub initial_capacity: usize,
    /// Load factor above which an insert triggers growth. Clamped to (0, 1].
    pub max_load_factor: f64,
    /// Capacity multiplier applied on growth. Clamped to >= 2.
    pub growth_factor: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl TableOptions {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Returns a copy with every field forced into its valid range.
    pub fn normalized(self) -> Self {
        let max_load_factor = if self.max_load_factor.is_finite() && self.max_load_factor > 0.0 {
            self.max_load_factor.min(1.0)
        } else {
            DEFAULT_MAX_LOAD_FACTOR
        };
        Self {
            initial_capacity: self.initial_capacity.max(1),
            max_load_factor,
            growth_factor: self.growth_factor.max(2),
        }
    }
}
