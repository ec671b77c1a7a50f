use std::sync::OnceLock;

/// The number of permutations for a 3x3 neighborhood of cells
const PERMUTATIONS: usize = 1 << 9;
/// Bit of the cell being updated within a neighborhood
pub(super) const CENTER: usize = 0b000_010_000;

type RuleTable = [bool; PERMUTATIONS];

/// Returns a Singleton lookup table for B3/S23
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
pub(super) fn rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(generate_rule_table)
}

/// Creates a lookup table for B3/S23
///
/// The table is indexed by a 9-bit neighborhood, three bits per row with the
/// top row in the low bits. The center cell is the middle-most bit, `1 << 4`.
/// Off-grid neighbors are expected to be zero bits.
///
/// Returns whether the center cell is alive in the next generation
pub(super) fn generate_rule_table() -> RuleTable {
    let mut table = [false; PERMUTATIONS];
    for (i, next) in table.iter_mut().enumerate() {
        let neighbors = (i & !CENTER).count_ones();
        let alive = i & CENTER != 0;
        *next = matches!((alive, neighbors), (true, 2) | (_, 3));
    }
    table
}
