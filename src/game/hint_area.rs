use std::collections::BTreeSet;

use itertools::iproduct;

/// Block of squares around the odd one out, highlighted when a hint is used.
///
/// The grid is cut into blocks of side `ceil(n / 2)` (at least 2), aligned to block multiples and
/// pushed back inside the grid at the far edge. The block holding the target is returned, so the
/// target is never at a predictable position within it.
pub fn calculate_hint_area(grid_size: usize, different_square_index: usize) -> BTreeSet<usize> {
    let n = grid_size.max(1);
    let index = different_square_index.min(n * n - 1);
    let block = n.div_ceil(2).max(2).min(n);

    let row = index / n;
    let col = index % n;
    let start_row = ((row / block) * block).min(n - block);
    let start_col = ((col / block) * block).min(n - block);

    iproduct!(start_row..start_row + block, start_col..start_col + block)
        .map(|(r, c)| r * n + c)
        .collect()
}
