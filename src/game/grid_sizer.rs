pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 10;

/// Side length of the square grid for `level`. Grows by one every two levels, from 2x2 at level 1
/// up to `MAX_GRID_SIZE`.
pub fn grid_size(level: u32) -> usize {
    let level = level.max(1) as usize;
    (MIN_GRID_SIZE + (level - 1) / 2).min(MAX_GRID_SIZE)
}
