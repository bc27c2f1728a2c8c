/// Ratios of adjacent streak magnitudes, `|s[i]| / |s[i + 1]|`.
///
/// Empty when there are fewer than two streaks. Streaks are never zero, so
/// no ratio divides by zero.
pub fn streak_ratios(streaks: &[i32]) -> Vec<f32> {
    streaks
        .windows(2)
        .map(|w| w[0].unsigned_abs() as f32 / w[1].unsigned_abs() as f32)
        .collect()
}

/// Positions whose ratio lies strictly inside `(low, high)`.
pub fn accepted_indices(ratios: &[f32], low: f32, high: f32) -> Vec<usize> {
    ratios
        .iter()
        .enumerate()
        .filter(|&(_, &r)| r > low && r < high)
        .map(|(i, _)| i)
        .collect()
}

/// Pixel boundaries of each streak: `offsets[j]` is the pixel offset where
/// streak `j` starts, and the final entry is the total pixel count.
pub fn streak_offsets(streaks: &[i32]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(streaks.len() + 1);
    let mut acc = 0usize;
    offsets.push(acc);
    for s in streaks {
        acc += s.unsigned_abs() as usize;
        offsets.push(acc);
    }
    offsets
}
