//! Neighborhood sampling strategies shared by the windowed filters.
//!
//! Two boundary policies coexist and are not interchangeable:
//!
//! - the **flat-offset policy** walks the 3x3 neighborhood as flat buffer
//!   offsets and only checks that each offset lands inside the buffer, so a
//!   candidate at the left or right image edge can wrap into the adjacent
//!   row;
//! - the **2D-coordinate policy** checks x and y independently and simply
//!   excludes out-of-range candidates.
//!
//! Dilate and erode depend on the first, the mean-based filters on the
//! second. Keep them separate; unifying them changes filter output at the
//! image edges.

use crate::buffer::CHANNELS;

/// Flat pixel-index deltas of the 3x3 neighborhood, center included.
pub(crate) fn flat_kernel(width: u32) -> [i64; 9] {
    let w = i64::from(width);
    [-1, 0, 1, -w, w, -w - 1, -w + 1, w - 1, w + 1]
}

/// Fold the red channel of every accepted 3x3 neighbor into `init`.
///
/// A candidate is accepted when its flat byte offset lands inside `bytes`.
/// The x coordinate is never validated on its own, so edge pixels read a
/// value from the adjacent row instead of skipping the candidate. The
/// morphology filters and their regression tests rely on that wrap.
pub(crate) fn fold_flat_neighbors(
    bytes: &[u8],
    width: u32,
    byte_index: usize,
    init: u8,
    mut fold: impl FnMut(u8, u8) -> u8,
) -> u8 {
    let mut acc = init;
    for delta in flat_kernel(width) {
        let offset = byte_index as i64 + delta * CHANNELS as i64;
        if offset >= 0 && (offset as usize) < bytes.len() {
            acc = fold(acc, bytes[offset as usize]);
        }
    }
    acc
}

/// Visit every in-bounds coordinate of the square window of half-size
/// `half` centered on `(x, y)`.
pub(crate) fn for_each_in_window(
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    half: i64,
    mut visit: impl FnMut(u32, u32),
) {
    for dy in -half..=half {
        let sy = i64::from(y) + dy;
        if sy < 0 || sy >= i64::from(height) {
            continue;
        }
        for dx in -half..=half {
            let sx = i64::from(x) + dx;
            if sx < 0 || sx >= i64::from(width) {
                continue;
            }
            visit(sx as u32, sy as u32);
        }
    }
}

/// Mean of `sample` over the in-bounds part of the window, normalized by
/// the number of coordinates actually visited. The center is always in
/// range, so the count is never zero.
pub(crate) fn window_mean(
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    half: i64,
    mut sample: impl FnMut(u32, u32) -> f64,
) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for_each_in_window(width, height, x, y, half, |sx, sy| {
        sum += sample(sx, sy);
        count += 1;
    });
    sum / f64::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_policy_wraps_across_rows() {
        // 4x2 image, single pass over the red channel. Pixel (0, 1) sits at
        // flat index 4; its -1 candidate is flat index 3, i.e. the last
        // pixel of the previous row, which is geometrically not a neighbor.
        let mut bytes = vec![0u8; 4 * 2 * 4];
        bytes[3 * 4] = 200; // red of pixel (3, 0)

        let max = fold_flat_neighbors(&bytes, 4, 4 * 4, 0, u8::max);
        assert_eq!(max, 200);
    }

    #[test]
    fn test_flat_policy_skips_out_of_buffer_offsets() {
        // Top-left pixel of a 3x3 image: five candidates fall before the
        // start of the buffer and are dropped, the rest fold normally.
        let mut visited = 0;
        let bytes = vec![7u8; 3 * 3 * 4];
        fold_flat_neighbors(&bytes, 3, 0, 0, |acc, v| {
            visited += 1;
            acc.max(v)
        });
        // Accepted deltas for flat index 0: {0, 1, w, w-1, w+1}.
        assert_eq!(visited, 5);
    }

    #[test]
    fn test_window_rejects_both_axes_independently() {
        let mut coords = Vec::new();
        for_each_in_window(3, 3, 0, 0, 1, |x, y| coords.push((x, y)));
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_window_mean_normalizes_by_actual_count() {
        // Corner of a constant field: 4 of 9 candidates are in range and
        // the mean must still come out exact.
        let mean = window_mean(5, 5, 0, 0, 1, |_, _| 80.0);
        assert!((mean - 80.0).abs() < 1e-9);
    }
}
