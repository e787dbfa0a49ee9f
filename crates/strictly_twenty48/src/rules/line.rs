//! Direction-agnostic line transformation.
//!
//! A move decomposes into independent one-dimensional line transforms.
//! The canonical transform is three linear passes: slide, merge, slide.
//! The second slide is mandatory: a merge in the middle of a line leaves
//! a hole that must be closed without re-triggering a merge against the
//! tiles beyond it.

use crate::types::{GRID_N, Line};

/// Compacts non-zero values toward the front of the line, preserving
/// their relative order.
///
/// Returns the slid line and whether any value changed index.
pub fn slide(line: Line) -> (Line, bool) {
    let mut out = [0; GRID_N];
    let mut write = 0;
    let mut moved = false;

    for (read, &value) in line.iter().enumerate() {
        if value == 0 {
            continue;
        }
        out[write] = value;
        if write != read {
            moved = true;
        }
        write += 1;
    }

    (out, moved)
}

/// Merges adjacent equal pairs in a pre-slid line, left to right.
///
/// Each merge doubles the left value, zeroes the right, and skips past the
/// pair so the doubled value never merges again within the same pass:
/// `[4, 4, 8, 0]` becomes `[8, 0, 8, 0]`, never `[16, 0, 0, 0]`. The holes
/// left by merging are not closed here.
///
/// Returns the merged line, the score gained (the sum of doubled values),
/// and whether any merge occurred.
pub fn merge(line: Line) -> (Line, u32, bool) {
    let mut out = line;
    let mut gain = 0;
    let mut merged = false;

    let mut i = 0;
    while i + 1 < out.len() {
        if out[i] != 0 && out[i] == out[i + 1] {
            out[i] *= 2;
            out[i + 1] = 0;
            gain += out[i];
            merged = true;
            i += 2;
        } else {
            i += 1;
        }
    }

    (out, gain, merged)
}

/// Full line transform: slide, merge, slide again.
///
/// Returns the transformed line, whether anything changed (a value shifted
/// position in either slide or a merge occurred), and the score gained.
pub fn transform(line: Line) -> (Line, bool, u32) {
    let (slid, moved_first) = slide(line);
    let (merged, gain, any_merge) = merge(slid);
    let (closed, moved_second) = slide(merged);
    (closed, moved_first || any_merge || moved_second, gain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide() {
        let cases: [(&str, Line, Line, bool); 4] = [
            ("leading gap closed", [2, 0, 2, 0], [2, 2, 0, 0], true),
            ("already slid", [4, 2, 0, 0], [4, 2, 0, 0], false),
            ("all zeros", [0, 0, 0, 0], [0, 0, 0, 0], false),
            ("mixed", [0, 4, 0, 2], [4, 2, 0, 0], true),
        ];

        for (name, input, want, want_moved) in cases {
            let (got, moved) = slide(input);
            assert_eq!(got, want, "{name}");
            assert_eq!(moved, want_moved, "{name}");
        }
    }

    #[test]
    fn test_merge() {
        // Inputs are pre-slid; expectations are before the closing slide.
        let cases: [(&str, Line, Line, u32, bool); 6] = [
            ("merge at start", [2, 2, 4, 8], [4, 0, 4, 8], 4, true),
            ("merge at end", [4, 8, 2, 2], [4, 8, 4, 0], 4, true),
            ("double merge", [2, 2, 2, 2], [4, 0, 4, 0], 8, true),
            ("no merge", [2, 4, 8, 16], [2, 4, 8, 16], 0, false),
            ("no merge with zeros", [4, 2, 0, 0], [4, 2, 0, 0], 0, false),
            ("no chain reaction", [4, 4, 8, 0], [8, 0, 8, 0], 8, true),
        ];

        for (name, input, want, want_gain, want_merged) in cases {
            let (got, gain, merged) = merge(input);
            assert_eq!(got, want, "{name}");
            assert_eq!(gain, want_gain, "{name}");
            assert_eq!(merged, want_merged, "{name}");
        }
    }

    #[test]
    fn test_transform() {
        let cases: [(&str, Line, Line, bool, u32); 5] = [
            ("slide only", [0, 2, 0, 0], [2, 0, 0, 0], true, 0),
            ("adjacent merge", [2, 2, 0, 0], [4, 0, 0, 0], true, 4),
            ("slide and merge", [0, 2, 2, 0], [4, 0, 0, 0], true, 4),
            ("gap merge", [2, 0, 2, 4], [4, 4, 0, 0], true, 4),
            ("no move", [2, 4, 8, 16], [2, 4, 8, 16], false, 0),
        ];

        for (name, input, want, want_moved, want_gain) in cases {
            let (got, moved, gain) = transform(input);
            assert_eq!(got, want, "{name}");
            assert_eq!(moved, want_moved, "{name}");
            assert_eq!(gain, want_gain, "{name}");
        }
    }

    #[test]
    fn test_transform_closes_merge_holes() {
        // The doubled pair leaves a hole the second slide must close
        // without merging the 8s that become adjacent.
        let (got, moved, gain) = transform([4, 4, 8, 0]);
        assert_eq!(got, [8, 8, 0, 0]);
        assert!(moved);
        assert_eq!(gain, 8);
    }

    #[test]
    fn test_transform_merges_only_first_pair_of_three() {
        let (got, moved, gain) = transform([2, 2, 2, 0]);
        assert_eq!(got, [4, 2, 0, 0]);
        assert!(moved);
        assert_eq!(gain, 4);
    }

    #[test]
    fn test_transform_all_zeros_unchanged() {
        let (got, moved, gain) = transform([0, 0, 0, 0]);
        assert_eq!(got, [0, 0, 0, 0]);
        assert!(!moved);
        assert_eq!(gain, 0);
    }
}
