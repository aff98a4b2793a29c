//! Window splitter.
//!
//! Tiles a closed interval `[start, end]` into windows of `window_size`
//! positions whose starts are `window_size - overlap` apart, followed by a
//! right-anchored trailing window so the interval end is always covered.
//! Intervals no longer than one window come back unchanged.
//!
//! All arithmetic is integer arithmetic widened to `i128`, so coordinates
//! anywhere in `i64` and any `u64` window size are handled without overflow.

use crate::config::WindowParams;
use crate::interval::Interval;
use std::iter::FusedIterator;

/// Ceiling division for `b > 0`, rounding toward positive infinity.
#[inline]
fn div_ceil(a: i128, b: i128) -> i128 {
    debug_assert!(b > 0);
    let q = a / b;
    if a % b > 0 {
        q + 1
    } else {
        q
    }
}

/// Lazy sequence of windows covering one interval.
///
/// Produces exactly the same windows, in the same order, as
/// [`split_interval`], without materialising them.
#[derive(Debug, Clone)]
pub struct Windows {
    start: i128,
    window: i128,
    step: i128,
    /// Number of step windows still to emit
    remaining: u128,
    /// Index of the next step window
    next: i128,
    /// Start of the last step window emitted, if any
    last_start: Option<i128>,
    trailing: Option<Interval>,
}

impl Windows {
    /// Prepare the windows for `interval`.
    ///
    /// Requires `window_size >= 1`, `overlap < window_size` and
    /// `interval.start <= interval.end`.
    pub fn new(interval: Interval, window_size: u64, overlap: u64) -> Self {
        debug_assert!(window_size >= 1);
        debug_assert!(overlap < window_size);
        debug_assert!(interval.start <= interval.end);

        let start = interval.start as i128;
        let end = interval.end as i128;
        let window = window_size as i128;
        let step = window - overlap as i128;

        let n_windows = div_ceil(end - start + 1 - window, step).max(0);

        // Clamping keeps short intervals whole.
        let trailing = Interval::new((end - window + 1).max(start) as i64, interval.end);

        Self {
            start,
            window,
            step,
            remaining: n_windows as u128,
            next: 0,
            last_start: None,
            trailing: Some(trailing),
        }
    }

    /// Prepare the windows for `interval` using validated parameters.
    pub fn with_params(interval: Interval, params: &WindowParams) -> Self {
        Self::new(interval, params.window_size(), params.overlap())
    }
}

impl Iterator for Windows {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        if self.remaining > 0 {
            self.remaining -= 1;
            let ws = self.start + self.next * self.step;
            self.next += 1;
            self.last_start = Some(ws);
            // Step windows lie strictly inside the interval, so both ends fit in i64.
            return Some(Interval::new(ws as i64, (ws + self.window - 1) as i64));
        }

        let trailing = self.trailing.take()?;
        match self.last_start {
            Some(ws)
                if ws == trailing.start as i128
                    && ws + self.window - 1 == trailing.end as i128 =>
            {
                None
            }
            _ => Some(trailing),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every step window ends before the interval end, so the trailing
        // window is never a repeat and always counts.
        let total = self.remaining + u128::from(self.trailing.is_some());
        match usize::try_from(total) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Windows {}

impl FusedIterator for Windows {}

/// Split `interval` into overlapping windows.
///
/// Requires `window_size >= 1`, `overlap < window_size` and
/// `interval.start <= interval.end`; callers validate through
/// [`WindowParams`](crate::config::WindowParams).
///
/// # Example
///
/// ```
/// use split_intervals::interval::Interval;
/// use split_intervals::split::split_interval;
///
/// let windows = split_interval(Interval::new(151, 300), 100, 50);
/// assert_eq!(windows, vec![Interval::new(151, 250), Interval::new(201, 300)]);
/// ```
pub fn split_interval(interval: Interval, window_size: u64, overlap: u64) -> Vec<Interval> {
    Windows::new(interval, window_size, overlap).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(start: i64, end: i64, window: u64, overlap: u64) -> Vec<(i64, i64)> {
        split_interval(Interval::new(start, end), window, overlap)
            .into_iter()
            .map(|w| (w.start, w.end))
            .collect()
    }

    #[test]
    fn test_div_ceil() {
        assert_eq!(div_ceil(-50, 100), 0);
        assert_eq!(div_ceil(-150, 100), -1);
        assert_eq!(div_ceil(0, 7), 0);
        assert_eq!(div_ceil(1, 7), 1);
        assert_eq!(div_ceil(7, 7), 1);
        assert_eq!(div_ceil(8, 7), 2);
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(split(151, 300, 100, 50), vec![(151, 250), (201, 300)]);
        assert_eq!(split(101, 201, 100, 50), vec![(101, 200), (102, 201)]);
        assert_eq!(
            split(231, 530, 100, 50),
            vec![(231, 330), (281, 380), (331, 430), (381, 480), (431, 530)]
        );
        assert_eq!(split(1, 53, 100, 50), vec![(1, 53)]);
        assert_eq!(split(1, 200, 100, 0), vec![(1, 100), (101, 200)]);
        assert_eq!(split(1, 200, 100, 20), vec![(1, 100), (81, 180), (101, 200)]);
    }

    #[test]
    fn test_interval_equal_to_window() {
        assert_eq!(split(1, 100, 100, 50), vec![(1, 100)]);
        assert_eq!(split(1, 100, 100, 0), vec![(1, 100)]);
    }

    #[test]
    fn test_single_position() {
        assert_eq!(split(42, 42, 1, 0), vec![(42, 42)]);
        assert_eq!(split(42, 42, 100, 50), vec![(42, 42)]);
    }

    #[test]
    fn test_window_of_one() {
        assert_eq!(split(1, 4, 1, 0), vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_contiguous_tiling_without_overlap() {
        let windows = split(1, 1000, 100, 0);
        assert_eq!(windows.len(), 10);
        for pair in windows.windows(2) {
            assert_eq!(pair[0].1 + 1, pair[1].0);
        }
    }

    #[test]
    fn test_negative_coordinates() {
        assert_eq!(split(-99, 100, 100, 0), vec![(-99, 0), (1, 100)]);
    }

    #[test]
    fn test_extreme_coordinates() {
        let windows = split(i64::MAX - 149, i64::MAX, 100, 50);
        assert_eq!(
            windows,
            vec![
                (i64::MAX - 149, i64::MAX - 50),
                (i64::MAX - 99, i64::MAX)
            ]
        );

        assert_eq!(
            split(i64::MIN, i64::MIN + 9, u64::MAX, 0),
            vec![(i64::MIN, i64::MIN + 9)]
        );
    }

    #[test]
    fn test_properties_hold_over_parameter_grid() {
        for &(start, end) in &[(1, 1), (1, 53), (10, 109), (10, 110), (5, 1234), (-300, 299)] {
            for window in [1u64, 2, 7, 50, 100, 333] {
                for overlap in [0u64, 1, 3, 49, 99, 332] {
                    if overlap >= window {
                        continue;
                    }
                    let windows = split(start, end, window, overlap);
                    let length = end - start + 1;

                    // anchoring
                    assert_eq!(windows.first().unwrap().0, start);
                    assert_eq!(windows.last().unwrap().1, end);

                    // bounds and size
                    for &(ws, we) in &windows {
                        assert!(start <= ws && we <= end);
                        if length >= window as i64 {
                            assert_eq!(we - ws + 1, window as i64);
                        } else {
                            assert_eq!((ws, we), (start, end));
                        }
                    }

                    // no duplicates, no gaps
                    for pair in windows.windows(2) {
                        assert_ne!(pair[0], pair[1]);
                        assert!(pair[1].0 <= pair[0].1 + 1);
                        assert!(pair[1].0 > pair[0].0);
                    }

                    // determinism
                    assert_eq!(windows, split(start, end, window, overlap));
                }
            }
        }
    }

    #[test]
    fn test_lazy_matches_eager_and_fuses() {
        let interval = Interval::new(231, 530);
        let mut iter = Windows::new(interval, 100, 50);
        let collected: Vec<_> = iter.by_ref().collect();
        assert_eq!(collected, split_interval(interval, 100, 50));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_len_is_exact() {
        let mut iter = Windows::new(Interval::new(1, 200), 100, 0);
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
        iter.next();
        assert_eq!(iter.len(), 0);

        assert_eq!(Windows::new(Interval::new(1, 53), 100, 50).len(), 1);

        for &(start, end, window, overlap) in &[
            (231, 530, 100, 50),
            (1, 200, 100, 20),
            (101, 201, 100, 50),
            (5, 1234, 7, 3),
        ] {
            let iter = Windows::new(Interval::new(start, end), window, overlap);
            let expected = iter.len();
            assert_eq!(iter.count(), expected);
        }
    }

    #[test]
    fn test_with_params() {
        let params = WindowParams::new(100, 20).unwrap();
        let windows: Vec<_> = Windows::with_params(Interval::new(1, 200), &params).collect();
        assert_eq!(
            windows,
            vec![
                Interval::new(1, 100),
                Interval::new(81, 180),
                Interval::new(101, 200)
            ]
        );
    }
}
