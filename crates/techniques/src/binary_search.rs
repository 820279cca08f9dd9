//! Binary search over sorted slices under three bound conventions.
//!
//! Every function takes a comparator that orders an element against the
//! target (`|x| x.cmp(&target)`) and returns the matching index.

use std::cmp::Ordering;

/// Inclusive bounds `[lo, hi]`. With repeated targets any matching index may be returned.
pub fn search<T, F>(seq: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if seq.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0_isize, seq.len() as isize - 1);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(&seq[mid as usize]) {
            Ordering::Equal => return Some(mid as usize),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid - 1,
        }
    }
    None
}

/// Half-open bounds `[lo, hi)`.
pub fn search_right_exclusive<T, F>(seq: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let (mut lo, mut hi) = (0, seq.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(&seq[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Half-open bounds `(lo, hi]`; the midpoint rounds up.
pub fn search_left_exclusive<T, F>(seq: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let (mut lo, mut hi) = (-1_isize, seq.len() as isize - 1);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        match cmp(&seq[mid as usize]) {
            Ordering::Equal => return Some(mid as usize),
            Ordering::Less => lo = mid,
            Ordering::Greater => hi = mid - 1,
        }
    }
    None
}

/// First index of the target in a slice that may repeat it, inclusive bounds.
pub fn search_left_bound<T, F>(seq: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if seq.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0_isize, seq.len() as isize - 1);
    let mut found = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(&seq[mid as usize]) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid - 1,
            Ordering::Equal => {
                found = Some(mid as usize);
                hi = mid - 1;
            }
        }
    }
    found
}

/// First index of the target, bounds `[lo, hi)`.
pub fn search_left_bound_right_exclusive<T, F>(seq: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let (mut lo, mut hi) = (0, seq.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&seq[mid]) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    (lo < seq.len() && cmp(&seq[lo]) == Ordering::Equal).then_some(lo)
}

/// First index of the target, bounds `(lo, hi]`.
///
/// Converges on the last element ordered before the target; the answer is the slot after it.
pub fn search_left_bound_left_exclusive<T, F>(seq: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let (mut lo, mut hi) = (-1_isize, seq.len() as isize - 1);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if cmp(&seq[mid as usize]) == Ordering::Less {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    let candidate = (lo + 1) as usize;
    (candidate < seq.len() && cmp(&seq[candidate]) == Ordering::Equal).then_some(candidate)
}
