//! Fast/slow pointer walks over a singly linked structure.
//!
//! The structure is described by a head handle and a `next` function, so any
//! node representation with copyable, comparable handles works.

/// Follows `steps` links from `node`; `None` once the end is passed.
pub fn advance<N, F>(mut node: Option<N>, steps: usize, mut next: F) -> Option<N>
where
    N: Copy,
    F: FnMut(N) -> Option<N>,
{
    for _ in 0..steps {
        node = next(node?);
    }
    node
}

/// Runs the slow (1 step) and fast (2 steps) pointers until the fast one
/// falls off the end or lands on the slow one. Returns the meeting node.
fn meeting_point<N, F>(head: Option<N>, next: &mut F) -> Option<N>
where
    N: Copy + Eq,
    F: FnMut(N) -> Option<N>,
{
    let (mut slow, mut fast) = (head, head);
    loop {
        fast = advance(fast, 2, &mut *next);
        slow = advance(slow, 1, &mut *next);
        match fast {
            None => return None,
            Some(f) if Some(f) == slow => return Some(f),
            Some(_) => {}
        }
    }
}

pub fn has_cycle<N, F>(head: Option<N>, mut next: F) -> bool
where
    N: Copy + Eq,
    F: FnMut(N) -> Option<N>,
{
    meeting_point(head, &mut next).is_some()
}

/// First node on the cycle, or `None` for an acyclic list.
///
/// From the meeting point and from the head, pointers moving one step at a
/// time meet exactly at the start of the cycle.
pub fn cycle_start<N, F>(head: Option<N>, mut next: F) -> Option<N>
where
    N: Copy + Eq,
    F: FnMut(N) -> Option<N>,
{
    let mut fast = meeting_point(head, &mut next)?;
    let mut slow = head?;
    while fast != slow {
        fast = next(fast)?;
        slow = next(slow)?;
    }
    Some(slow)
}
