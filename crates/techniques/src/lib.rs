pub mod binary_search;
pub mod two_pointer;

pub use binary_search::{
    search, search_left_bound, search_left_bound_left_exclusive,
    search_left_bound_right_exclusive, search_left_exclusive, search_right_exclusive,
};
pub use two_pointer::{advance, cycle_start, has_cycle};
