pub mod both_contains;
pub mod insertion_sort;
pub mod knuth_shuffle;
pub mod merge_sort;
pub mod selection_sort;
pub mod shell_sort;

pub use both_contains::{count_both, count_both_quadratic};
pub use insertion_sort::insertion_sort;
pub use knuth_shuffle::knuth_shuffle;
pub use merge_sort::{merge_sort, merge_sort_by};
pub use selection_sort::selection_sort;
pub use shell_sort::shell_sort;
