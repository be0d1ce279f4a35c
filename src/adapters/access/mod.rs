//! Access checker adapters.

mod allow_list;

pub use allow_list::AllowListAccessChecker;
