//! Win and tie detection rules.

mod tie;
mod win;

pub use tie::is_full;
pub use win::{WIN_LINES, is_win_for, winner};
