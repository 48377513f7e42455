//! UI Components
//!
//! Leptos components for the housework board.

mod done_housework_dialog;
mod housework_list;
mod member_select;

pub use done_housework_dialog::DoneHouseworkDialog;
pub use housework_list::HouseworkList;
pub use member_select::MemberSelect;
