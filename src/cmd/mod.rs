pub mod menu;
pub mod standup;
