pub mod cleanup;
pub mod standup;
