pub mod branch;
pub mod pull_request;
pub mod standup;
pub mod ticket;
