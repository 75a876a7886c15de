pub mod clipboard;
pub mod gh;
pub mod git;
pub mod linear;
pub mod terminal;
