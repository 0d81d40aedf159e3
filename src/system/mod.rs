pub mod clipboard;
pub mod share;
