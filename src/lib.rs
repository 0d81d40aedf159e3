pub mod config;
pub mod error;
pub mod notice;
pub mod quote;
pub mod screen;
pub mod system;
pub mod ui;
pub mod voice;
pub mod worker;

#[cfg(test)]
pub(crate) mod testing;
