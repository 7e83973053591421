pub mod exit;
pub mod input;
pub mod log;
pub mod output;
