pub mod input;
pub mod logging;
