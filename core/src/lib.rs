pub mod access;
pub mod net;
pub mod report;
