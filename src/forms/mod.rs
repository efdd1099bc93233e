//! Form types bridging HTTP requests and the service layer.

pub mod client;
