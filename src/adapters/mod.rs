pub mod forwarding;
pub mod http;
pub mod persistence;
