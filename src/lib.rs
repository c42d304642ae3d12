pub mod aggregate;
pub mod attendance;
pub mod error;
pub mod http_client;
pub mod rankings;
pub mod report;
pub mod resolve;
pub mod statsapi;
pub mod teams;
