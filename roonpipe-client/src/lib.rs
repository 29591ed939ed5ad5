mod client;
pub mod wire;

pub use client::{ClientError, RoonPipeClient, default_socket_path, request_timeout};
