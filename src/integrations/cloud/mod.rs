pub mod client;
pub mod mirror;

pub use client::CloudFunctionClient;
pub use mirror::{NoopRemoteMirror, RemoteMirror};
