// External Integrations Module
//
// Only the optional cloud mirror lives here; nothing in the core
// depends on it being reachable.

pub mod cloud;

pub use cloud::{CloudFunctionClient, NoopRemoteMirror, RemoteMirror};
