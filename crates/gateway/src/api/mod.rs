//! gRPC handlers.

pub mod chat;

pub use chat::ChatApi;
