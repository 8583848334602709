//! # Parley Gateway Crate
//!
//! gRPC surface of the chat backend. Every call passes through an
//! [`InterceptorChain`] (validation, then the remote access check) before the
//! handler hands it to the chat service.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use parley_gateway::build_service;
//!
//! # async fn demo(
//! #     service: Arc<dyn parley_chats::ChatService>,
//! #     access: Arc<dyn parley_access::AccessCheck>,
//! # ) -> Result<(), tonic::transport::Error> {
//! tonic::transport::Server::builder()
//!     .add_service(build_service(service, access))
//!     .serve("127.0.0.1:50052".parse().unwrap())
//!     .await
//! # }
//! ```

pub mod api;
pub mod converter;
pub mod error;
pub mod interceptor;

use std::sync::Arc;

use parley_access::AccessCheck;
use parley_chats::ChatService;
use parley_proto::chat_v1::chat_v1_server::ChatV1Server;

pub use api::ChatApi;
pub use error::{GatewayError, GatewayResult};
pub use interceptor::{
    AuthInterceptor, InboundCall, InboundMessage, Interceptor, InterceptorChain, Validate,
    ValidateInterceptor,
};

/// Build the `ChatV1` service wrapped in the standard interceptor chain.
pub fn build_service(
    service: Arc<dyn ChatService>,
    access: Arc<dyn AccessCheck>,
) -> ChatV1Server<ChatApi> {
    ChatV1Server::new(ChatApi::new(service, InterceptorChain::standard(access)))
}
