//! Interceptor pipeline wrapped around every inbound chat call.
//!
//! Stages run in order and either pass the call on untouched or end it with
//! an error. The handler only runs once every stage has passed.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use parley_access::AccessCheck;
use tonic::metadata::MetadataMap;
use tonic::{Request, Response, Status};
use tracing::error;

use crate::error::{GatewayError, GatewayResult};

pub mod auth;
pub mod validate;

pub use auth::AuthInterceptor;
pub use validate::ValidateInterceptor;

/// Structural self-check offered by request messages that need one.
pub trait Validate: Send + Sync {
    fn validate(&self) -> GatewayResult<()>;
}

/// Request message as seen by the pipeline.
pub trait InboundMessage: Send + Sync {
    /// The message's self-check, when it has one.
    fn validator(&self) -> Option<&dyn Validate> {
        None
    }
}

/// Read-only view of a call handed to each stage.
pub struct InboundCall<'a> {
    pub method: &'a str,
    pub metadata: &'a MetadataMap,
    pub message: &'a dyn InboundMessage,
}

#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn intercept(&self, call: &InboundCall<'_>) -> GatewayResult<()>;
}

#[derive(Clone)]
pub struct InterceptorChain {
    stages: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    pub fn new(stages: Vec<Arc<dyn Interceptor>>) -> Self {
        Self { stages }
    }

    /// Validation first, then the remote access check.
    pub fn standard(access: Arc<dyn AccessCheck>) -> Self {
        Self::new(vec![
            Arc::new(ValidateInterceptor),
            Arc::new(AuthInterceptor::new(access)),
        ])
    }

    /// Run every stage for `request`, then hand its message to `handler`.
    pub async fn run<T, R, F, Fut>(
        &self,
        method: &str,
        request: Request<T>,
        handler: F,
    ) -> Result<Response<R>, Status>
    where
        T: InboundMessage,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = GatewayResult<R>> + Send,
    {
        {
            let call = InboundCall {
                method,
                metadata: request.metadata(),
                message: request.get_ref(),
            };
            for stage in &self.stages {
                stage.intercept(&call).await?;
            }
        }

        match handler(request.into_inner()).await {
            Ok(response) => Ok(Response::new(response)),
            Err(failure) => {
                if let GatewayError::Internal(source) = &failure {
                    error!(method, error = %source, "chat call failed in the store");
                }
                Err(failure.into())
            }
        }
    }
}
