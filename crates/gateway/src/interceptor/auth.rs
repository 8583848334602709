//! Remote authorization stage.

use std::sync::Arc;

use async_trait::async_trait;
use parley_access::{AccessCheck, AUTHORIZATION_HEADER};
use tracing::{debug, warn};

use super::{InboundCall, Interceptor};
use crate::error::{GatewayError, GatewayResult};

/// Asks the access-control service whether the caller may invoke the method.
/// The caller's own credential is forwarded. Any failure denies the call.
pub struct AuthInterceptor {
    access: Arc<dyn AccessCheck>,
}

impl AuthInterceptor {
    pub fn new(access: Arc<dyn AccessCheck>) -> Self {
        Self { access }
    }
}

#[async_trait]
impl Interceptor for AuthInterceptor {
    async fn intercept(&self, call: &InboundCall<'_>) -> GatewayResult<()> {
        let credential = call.metadata.get(AUTHORIZATION_HEADER).cloned();
        let has_credential = credential.is_some();

        match self.access.check(call.method, credential).await {
            Ok(()) => {
                debug!(method = %call.method, "access granted");
                Ok(())
            }
            Err(error) => {
                warn!(method = %call.method, has_credential, %error, "access check failed");
                Err(GatewayError::PermissionDenied(error))
            }
        }
    }
}
