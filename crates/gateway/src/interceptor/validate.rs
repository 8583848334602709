//! Structural validation of inbound request messages.

use async_trait::async_trait;
use parley_chats::Validator;
use parley_proto::chat_v1::{CreateRequest, DeleteRequest, SendMessageRequest};
use tracing::{debug, warn};

use super::{InboundCall, InboundMessage, Interceptor, Validate};
use crate::error::GatewayResult;

/// Runs the message's own self-check. Messages without one pass.
pub struct ValidateInterceptor;

#[async_trait]
impl Interceptor for ValidateInterceptor {
    async fn intercept(&self, call: &InboundCall<'_>) -> GatewayResult<()> {
        let Some(validator) = call.message.validator() else {
            debug!(method = %call.method, "request has no self-check");
            return Ok(());
        };

        match validator.validate() {
            Ok(()) => {
                debug!(method = %call.method, "request passed validation");
                Ok(())
            }
            Err(error) => {
                warn!(method = %call.method, %error, "request failed validation");
                Err(error)
            }
        }
    }
}

impl Validate for CreateRequest {
    fn validate(&self) -> GatewayResult<()> {
        Validator::chat_name(&self.chat_name)?;
        Validator::member_ids(&self.user_ids)?;
        Ok(())
    }
}

impl InboundMessage for CreateRequest {
    fn validator(&self) -> Option<&dyn Validate> {
        Some(self)
    }
}

impl Validate for SendMessageRequest {
    fn validate(&self) -> GatewayResult<()> {
        Validator::message_text(&self.text)?;
        Ok(())
    }
}

impl InboundMessage for SendMessageRequest {
    fn validator(&self) -> Option<&dyn Validate> {
        Some(self)
    }
}

impl InboundMessage for DeleteRequest {}
