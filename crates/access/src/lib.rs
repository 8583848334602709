//! Client for the remote access-control service.
//!
//! Every inbound chat call is checked against `access_v1.AccessV1/Check`
//! before it reaches a handler. The caller's own `authorization` metadata is
//! forwarded on the outbound request.

use async_trait::async_trait;
use parley_config::AccessConfig;
use parley_proto::access_v1::access_v1_client::AccessV1Client;
use parley_proto::access_v1::CheckRequest;
use thiserror::Error;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Channel, Endpoint};
use tonic::Code;
use tracing::debug;

/// Metadata key carrying the caller's credential.
pub const AUTHORIZATION_HEADER: &str = "authorization";

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("access denied")]
    Denied,
    #[error("access service rejected the check: {}", .0.message())]
    Rejected(tonic::Status),
    #[error("access service unavailable: {}", .0.message())]
    Unavailable(tonic::Status),
    #[error("invalid access service endpoint {endpoint}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },
}

impl AccessError {
    fn from_status(status: tonic::Status) -> Self {
        match status.code() {
            Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled | Code::Unknown => {
                Self::Unavailable(status)
            }
            _ => Self::Rejected(status),
        }
    }
}

/// Authorization round trip used by the interceptor pipeline.
#[async_trait]
pub trait AccessCheck: Send + Sync {
    /// Ask whether the holder of `credential` may call `endpoint_address`.
    /// Only an explicit allow returns `Ok`.
    async fn check(
        &self,
        endpoint_address: &str,
        credential: Option<MetadataValue<Ascii>>,
    ) -> Result<(), AccessError>;
}

#[derive(Clone)]
pub struct AccessClient {
    client: AccessV1Client<Channel>,
}

impl AccessClient {
    /// Build a client whose channel connects on first use. Each check is
    /// bounded by `config.timeout_ms`.
    pub fn connect_lazy(config: &AccessConfig) -> Result<Self, AccessError> {
        let endpoint = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|source| AccessError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?
            .timeout(config.timeout())
            .connect_timeout(config.timeout());

        debug!(endpoint = %config.endpoint, timeout_ms = config.timeout_ms, "access client configured");
        Ok(Self::from_channel(endpoint.connect_lazy()))
    }

    pub fn from_channel(channel: Channel) -> Self {
        Self {
            client: AccessV1Client::new(channel),
        }
    }
}

#[async_trait]
impl AccessCheck for AccessClient {
    async fn check(
        &self,
        endpoint_address: &str,
        credential: Option<MetadataValue<Ascii>>,
    ) -> Result<(), AccessError> {
        let mut request = tonic::Request::new(CheckRequest {
            endpoint_address: endpoint_address.to_string(),
        });
        if let Some(credential) = credential {
            request
                .metadata_mut()
                .insert(AUTHORIZATION_HEADER, credential);
        }

        let mut client = self.client.clone();
        let response = client
            .check(request)
            .await
            .map_err(AccessError::from_status)?;

        if response.into_inner().allowed {
            Ok(())
        } else {
            Err(AccessError::Denied)
        }
    }
}
