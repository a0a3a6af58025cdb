//! Outbound IP addresses ReadMe sends webhooks from.
//!
//! This is the one endpoint that does not take the API token.

use serde::{Deserialize, Serialize};

use crate::clients::{ApiRequest, HttpClient, HttpMethod, ReadmeResponse};
use crate::resources::ResourceError;

/// Endpoint for outbound IPs.
pub const OUTBOUND_IP_ENDPOINT: &str = "/outbound-ips";

/// An outbound IP address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutboundIp {
    /// An IPv4 address ReadMe sends requests from.
    pub ip_address: String,
}

/// Operations on outbound IPs.
#[allow(async_fn_in_trait)]
pub trait OutboundIpService {
    /// Lists ReadMe's outbound IP addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for request failures.
    async fn get(&self) -> Result<ReadmeResponse<Vec<OutboundIp>>, ResourceError>;
}

/// Client for the outbound IPs endpoint.
#[derive(Clone, Copy, Debug)]
pub struct OutboundIpClient<'a> {
    client: &'a HttpClient,
}

impl<'a> OutboundIpClient<'a> {
    /// Creates an outbound IPs client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify OutboundIpClient implements OutboundIpService at compile time
const _: fn() = || {
    fn assert_service<T: OutboundIpService>() {}
    assert_service::<OutboundIpClient<'static>>();
};

impl OutboundIpService for OutboundIpClient<'_> {
    async fn get(&self) -> Result<ReadmeResponse<Vec<OutboundIp>>, ResourceError> {
        let request = ApiRequest::builder(HttpMethod::Get, OUTBOUND_IP_ENDPOINT)
            .use_auth(false)
            .build()?;
        Ok(self.client.request_json(&request).await?)
    }
}
