//! Typed client operations.
//!
//! Every public operation resolves a catalog route, encodes its body, runs
//! one request through the transport and decodes the reply. The client
//! keeps no state between calls besides the base URL and connection pool,
//! so it can be cloned and shared across tasks freely.

mod composition;
mod entities;
mod media;
mod parameters;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::catalog::{self, Address, EntityKind, Operation, ResponseKind, Route, Scope, Slot};
use crate::codec::{self, RequestBody};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::Transport;

pub use composition::HistoryAction;
pub use entities::Entity;

/// Client for the Resolume REST API.
#[derive(Clone, Debug)]
pub struct ResolumeClient {
    transport: Transport,
}

/// Route-level request, before path resolution.
struct Call<'a> {
    scope: Scope,
    address: Option<Address>,
    operation: Operation,
    slots: &'a [Slot],
    body: RequestBody,
}

impl<'a> Call<'a> {
    fn new(scope: Scope, operation: Operation) -> Self {
        Self {
            scope,
            address: None,
            operation,
            slots: &[],
            body: RequestBody::Empty,
        }
    }

    fn entity(kind: EntityKind, address: Address, operation: Operation) -> Self {
        Self::new(Scope::Entity(kind), operation).at(address)
    }

    fn at(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    fn slots(mut self, slots: &'a [Slot]) -> Self {
        self.slots = slots;
        self
    }

    fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

impl ResolumeClient {
    /// Build a client for the configured host and port.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::with_base_url(&config.base_url())
    }

    /// Build a client against an explicit base URL (including `/api/v1`).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Resolve and execute a call. With `expect`, the route's reply kind is
    /// checked before anything is sent.
    async fn send(
        &self,
        call: Call<'_>,
        expect: Option<ResponseKind>,
        cancel: &CancellationToken,
    ) -> Result<Reply> {
        let resolved = catalog::resolve(call.scope, call.address, call.operation, call.slots)?;
        let route = resolved.route;
        if !call.body.fits(route.request) {
            return Err(Error::InvalidArgument(format!(
                "{route} expects a {:?} body",
                route.request
            )));
        }
        if let Some(kind) = expect {
            if route.response != kind {
                return Err(Error::InvalidArgument(format!(
                    "{route} replies with {:?}, not {kind:?}",
                    route.response
                )));
            }
        }
        let resp = self
            .transport
            .execute(route.verb, &resolved.path, call.body, cancel)
            .await?;
        tracing::debug!(%route, status = resp.status, "resolume call complete");
        Ok(Reply {
            route,
            body: resp.body,
        })
    }

    /// Run a call that only reports success or failure.
    async fn run(&self, call: Call<'_>, cancel: &CancellationToken) -> Result<()> {
        self.send(call, None, cancel).await.map(|_| ())
    }

    /// Run a call and decode its JSON reply.
    async fn fetch<T: DeserializeOwned>(
        &self,
        call: Call<'_>,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let reply = self.send(call, Some(ResponseKind::Json), cancel).await?;
        codec::decode(&reply.body, &reply.route.to_string())
    }

    /// Run a call and return the raw reply body.
    async fn fetch_bytes(&self, call: Call<'_>, cancel: &CancellationToken) -> Result<Vec<u8>> {
        let reply = self.send(call, Some(ResponseKind::Bytes), cancel).await?;
        Ok(reply.body)
    }
}

struct Reply {
    route: &'static Route,
    body: Vec<u8>,
}
