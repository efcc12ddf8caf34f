//! Typed client for the Resolume Arena/Avenue REST API.
//!
//! ```no_run
//! # async fn demo() -> resolume_client::Result<()> {
//! use resolume_client::{Address, CancellationToken, ClientConfig, ResolumeClient};
//! use resolume_client::types::Clip;
//!
//! let client = ResolumeClient::new(&ClientConfig::new("127.0.0.1", 8080))?;
//! let cancel = CancellationToken::new();
//! let clip: Clip = client.get(Address::Position { layer: 0, clip: 2 }, &cancel).await?;
//! client.connect(resolume_client::EntityKind::Clip, Address::Id(clip.id), None, &cancel).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Every operation takes a [`CancellationToken`]; cancelling it abandons the
//! in-flight request and the call returns [`Error::Cancelled`].

pub mod catalog;
mod client;
mod codec;
mod config;
mod error;
mod transport;

#[cfg(test)]
mod mock;

pub use catalog::{Address, EntityKind};
pub use client::{Entity, HistoryAction, ResolumeClient};
pub use config::{API_PREFIX, ClientConfig};
pub use error::{Error, Result};
pub use resolume_types as types;
pub use tokio_util::sync::CancellationToken;
