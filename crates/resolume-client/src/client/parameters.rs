//! Parameters addressed by their unique id.
//!
//! The remote does not say up front which kind a parameter is, so reads go
//! through [`Parameter::from_value`] and dispatch on the `valuetype` tag.

use tokio_util::sync::CancellationToken;

use resolume_types::{Parameter, ResetParameter};

use super::{Call, ResolumeClient};
use crate::catalog::{Address, Operation, ResponseKind, Scope};
use crate::codec::{self, RequestBody};
use crate::error::Result;

impl ResolumeClient {
    /// Retrieve a parameter of any kind.
    pub async fn parameter(&self, id: i64, cancel: &CancellationToken) -> Result<Parameter> {
        let call = Call::new(Scope::Parameter, Operation::Get).at(Address::Id(id));
        let reply = self.send(call, Some(ResponseKind::Json), cancel).await?;
        codec::decode_parameter(&reply.body, &reply.route.to_string())
    }

    /// Update a parameter. The `valuetype` tag is written from the variant.
    pub async fn set_parameter(
        &self,
        id: i64,
        parameter: &Parameter,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let call = Call::new(Scope::Parameter, Operation::Replace)
            .at(Address::Id(id))
            .body(RequestBody::json(parameter)?);
        self.run(call, cancel).await
    }

    /// Reset a parameter to its default value.
    pub async fn reset_parameter_by_id(
        &self,
        id: i64,
        options: ResetParameter,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let call = Call::new(Scope::Parameter, Operation::ResetParameter)
            .at(Address::Id(id))
            .body(RequestBody::json(&options)?);
        self.run(call, cancel).await
    }
}
