use std::{str::FromStr, sync::Arc};

use alloy_primitives::{Address, U256};
use tonic::{Request, Response, Status};
use tracing::{debug, warn};

use crate::{
    basic_elements::args::Args,
    client::{connection::ContractContext, view::call_view},
    proto::{
        GetTokenBalanceRequest, GetTokenBalanceResponse,
        token_pb::token_service_server::TokenService,
    },
};

pub const BALANCE_OF: &str = "balanceOf";

/// Token balances read from the contract with `balanceOf`.
#[derive(Clone)]
pub struct TokenHandler {
    context: Arc<ContractContext>,
}

impl TokenHandler {
    pub fn new(context: Arc<ContractContext>) -> Self {
        Self { context }
    }

    /// Decimal balance of `address`, in the token's smallest unit.
    pub async fn balance_of(&self, address: &str) -> Result<String, Status> {
        let owner = Address::from_str(address.trim()).map_err(|e| {
            Status::invalid_argument(format!("invalid address {address:?}: {e}"))
        })?;

        let config = self.context.get_config().await?;
        let args = Args::new().add_address(owner);
        let mut result = call_view(&config, BALANCE_OF, U256::ZERO, &args)
            .await
            .inspect_err(|e| warn!(%owner, error = %e, "balanceOf failed"))?;

        let balance = result.next_u256()?;
        debug!(%owner, %balance, "balance read");
        Ok(balance.to_string())
    }
}

#[tonic::async_trait]
impl TokenService for TokenHandler {
    async fn get_token_balance(
        &self,
        request: Request<GetTokenBalanceRequest>,
    ) -> Result<Response<GetTokenBalanceResponse>, Status> {
        let address = request.into_inner().address;
        let balance = self.balance_of(&address).await?;
        Ok(Response::new(GetTokenBalanceResponse { balance }))
    }
}
