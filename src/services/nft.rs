use tonic::{Request, Response, Status};
use tracing::debug;

use crate::{
    constants::REWARD_MESSAGE_PREFIX,
    proto::{
        GetNftOwnershipRequest, GetNftOwnershipResponse, nft_pb::nft_service_server::NftService,
    },
};

/// Echoes the requested token id behind the reward prefix, the reply deployed
/// clients expect. Ownership is not looked up on chain yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NftHandler;

#[tonic::async_trait]
impl NftService for NftHandler {
    async fn get_nft_ownership(
        &self,
        request: Request<GetNftOwnershipRequest>,
    ) -> Result<Response<GetNftOwnershipResponse>, Status> {
        let token_id = request.into_inner().token_id;
        debug!(%token_id, "nft ownership requested");

        let owner = format!("{REWARD_MESSAGE_PREFIX}{token_id}");
        Ok(Response::new(GetNftOwnershipResponse { owner }))
    }
}
