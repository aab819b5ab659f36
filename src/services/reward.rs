use tonic::{Request, Response, Status};
use tracing::debug;

use crate::{
    constants::REWARD_MESSAGE_PREFIX,
    proto::{
        GetRewardByRandomRequest, GetRewardByRandomResponse,
        reward_pb::reward_service_server::RewardService,
    },
};

/// Pure arithmetic; never touches the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardHandler;

/// Widened so that every `int64` input has an exact reward.
pub fn reward_message(number: i64) -> String {
    let reward = i128::from(number) + 2;
    format!("{REWARD_MESSAGE_PREFIX}{reward}")
}

#[tonic::async_trait]
impl RewardService for RewardHandler {
    async fn get_reward_by_random(
        &self,
        request: Request<GetRewardByRandomRequest>,
    ) -> Result<Response<GetRewardByRandomResponse>, Status> {
        let number = request.into_inner().number;
        debug!(number, "reward requested");

        let message = reward_message(number);
        Ok(Response::new(GetRewardByRandomResponse { message }))
    }
}
