//! Wire messages of the reward, token and NFT services.
//!
//! Field numbers match the deployed `reward_pb`, `token_pb` and `nft_pb` protos.

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetRewardByRandomRequest {
    #[prost(int64, tag = "1")]
    pub number: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetRewardByRandomResponse {
    #[prost(string, tag = "1")]
    pub message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetTokenBalanceRequest {
    #[prost(string, tag = "1")]
    pub address: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetTokenBalanceResponse {
    #[prost(string, tag = "1")]
    pub balance: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetNftOwnershipRequest {
    #[prost(string, tag = "1")]
    pub token_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetNftOwnershipResponse {
    #[prost(string, tag = "1")]
    pub owner: String,
}

pub mod reward_pb {
    include!(concat!(env!("OUT_DIR"), "/reward_pb.RewardService.rs"));
}

pub mod token_pb {
    include!(concat!(env!("OUT_DIR"), "/token_pb.TokenService.rs"));
}

pub mod nft_pb {
    include!(concat!(env!("OUT_DIR"), "/nft_pb.NftService.rs"));
}
