use tonic_build::manual::{Builder, Method, Service};

// Service stubs are generated from hand-written prost messages in `src/proto.rs`,
// so no `protoc` is needed at build time.
fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::proto::{input}"))
        .output_type(format!("crate::proto::{output}"))
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    let reward = Service::builder()
        .name("RewardService")
        .package("reward_pb")
        .method(unary(
            "get_reward_by_random",
            "GetRewardByRandom",
            "GetRewardByRandomRequest",
            "GetRewardByRandomResponse",
        ))
        .build();

    let token = Service::builder()
        .name("TokenService")
        .package("token_pb")
        .method(unary(
            "get_token_balance",
            "GetTokenBalance",
            "GetTokenBalanceRequest",
            "GetTokenBalanceResponse",
        ))
        .build();

    let nft = Service::builder()
        .name("NftService")
        .package("nft_pb")
        .method(unary(
            "get_nft_ownership",
            "GetNftOwnership",
            "GetNftOwnershipRequest",
            "GetNftOwnershipResponse",
        ))
        .build();

    Builder::new()
        .build_client(true)
        .build_server(true)
        .compile(&[reward, token, nft]);

    println!("cargo:rerun-if-changed=build.rs");
}
