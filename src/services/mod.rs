pub mod nft;
pub mod reward;
pub mod token;
