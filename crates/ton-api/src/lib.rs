//! HTTP clients for the TON chain data APIs.
//!
//! [`ToncenterClient`] covers the toncenter-style account information
//! endpoint; [`TonapiClient`] covers the tonapi.io jetton and NFT holdings
//! endpoints. Both are thin typed wrappers over single GET requests.

pub mod models;
pub mod tonapi;
pub mod toncenter;

pub use models::{
    AccountState, AddressInformation, JettonBalance, JettonBalances, JettonInfo, NftItem,
    NftItems, NftMetadata,
};
pub use tonapi::TonapiClient;
pub use toncenter::ToncenterClient;
