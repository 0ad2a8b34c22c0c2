use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::metadata::GearAttributes;

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner address — receives mint payments, mints for free
    pub owner: String,
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Prefix for token URIs, e.g. `https://gear.ridgeline.gg/meta`
    pub base_uri: String,
    /// Hard cap on the number of tokens that can ever be minted
    pub max_supply: u64,
    /// Native denom mint prices are quoted in
    pub price_denom: String,
    /// Initial mint-price menu
    pub prices: Vec<GearPrice>,
}

/// One entry of the mint-price menu.
#[cw_serde]
pub struct GearPrice {
    pub gear_type: String,
    pub price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a priced gear item to `to`. Anyone may call; the attached
    /// payment must cover the gear type's price unless the sender is the
    /// contract owner. Attached funds are forwarded to the owner.
    MintItem { gear_type: String, to: String },
    /// Transfer `token_id` from `from` to `to` (owner, approved spender, or
    /// operator of `from`)
    TransferFrom {
        from: String,
        to: String,
        token_id: String,
    },
    /// Send an NFT to a contract with a callback message
    SendNft {
        contract: String,
        token_id: String,
        msg: cosmwasm_std::Binary,
    },
    /// Approve a spender for a specific token (token owner or operator)
    Approve { spender: String, token_id: String },
    /// Revoke the per-token approval (token owner or operator)
    Revoke { token_id: String },
    /// Grant or withdraw blanket transfer rights over all of the sender's
    /// tokens
    SetApprovalForAll { operator: String, approved: bool },
    /// Create or overwrite a gear type's mint price (owner only)
    SetPrice { gear_type: String, price: Uint128 },
    /// Overwrite a token's rarity grade (owner only)
    SetRarity { token_id: String, rarity: String },
    /// Replace a token's numeric attributes, leaving gear type and rarity
    /// untouched (owner only)
    UpdateItemMetadata {
        token_id: String,
        xp: u32,
        magnitude: u32,
        condition: u32,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Collection name, symbol, and supply figures
    #[returns(CollectionInfoResponse)]
    CollectionInfo {},
    /// Get the owner of a token
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: String },
    /// Number of tokens held by an address (0 for unknown addresses)
    #[returns(BalanceResponse)]
    BalanceOf { address: String },
    /// The approved spender for a token, if any
    #[returns(ApprovedResponse)]
    GetApproved { token_id: String },
    /// Whether `operator` holds blanket transfer rights for `owner`
    #[returns(OperatorResponse)]
    IsApprovedForAll { owner: String, operator: String },
    /// Full token record: owner, attributes, approval
    #[returns(NftInfoResponse)]
    NftInfo { token_id: String },
    /// Metadata URI: `{base_uri}/{token_id}?{rendered attributes}`
    #[returns(TokenUriResponse)]
    TokenUri { token_id: String },
    /// Mint price for one gear type
    #[returns(GearPrice)]
    GetPrice { gear_type: String },
    /// Number of tokens minted so far
    #[returns(SupplyResponse)]
    CurrentSupply {},
    /// The immutable mint ceiling
    #[returns(SupplyResponse)]
    MaxSupply {},
    /// Get all tokens owned by an address
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Get all token IDs in the contract
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Get the total number of minted tokens
    #[returns(NumTokensResponse)]
    NumTokens {},
    /// ERC-165-style introspection for marketplace tooling that probes
    /// collections the EVM way
    #[returns(SupportsInterfaceResponse)]
    SupportsInterface { interface_id: String },
}

#[cw_serde]
pub struct CollectionInfoResponse {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub current_supply: u64,
    pub max_supply: u64,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
    pub approvals: Vec<String>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: u64,
}

#[cw_serde]
pub struct ApprovedResponse {
    pub approved: Option<String>,
}

#[cw_serde]
pub struct OperatorResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_id: String,
    pub owner: String,
    pub attributes: GearAttributes,
    pub approval: Option<String>,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct SupplyResponse {
    pub supply: u64,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct SupportsInterfaceResponse {
    pub supported: bool,
}

#[cw_serde]
pub struct MigrateMsg {}
