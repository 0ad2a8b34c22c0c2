use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("contract is already initialized")]
    AlreadyInitialized,

    #[error("token not found: {token_id}")]
    TokenNotFound { token_id: String },

    #[error("no mint price configured for gear type: {gear_type}")]
    UnknownGearType { gear_type: String },

    #[error("insufficient payment: mint costs {needed}, got {attached}")]
    InsufficientPayment { needed: Uint128, attached: Uint128 },

    #[error("supply exhausted: max supply of {max_supply} reached")]
    SupplyExhausted { max_supply: u64 },

    #[error("malformed attribute record: {reason}")]
    MalformedRecord { reason: String },

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
