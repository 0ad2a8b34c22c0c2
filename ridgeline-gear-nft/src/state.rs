use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::metadata::GearAttributes;

/// Contract-level configuration, written once at instantiation.
#[cw_serde]
pub struct Config {
    /// Contract owner — collects mint payments, mints for free, and is the
    /// only principal allowed to reprice gear or mutate item attributes
    pub owner: Addr,
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Prefix for `token_uri` composition
    pub base_uri: String,
    /// Native denom mint prices are quoted in
    pub price_denom: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Last-assigned token id; monotone, never reused.
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// Hard ceiling on TOKEN_COUNT, fixed at instantiation.
pub const MAX_SUPPLY: Item<u64> = Item::new("max_supply");

/// token_id (string of u64) -> owner Addr
pub const TOKEN_OWNERS: Map<&str, Addr> = Map::new("gear_owners");

/// token_id (string of u64) -> gameplay attributes
pub const ATTRIBUTES: Map<&str, GearAttributes> = Map::new("gear_attributes");

/// owner Addr -> number of tokens held (absent = 0)
pub const BALANCES: Map<&Addr, u64> = Map::new("gear_balances");

/// token_id -> spender Addr (single approval per token)
pub const TOKEN_APPROVALS: Map<&str, Addr> = Map::new("gear_approvals");

/// (owner, operator) -> bool (operator approvals)
pub const OPERATOR_APPROVALS: Map<(&Addr, &Addr), bool> = Map::new("gear_operators");

/// (owner_addr, token_id) -> bool, secondary index for owner-based queries
pub const OWNER_TOKENS: Map<(&Addr, &str), bool> = Map::new("owner_tokens");

/// gear type -> mint price in minimal units of `Config::price_denom`
pub const PRICES: Map<&str, Uint128> = Map::new("gear_prices");
