use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{assert_owner, attached_amount, can_approve, is_authorized, reject_funds};
use crate::metadata::GearAttributes;
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:ridgeline-gear-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

/// ERC-165 interface ids mirrored for marketplace tooling that probes the
/// collection the EVM way: ERC-165 itself, ERC-721, ERC-721 Metadata.
const SUPPORTED_INTERFACES: [&str; 3] = ["0x01ffc9a7", "0x80ac58cd", "0x5b5e139f"];

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let config = Config {
        owner,
        name: msg.name,
        symbol: msg.symbol,
        base_uri: msg.base_uri,
        price_denom: msg.price_denom,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;
    MAX_SUPPLY.save(deps.storage, &msg.max_supply)?;

    for entry in &msg.prices {
        PRICES.save(deps.storage, &entry.gear_type, &entry.price)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str())
        .add_attribute("max_supply", msg.max_supply.to_string()))
}

// ─── Execute: Minting ───────────────────────────────────────────────────────

pub fn execute_mint_item(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    gear_type: String,
    to: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let recipient = deps.api.addr_validate(&to)?;

    // Price lookup strictly before the payment check: an unknown gear type
    // must never be charged for.
    let price = PRICES
        .may_load(deps.storage, &gear_type)?
        .ok_or_else(|| ContractError::UnknownGearType {
            gear_type: gear_type.clone(),
        })?;

    // The contract owner mints free of charge; anything they attached anyway
    // still gets forwarded below.
    if info.sender != config.owner {
        let attached = attached_amount(&info, &config.price_denom);
        if attached < price {
            return Err(ContractError::InsufficientPayment {
                needed: price,
                attached,
            });
        }
    }

    let max_supply = MAX_SUPPLY.load(deps.storage)?;
    let count = TOKEN_COUNT.load(deps.storage)?;
    if count >= max_supply {
        return Err(ContractError::SupplyExhausted { max_supply });
    }

    // The counter must land before any token record: a partial write may
    // never leave a stale counter that would hand out the same id twice.
    let new_id = count + 1;
    TOKEN_COUNT.save(deps.storage, &new_id)?;

    let token_id = new_id.to_string();
    TOKEN_OWNERS.save(deps.storage, &token_id, &recipient)?;
    ATTRIBUTES.save(deps.storage, &token_id, &GearAttributes::new(&gear_type))?;
    OWNER_TOKENS.save(deps.storage, (&recipient, &token_id), &true)?;
    BALANCES.update(deps.storage, &recipient, |b| -> StdResult<_> {
        Ok(b.unwrap_or(0) + 1)
    })?;

    let mut res = Response::new()
        .add_attribute("action", "mint_item")
        .add_attribute("gear_type", &gear_type)
        .add_attribute("to", recipient.as_str())
        .add_attribute("token_id", &token_id);

    if !info.funds.is_empty() {
        res = res.add_message(BankMsg::Send {
            to_address: config.owner.to_string(),
            amount: info.funds,
        });
    }

    Ok(res)
}

// ─── Execute: Transfers ─────────────────────────────────────────────────────

pub fn execute_transfer_from(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    from: String,
    to: String,
    token_id: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let from_addr = deps.api.addr_validate(&from)?;
    let to_addr = deps.api.addr_validate(&to)?;

    let owner = TOKEN_OWNERS
        .may_load(deps.storage, &token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.clone(),
        })?;
    // A `from` that does not hold the token is indistinguishable from a
    // token that does not exist under `from`.
    if owner != from_addr {
        return Err(ContractError::TokenNotFound {
            token_id: token_id.clone(),
        });
    }

    if !is_authorized(deps.as_ref(), &token_id, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "owner or approved".to_string(),
        });
    }

    apply_transfer(deps, &token_id, &from_addr, &to_addr)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("token_id", &token_id)
        .add_attribute("from", from_addr.as_str())
        .add_attribute("to", to_addr.as_str()))
}

pub fn execute_send_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    contract: String,
    token_id: String,
    msg: Binary,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let contract_addr = deps.api.addr_validate(&contract)?;
    let owner = TOKEN_OWNERS
        .may_load(deps.storage, &token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.clone(),
        })?;

    if !is_authorized(deps.as_ref(), &token_id, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "owner or approved".to_string(),
        });
    }

    // State mutation BEFORE sub-message dispatch
    apply_transfer(deps, &token_id, &owner, &contract_addr)?;

    let callback = cw721::receiver::Cw721ReceiveMsg {
        sender: info.sender.to_string(),
        token_id: token_id.clone(),
        msg,
    };
    let callback_msg = WasmMsg::Execute {
        contract_addr: contract_addr.to_string(),
        msg: to_json_binary(&callback)?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback_msg)
        .add_attribute("action", "send_nft")
        .add_attribute("token_id", &token_id)
        .add_attribute("from", owner.as_str())
        .add_attribute("to", contract_addr.as_str()))
}

/// Move ownership of `token_id` from `from` to `to`: rewrites the owner,
/// clears the per-token approval, and keeps the balance table and owner
/// index in step with the ownership table.
fn apply_transfer(
    deps: DepsMut,
    token_id: &str,
    from: &Addr,
    to: &Addr,
) -> Result<(), ContractError> {
    TOKEN_OWNERS.save(deps.storage, token_id, to)?;
    TOKEN_APPROVALS.remove(deps.storage, token_id);

    OWNER_TOKENS.remove(deps.storage, (from, token_id));
    OWNER_TOKENS.save(deps.storage, (to, token_id), &true)?;

    BALANCES.update(deps.storage, from, |b| -> StdResult<_> {
        Ok(b.unwrap_or(0).saturating_sub(1))
    })?;
    BALANCES.update(deps.storage, to, |b| -> StdResult<_> {
        Ok(b.unwrap_or(0) + 1)
    })?;

    Ok(())
}

// ─── Execute: Approvals ─────────────────────────────────────────────────────

pub fn execute_approve(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    spender: String,
    token_id: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let owner = TOKEN_OWNERS
        .may_load(deps.storage, &token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.clone(),
        })?;
    if !can_approve(deps.as_ref(), &owner, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "token owner or operator".to_string(),
        });
    }

    let spender_addr = deps.api.addr_validate(&spender)?;
    TOKEN_APPROVALS.save(deps.storage, &token_id, &spender_addr)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("token_id", &token_id)
        .add_attribute("spender", spender_addr.as_str()))
}

pub fn execute_revoke(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let owner = TOKEN_OWNERS
        .may_load(deps.storage, &token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.clone(),
        })?;
    if !can_approve(deps.as_ref(), &owner, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "token owner or operator".to_string(),
        });
    }

    TOKEN_APPROVALS.remove(deps.storage, &token_id);

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("token_id", &token_id))
}

pub fn execute_set_approval_for_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
    approved: bool,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let operator_addr = deps.api.addr_validate(&operator)?;
    if approved {
        OPERATOR_APPROVALS.save(deps.storage, (&info.sender, &operator_addr), &true)?;
    } else {
        OPERATOR_APPROVALS.remove(deps.storage, (&info.sender, &operator_addr));
    }

    Ok(Response::new()
        .add_attribute("action", "set_approval_for_all")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("operator", operator_addr.as_str())
        .add_attribute("approved", approved.to_string()))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_set_price(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    gear_type: String,
    price: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    PRICES.save(deps.storage, &gear_type, &price)?;

    Ok(Response::new()
        .add_attribute("action", "set_price")
        .add_attribute("gear_type", &gear_type)
        .add_attribute("price", price.to_string()))
}

pub fn execute_set_rarity(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: String,
    rarity: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let mut attrs = ATTRIBUTES
        .may_load(deps.storage, &token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.clone(),
        })?;
    attrs.rarity = rarity.clone();
    ATTRIBUTES.save(deps.storage, &token_id, &attrs)?;

    Ok(Response::new()
        .add_attribute("action", "set_rarity")
        .add_attribute("token_id", &token_id)
        .add_attribute("rarity", &rarity))
}

pub fn execute_update_item_metadata(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: String,
    xp: u32,
    magnitude: u32,
    condition: u32,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    // Gear type and rarity carry over untouched.
    let mut attrs = ATTRIBUTES
        .may_load(deps.storage, &token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.clone(),
        })?;
    attrs.xp = xp;
    attrs.magnitude = magnitude;
    attrs.condition = condition;
    ATTRIBUTES.save(deps.storage, &token_id, &attrs)?;

    Ok(Response::new()
        .add_attribute("action", "update_item_metadata")
        .add_attribute("token_id", &token_id)
        .add_attribute("xp", xp.to_string())
        .add_attribute("magnitude", magnitude.to_string())
        .add_attribute("condition", condition.to_string()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_collection_info(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&CollectionInfoResponse {
        name: config.name,
        symbol: config.symbol,
        base_uri: config.base_uri,
        current_supply: TOKEN_COUNT.load(deps.storage)?,
        max_supply: MAX_SUPPLY.load(deps.storage)?,
    })
}

pub fn query_owner_of(deps: Deps, token_id: String) -> StdResult<Binary> {
    let owner = TOKEN_OWNERS.load(deps.storage, &token_id)?;
    let approvals = TOKEN_APPROVALS
        .may_load(deps.storage, &token_id)?
        .map(|a| a.to_string())
        .into_iter()
        .collect();

    to_json_binary(&OwnerOfResponse {
        owner: owner.to_string(),
        approvals,
    })
}

pub fn query_balance_of(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or(0);
    to_json_binary(&BalanceResponse { balance })
}

pub fn query_get_approved(deps: Deps, token_id: String) -> StdResult<Binary> {
    // Existence check first; an unminted id is an error, not "no approval".
    TOKEN_OWNERS.load(deps.storage, &token_id)?;
    let approved = TOKEN_APPROVALS
        .may_load(deps.storage, &token_id)?
        .map(|a| a.to_string());
    to_json_binary(&ApprovedResponse { approved })
}

pub fn query_is_approved_for_all(
    deps: Deps,
    owner: String,
    operator: String,
) -> StdResult<Binary> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let operator_addr = deps.api.addr_validate(&operator)?;
    let approved = OPERATOR_APPROVALS
        .may_load(deps.storage, (&owner_addr, &operator_addr))?
        .unwrap_or(false);
    to_json_binary(&OperatorResponse { approved })
}

pub fn query_nft_info(deps: Deps, token_id: String) -> StdResult<Binary> {
    let owner = TOKEN_OWNERS.load(deps.storage, &token_id)?;
    let attributes = ATTRIBUTES.load(deps.storage, &token_id)?;
    let approval = TOKEN_APPROVALS
        .may_load(deps.storage, &token_id)?
        .map(|a| a.to_string());

    to_json_binary(&NftInfoResponse {
        token_id,
        owner: owner.to_string(),
        attributes,
        approval,
    })
}

pub fn query_token_uri(deps: Deps, token_id: String) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let attributes = ATTRIBUTES.load(deps.storage, &token_id)?;
    let token_uri = format!("{}/{}?{}", config.base_uri, token_id, attributes.render());
    to_json_binary(&TokenUriResponse { token_uri })
}

pub fn query_get_price(deps: Deps, gear_type: String) -> StdResult<Binary> {
    let price = PRICES.load(deps.storage, &gear_type)?;
    to_json_binary(&GearPrice { gear_type, price })
}

pub fn query_current_supply(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&SupplyResponse {
        supply: TOKEN_COUNT.load(deps.storage)?,
    })
}

pub fn query_max_supply(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&SupplyResponse {
        supply: MAX_SUPPLY.load(deps.storage)?,
    })
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after
        .as_deref()
        .map(cw_storage_plus::Bound::exclusive);

    let tokens: Vec<String> = OWNER_TOKENS
        .prefix(&owner_addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|k| k.ok())
        .collect();

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_all_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after
        .as_deref()
        .map(cw_storage_plus::Bound::exclusive);

    let tokens: Vec<String> = TOKEN_OWNERS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|k| k.ok())
        .collect();

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_num_tokens(deps: Deps) -> StdResult<Binary> {
    let count = TOKEN_COUNT.load(deps.storage)?;
    to_json_binary(&NumTokensResponse { count })
}

pub fn query_supports_interface(_deps: Deps, interface_id: String) -> StdResult<Binary> {
    let id = interface_id.to_lowercase();
    let supported = SUPPORTED_INTERFACES.contains(&id.as_str());
    to_json_binary(&SupportsInterfaceResponse { supported })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
