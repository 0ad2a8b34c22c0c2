use cosmwasm_std::{Addr, Deps, MessageInfo, StdResult, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, OPERATOR_APPROVALS, TOKEN_APPROVALS, TOKEN_OWNERS};

/// Verify the caller is the contract owner.
pub fn assert_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {
            role: "owner".to_string(),
        });
    }
    Ok(())
}

/// Check if `spender` may transfer `token_id` on behalf of its owner.
/// Returns true if spender is the owner, has token-level approval, or has
/// operator approval.
pub fn is_authorized(deps: Deps, token_id: &str, spender: &Addr) -> StdResult<bool> {
    let owner = TOKEN_OWNERS.load(deps.storage, token_id)?;
    if *spender == owner {
        return Ok(true);
    }
    if let Some(approved) = TOKEN_APPROVALS.may_load(deps.storage, token_id)? {
        if approved == *spender {
            return Ok(true);
        }
    }
    if let Some(true) = OPERATOR_APPROVALS.may_load(deps.storage, (&owner, spender))? {
        return Ok(true);
    }
    Ok(false)
}

/// Check if `spender` may grant or revoke per-token approvals for `owner`'s
/// tokens: either the owner themselves or one of their operators.
pub fn can_approve(deps: Deps, owner: &Addr, spender: &Addr) -> StdResult<bool> {
    if spender == owner {
        return Ok(true);
    }
    Ok(OPERATOR_APPROVALS
        .may_load(deps.storage, (owner, spender))?
        .unwrap_or(false))
}

/// Total payment attached to the call in the configured price denom.
pub fn attached_amount(info: &MessageInfo, denom: &str) -> Uint128 {
    info.funds
        .iter()
        .filter(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .sum()
}

/// Non-payable entry points refuse attached funds outright.
pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}
