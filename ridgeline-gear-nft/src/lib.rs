pub mod contract;
pub mod error;
pub mod helpers;
pub mod metadata;
pub mod msg;
pub mod state;

#[cfg(not(feature = "library"))]
mod entry {
    use super::*;
    use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response};
    use msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

    #[entry_point]
    pub fn instantiate(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, error::ContractError> {
        contract::instantiate(deps, env, info, msg)
    }

    #[entry_point]
    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, error::ContractError> {
        match msg {
            ExecuteMsg::MintItem { gear_type, to } => {
                contract::execute_mint_item(deps, env, info, gear_type, to)
            }
            ExecuteMsg::TransferFrom {
                from,
                to,
                token_id,
            } => contract::execute_transfer_from(deps, env, info, from, to, token_id),
            ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            } => contract::execute_send_nft(deps, env, info, contract, token_id, msg),
            ExecuteMsg::Approve { spender, token_id } => {
                contract::execute_approve(deps, env, info, spender, token_id)
            }
            ExecuteMsg::Revoke { token_id } => contract::execute_revoke(deps, env, info, token_id),
            ExecuteMsg::SetApprovalForAll { operator, approved } => {
                contract::execute_set_approval_for_all(deps, env, info, operator, approved)
            }
            ExecuteMsg::SetPrice { gear_type, price } => {
                contract::execute_set_price(deps, env, info, gear_type, price)
            }
            ExecuteMsg::SetRarity { token_id, rarity } => {
                contract::execute_set_rarity(deps, env, info, token_id, rarity)
            }
            ExecuteMsg::UpdateItemMetadata {
                token_id,
                xp,
                magnitude,
                condition,
            } => contract::execute_update_item_metadata(
                deps, env, info, token_id, xp, magnitude, condition,
            ),
        }
    }

    #[entry_point]
    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> cosmwasm_std::StdResult<Binary> {
        match msg {
            QueryMsg::Config {} => contract::query_config(deps),
            QueryMsg::CollectionInfo {} => contract::query_collection_info(deps),
            QueryMsg::OwnerOf { token_id } => contract::query_owner_of(deps, token_id),
            QueryMsg::BalanceOf { address } => contract::query_balance_of(deps, address),
            QueryMsg::GetApproved { token_id } => contract::query_get_approved(deps, token_id),
            QueryMsg::IsApprovedForAll { owner, operator } => {
                contract::query_is_approved_for_all(deps, owner, operator)
            }
            QueryMsg::NftInfo { token_id } => contract::query_nft_info(deps, token_id),
            QueryMsg::TokenUri { token_id } => contract::query_token_uri(deps, token_id),
            QueryMsg::GetPrice { gear_type } => contract::query_get_price(deps, gear_type),
            QueryMsg::CurrentSupply {} => contract::query_current_supply(deps),
            QueryMsg::MaxSupply {} => contract::query_max_supply(deps),
            QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            } => contract::query_tokens(deps, owner, start_after, limit),
            QueryMsg::AllTokens { start_after, limit } => {
                contract::query_all_tokens(deps, start_after, limit)
            }
            QueryMsg::NumTokens {} => contract::query_num_tokens(deps),
            QueryMsg::SupportsInterface { interface_id } => {
                contract::query_supports_interface(deps, interface_id)
            }
        }
    }

    #[entry_point]
    pub fn migrate(
        deps: DepsMut,
        env: Env,
        msg: MigrateMsg,
    ) -> Result<Response, error::ContractError> {
        contract::migrate(deps, env, msg)
    }
}
