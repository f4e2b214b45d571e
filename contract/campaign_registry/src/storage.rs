use soroban_sdk::{token, Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}

pub fn get_owner(env: &Env) -> Result<Address, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(CampaignError::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CampaignError::NotInitialized)
}

pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn active_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ActiveCampaigns)
        .unwrap_or(0)
}

pub fn total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

/// Ids are valid in `[1, CampaignCount]`; anything else is `NotFound`
/// even if a stray entry were present.
pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CampaignError> {
    if campaign_id == 0 || campaign_id > campaign_count(env) {
        return Err(CampaignError::NotFound);
    }

    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CampaignError::NotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn contribution_of(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn record_contribution(
    env: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
    amount: i128,
) -> Result<i128, CampaignError> {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    let total = crate::utils::checked_credit(contribution_of(env, campaign_id, contributor), amount)?;

    env.storage().persistent().set(&key, &total);
    extend_persistent(env, &key);

    Ok(total)
}

/// Forward a contribution straight to the campaign creator.
pub fn credit_creator(
    env: &Env,
    contributor: &Address,
    creator: &Address,
    amount: i128,
) -> Result<(), CampaignError> {
    let token_address = get_token(env)?;
    let token_client = token::TokenClient::new(env, &token_address);

    token_client.transfer(contributor, creator, &amount);
    Ok(())
}
