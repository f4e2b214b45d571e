#![no_std]

mod events;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use storage_types::*;

pub use storage_types::{Campaign, CampaignError, CampaignId, RegistryStats, MAX_PAGE_SIZE};
pub use utils::*;

#[contract]
pub struct CampaignRegistry;

#[contractimpl]
impl CampaignRegistry {
    /// Initialize the registry with its owner and the token contributions are paid in
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), CampaignError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(CampaignError::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::CampaignCount, &0u32);
        env.storage().instance().set(&DataKey::ActiveCampaigns, &0u32);
        env.storage().instance().set(&DataKey::TotalRaised, &0i128);
        storage::extend_instance(&env);

        log!(&env, "registry initialized", owner, token);
        Ok(())
    }

    /// Create a new campaign owned by `creator`
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        description: String,
        goal: i128,
        duration_days: u32,
    ) -> Result<CampaignId, CampaignError> {
        creator.require_auth();
        storage::get_owner(&env)?;

        validate_goal(goal)?;
        validate_duration(duration_days)?;

        let campaign_id = storage::campaign_count(&env) + 1;
        let now = env.ledger().timestamp();
        let deadline = now + days_to_seconds(duration_days);

        let campaign = Campaign {
            id: campaign_id,
            name,
            description,
            creator: creator.clone(),
            goal,
            raised: 0,
            deadline,
            active: true,
            created_at: now,
        };

        storage::save_campaign(&env, &campaign);
        env.storage().instance().set(&DataKey::CampaignCount, &campaign_id);
        env.storage()
            .instance()
            .set(&DataKey::ActiveCampaigns, &(storage::active_count(&env) + 1));
        storage::extend_instance(&env);

        log!(&env, "campaign created", campaign_id, goal, deadline);
        events::emit_campaign_created(
            &env,
            events::CampaignCreated {
                campaign_id,
                creator,
                goal,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, CampaignError> {
        storage::load_campaign(&env, campaign_id)
    }

    /// Contribute `amount` to an active campaign. The funds go to the creator.
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), CampaignError> {
        contributor.require_auth();
        validate_amount(amount)?;

        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        if !campaign.active {
            return Err(CampaignError::CampaignNotActive);
        }

        // Contributions past the deadline are still accepted while active.
        campaign.raised = checked_credit(campaign.raised, amount)?;
        let total_raised = checked_credit(storage::total_raised(&env), amount)?;

        storage::credit_creator(&env, &contributor, &campaign.creator, amount)?;
        storage::record_contribution(&env, campaign_id, &contributor, amount)?;
        storage::save_campaign(&env, &campaign);
        env.storage().instance().set(&DataKey::TotalRaised, &total_raised);
        storage::extend_instance(&env);

        log!(&env, "contribution", campaign_id, amount, campaign.raised);
        events::emit_contribution(
            &env,
            events::Contribution {
                campaign_id,
                contributor,
                amount,
                raised: campaign.raised,
            },
        );

        Ok(())
    }

    /// Close a campaign. Only its creator or the registry owner may do so.
    pub fn close_campaign(env: Env, campaign_id: CampaignId, caller: Address) -> Result<(), CampaignError> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        let owner = storage::get_owner(&env)?;

        if caller != campaign.creator && caller != owner {
            return Err(CampaignError::Unauthorized);
        }

        if !campaign.active {
            return Ok(());
        }

        campaign.active = false;
        storage::save_campaign(&env, &campaign);
        env.storage().instance().set(
            &DataKey::ActiveCampaigns,
            &storage::active_count(&env).saturating_sub(1),
        );
        storage::extend_instance(&env);

        log!(&env, "campaign closed", campaign_id, caller);
        events::emit_campaign_closed(
            &env,
            events::CampaignClosed {
                campaign_id,
                closed_by: caller,
                raised: campaign.raised,
            },
        );

        Ok(())
    }

    pub fn get_total_campaigns(env: Env) -> u32 {
        storage::campaign_count(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, CampaignError> {
        storage::get_owner(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, CampaignError> {
        storage::get_token(&env)
    }

    /// Aggregate figures for dashboards
    pub fn get_stats(env: Env) -> RegistryStats {
        RegistryStats {
            total_campaigns: storage::campaign_count(&env),
            active_campaigns: storage::active_count(&env),
            total_raised: storage::total_raised(&env),
        }
    }

    /// Page through campaigns in id order, starting at `start_id`.
    /// `limit` is capped at `MAX_PAGE_SIZE`.
    pub fn list_campaigns(env: Env, start_id: CampaignId, limit: u32) -> Vec<Campaign> {
        let mut page = Vec::new(&env);
        let count = storage::campaign_count(&env);
        let limit = limit.min(MAX_PAGE_SIZE);

        let mut id = start_id.max(1);
        while id <= count && page.len() < limit {
            if let Ok(campaign) = storage::load_campaign(&env, id) {
                page.push_back(campaign);
            }
            id += 1;
        }

        page
    }

    pub fn get_contribution(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CampaignError> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(storage::contribution_of(&env, campaign_id, &contributor))
    }

    /// Whether ledger time has passed the campaign deadline. Informational only.
    pub fn is_expired(env: Env, campaign_id: CampaignId) -> Result<bool, CampaignError> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        Ok(is_past(&env, campaign.deadline))
    }
}
