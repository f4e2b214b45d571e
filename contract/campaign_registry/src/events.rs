use soroban_sdk::{contractevent, Address, Env};

use crate::storage_types::CampaignId;

// Each event's first topic is its name in snake case, e.g. `campaign_created`.

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    #[topic]
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    #[topic]
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClosed {
    #[topic]
    pub campaign_id: CampaignId,
    pub closed_by: Address,
    pub raised: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreated) {
    event.publish(env);
}

pub fn emit_contribution(env: &Env, event: Contribution) {
    event.publish(env);
}

pub fn emit_campaign_closed(env: &Env, event: CampaignClosed) {
    event.publish(env);
}
