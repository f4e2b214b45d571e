use soroban_sdk::{contracterror, contracttype, Address, String};

pub type CampaignId = u32;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    CampaignCount,
    ActiveCampaigns,
    TotalRaised,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub creator: Address,
    pub goal: i128,
    pub raised: i128,
    pub deadline: u64,
    pub active: bool,
    pub created_at: u64,
}

/// Registry-wide aggregates, kept in step with every mutation.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct RegistryStats {
    pub total_campaigns: u32,
    pub active_campaigns: u32,
    pub total_raised: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidGoal = 3,
    InvalidDuration = 4,
    InvalidAmount = 5,
    NotFound = 6,
    Unauthorized = 7,
    CampaignNotActive = 8,
    ArithmeticError = 9,
}

// Constants
pub const SECONDS_PER_DAY: u64 = 86400;
pub const MAX_PAGE_SIZE: u32 = 20;
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 7; // 7 days
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30; // 30 days
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90; // 90 days
