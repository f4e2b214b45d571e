use soroban_sdk::Env;

use crate::storage_types::{CampaignError, SECONDS_PER_DAY};

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * SECONDS_PER_DAY
}

/// Check if timestamp is in the past
pub fn is_past(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() > timestamp
}

pub fn validate_goal(goal: i128) -> Result<(), CampaignError> {
    if goal <= 0 {
        return Err(CampaignError::InvalidGoal);
    }
    Ok(())
}

pub fn validate_duration(days: u32) -> Result<(), CampaignError> {
    if days == 0 {
        return Err(CampaignError::InvalidDuration);
    }
    Ok(())
}

pub fn validate_amount(amount: i128) -> Result<(), CampaignError> {
    if amount <= 0 {
        return Err(CampaignError::InvalidAmount);
    }
    Ok(())
}

pub fn checked_credit(balance: i128, amount: i128) -> Result<i128, CampaignError> {
    balance
        .checked_add(amount)
        .ok_or(CampaignError::ArithmeticError)
}
