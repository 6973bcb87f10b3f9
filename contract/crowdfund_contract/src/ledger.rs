use soroban_sdk::{token, Address, Env, Vec};

use crate::errors::Error;
use crate::storage_types::*;
use crate::utils::{extend_persistent, get_token, is_past};

/// Cumulative amount a contributor has placed into a campaign.
pub fn contribution_of(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address, amount: i128) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

/// Insertion-ordered contributor roll. Append-only.
pub fn contributors(env: &Env, campaign_id: CampaignId) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contributors(campaign_id))
        .unwrap_or(Vec::new(env))
}

fn append_contributor(env: &Env, campaign_id: CampaignId, contributor: &Address) {
    let key = PersistentKey::Contributors(campaign_id);
    let mut roll = contributors(env, campaign_id);
    roll.push_back(contributor.clone());
    env.storage().persistent().set(&key, &roll);
    extend_persistent(env, &key);
}

/// Apply a contribution to the campaign record and the contributor's balance.
/// The caller persists the campaign.
pub fn record_contribution(
    env: &Env,
    campaign: &mut Campaign,
    contributor: &Address,
    amount: i128,
) -> Result<(), Error> {
    if !campaign.is_active {
        return Err(Error::CampaignClosed);
    }
    if env.ledger().timestamp() > campaign.deadline {
        return Err(Error::DeadlineExpired);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let raised = campaign
        .raised
        .checked_add(amount)
        .ok_or(Error::GoalExceeded)?;
    if raised > campaign.goal {
        return Err(Error::GoalExceeded);
    }

    let previous = contribution_of(env, campaign.id, contributor);
    if previous == 0 {
        append_contributor(env, campaign.id, contributor);
        campaign.contributor_count += 1;
    }
    let updated = previous
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    set_contribution(env, campaign.id, contributor, updated);
    campaign.raised = raised;
    Ok(())
}

/// Zero a contributor's balance on a failed campaign and return the amount
/// owed. The caller persists the campaign before paying out.
pub fn record_refund(
    env: &Env,
    campaign: &mut Campaign,
    contributor: &Address,
) -> Result<i128, Error> {
    if !is_past(env, campaign.deadline) {
        return Err(Error::CampaignStillActive);
    }
    if campaign.goal_reached() {
        return Err(Error::CampaignSucceeded);
    }
    let amount = contribution_of(env, campaign.id, contributor);
    if amount <= 0 {
        return Err(Error::NoContribution);
    }
    // Tranches already paid to the creator are gone, and the contract balance
    // is shared with other campaigns.
    if amount > campaign.escrow_balance() {
        return Err(Error::InsufficientFunds);
    }

    set_contribution(env, campaign.id, contributor, 0);
    campaign.refunded_amount += amount;
    Ok(amount)
}

/// Pull funds from `from` into the contract's escrow account.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let token_client = token::Client::new(env, &get_token(env)?);
    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Pay out of escrow. Callers commit the authorizing state first.
pub fn payout(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token_client = token::Client::new(env, &get_token(env)?);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
