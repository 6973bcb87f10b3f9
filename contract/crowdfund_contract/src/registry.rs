use soroban_sdk::{Address, Env, String, Vec};

use crate::errors::Error;
use crate::storage_types::*;
use crate::utils::{days_to_seconds, extend_instance, extend_persistent};

/// Check creation input before anything is written.
pub fn validate_schedule(
    goal: i128,
    duration_days: u32,
    descriptions: &Vec<String>,
    amounts: &Vec<i128>,
) -> Result<(), Error> {
    if goal <= 0 {
        return Err(Error::InvalidGoal);
    }
    if duration_days == 0 {
        return Err(Error::InvalidDuration);
    }
    if descriptions.len() != amounts.len() {
        return Err(Error::MilestoneLengthMismatch);
    }
    if amounts.is_empty() {
        return Err(Error::NoMilestones);
    }

    let mut total: i128 = 0;
    for amount in amounts.iter() {
        if amount < 0 {
            return Err(Error::InvalidMilestoneAmount);
        }
        total = total
            .checked_add(amount)
            .ok_or(Error::MilestoneSumMismatch)?;
    }
    if total != goal {
        return Err(Error::MilestoneSumMismatch);
    }
    Ok(())
}

/// Store a new active campaign and its milestone schedule. Input must already
/// have passed `validate_schedule`.
pub fn register_campaign(
    env: &Env,
    creator: Address,
    title: String,
    description: String,
    goal: i128,
    duration_days: u32,
    milestone_descriptions: Vec<String>,
    milestone_amounts: Vec<i128>,
) -> Result<Campaign, Error> {
    let campaign_id: CampaignId = env
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(Error::NotInitialized)?;

    let now = env.ledger().timestamp();
    let deadline = now
        .checked_add(days_to_seconds(duration_days))
        .ok_or(Error::ArithmeticOverflow)?;

    let campaign = Campaign {
        id: campaign_id,
        creator,
        title,
        description,
        goal,
        raised: 0,
        released_amount: 0,
        refunded_amount: 0,
        created_at: now,
        deadline,
        is_active: true,
        total_milestones: milestone_amounts.len(),
        completed_milestones: 0,
        contributor_count: 0,
    };

    for (index, (description, amount)) in milestone_descriptions
        .iter()
        .zip(milestone_amounts.iter())
        .enumerate()
    {
        let milestone = Milestone {
            id: index as MilestoneId,
            campaign_id,
            description,
            amount,
            status: MilestoneStatus::Pending,
            votes_for: 0,
            votes_against: 0,
            rejected: false,
            completed_at: None,
            released_at: None,
        };
        save_milestone(env, &milestone);
    }

    save_campaign(env, &campaign);
    env.storage()
        .instance()
        .set(&DataKey::NextCampaignId, &(campaign_id + 1));
    extend_instance(env);

    Ok(campaign)
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn load_milestone(
    env: &Env,
    campaign_id: CampaignId,
    milestone_id: MilestoneId,
) -> Result<Milestone, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Milestone(campaign_id, milestone_id))
        .ok_or(Error::MilestoneNotFound)
}

pub fn save_milestone(env: &Env, milestone: &Milestone) {
    let key = PersistentKey::Milestone(milestone.campaign_id, milestone.id);
    env.storage().persistent().set(&key, milestone);
    extend_persistent(env, &key);
}

pub fn load_milestones(env: &Env, campaign: &Campaign) -> Result<Vec<Milestone>, Error> {
    let mut milestones = Vec::new(env);
    for milestone_id in 0..campaign.total_milestones {
        milestones.push_back(load_milestone(env, campaign.id, milestone_id)?);
    }
    Ok(milestones)
}

pub fn campaign_count(env: &Env) -> u64 {
    let next: CampaignId = env
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(1);
    next - 1
}
