use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::events::{self, MilestoneCompletedEvent};
use crate::ledger::{contribution_of, payout};
use crate::registry::{load_campaign, load_milestone, save_campaign, save_milestone};
use crate::storage_types::*;
use crate::utils::extend_persistent;

/// Votes needed before a milestone decision is taken: a majority of the
/// contributor roll as it stands when the vote is cast.
pub fn required_votes(contributor_count: u32) -> u32 {
    (contributor_count + 1) / 2
}

/// Creator asks for the next milestone to be paid. Milestone 0, and any
/// milestone of a campaign nobody has contributed to, is released at once;
/// everything else waits for contributor votes.
///
/// Returns true when funds were released.
pub fn request_completion(
    env: &Env,
    caller: &Address,
    campaign_id: CampaignId,
    milestone_id: MilestoneId,
) -> Result<bool, Error> {
    let mut campaign = load_campaign(env, campaign_id)?;
    if *caller != campaign.creator {
        return Err(Error::NotCreator);
    }
    let mut milestone = load_milestone(env, campaign_id, milestone_id)?;

    if milestone_id != campaign.completed_milestones || milestone.is_completed() {
        return Err(Error::OutOfOrder);
    }
    // All campaigns share the contract's token balance, so the tranche must
    // also be covered by what this campaign still holds in escrow.
    if campaign.raised < milestone.amount || campaign.escrow_balance() < milestone.amount {
        return Err(Error::InsufficientFunds);
    }

    milestone.completed_at = Some(env.ledger().timestamp());

    if milestone_id == 0 || campaign.contributor_count == 0 {
        release_milestone_funds(env, &mut campaign, &mut milestone)?;
        return Ok(true);
    }

    milestone.status = MilestoneStatus::AwaitingVotes;
    save_milestone(env, &milestone);
    log!(
        env,
        "milestone awaiting votes",
        campaign_id,
        milestone_id,
        required_votes(campaign.contributor_count)
    );
    Ok(false)
}

/// Record one contributor's vote and settle the milestone as soon as quorum
/// is reached. Quorum is checked against the live contributor roll on every
/// vote, so the first decisive tally wins: a milestone rejected at quorum
/// still counts later votes but is never released.
///
/// Returns true when the vote released the milestone.
pub fn cast_vote(
    env: &Env,
    voter: &Address,
    campaign_id: CampaignId,
    milestone_id: MilestoneId,
    approve: bool,
) -> Result<bool, Error> {
    let mut campaign = load_campaign(env, campaign_id)?;
    let mut milestone = load_milestone(env, campaign_id, milestone_id)?;

    if contribution_of(env, campaign_id, voter) <= 0 {
        return Err(Error::NotContributor);
    }
    if milestone.status != MilestoneStatus::AwaitingVotes {
        return Err(Error::NotVotable);
    }
    let vote_key = PersistentKey::Vote(campaign_id, milestone_id, voter.clone());
    if env.storage().persistent().has(&vote_key) {
        return Err(Error::DuplicateVote);
    }

    env.storage().persistent().set(
        &vote_key,
        &VoteRecord {
            voter: voter.clone(),
            approve,
            cast_at: env.ledger().timestamp(),
        },
    );
    extend_persistent(env, &vote_key);

    if approve {
        milestone.votes_for += 1;
    } else {
        milestone.votes_against += 1;
    }

    let required = required_votes(campaign.contributor_count);
    let cast = milestone.votes_for + milestone.votes_against;
    if milestone.rejected || cast < required {
        save_milestone(env, &milestone);
        return Ok(false);
    }

    if milestone.votes_for > milestone.votes_against {
        release_milestone_funds(env, &mut campaign, &mut milestone)?;
        return Ok(true);
    }

    // No recovery path from here: no re-vote and no creator override.
    milestone.rejected = true;
    save_milestone(env, &milestone);
    log!(
        env,
        "milestone rejected",
        campaign_id,
        milestone_id,
        milestone.votes_for,
        milestone.votes_against
    );
    Ok(false)
}

/// Pay a milestone's tranche to the creator. Runs at most once per milestone;
/// the released flag and counters are stored before the transfer.
fn release_milestone_funds(
    env: &Env,
    campaign: &mut Campaign,
    milestone: &mut Milestone,
) -> Result<(), Error> {
    if milestone.is_released() {
        return Err(Error::NotVotable);
    }
    if campaign.escrow_balance() < milestone.amount {
        return Err(Error::InsufficientFunds);
    }

    milestone.status = MilestoneStatus::Released;
    milestone.released_at = Some(env.ledger().timestamp());
    campaign.completed_milestones += 1;
    campaign.released_amount = campaign
        .released_amount
        .checked_add(milestone.amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if campaign.completed_milestones == campaign.total_milestones {
        campaign.is_active = false;
        log!(env, "campaign closed", campaign.id);
    }

    save_milestone(env, milestone);
    save_campaign(env, campaign);

    payout(env, &campaign.creator, milestone.amount)?;

    events::emit_milestone_completed(
        env,
        MilestoneCompletedEvent {
            campaign_id: campaign.id,
            milestone_id: milestone.id,
            creator: campaign.creator.clone(),
            amount: milestone.amount,
        },
    );
    Ok(())
}
