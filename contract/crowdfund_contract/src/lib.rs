#![no_std]

mod errors;
mod events;
mod ledger;
mod milestone;
mod registry;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use errors::Error;
pub use events::*;
pub use storage_types::*;

use utils::{extend_instance, require_initialized};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the contract with the token contributions are made in
    pub fn initialize(env: Env, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Token) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);
        extend_instance(&env);
        Ok(())
    }

    /// Create a campaign with a milestone schedule whose amounts add up to
    /// the goal exactly.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: i128,
        duration_days: u32,
        milestone_descriptions: Vec<String>,
        milestone_amounts: Vec<i128>,
    ) -> Result<CampaignId, Error> {
        creator.require_auth();
        require_initialized(&env)?;
        registry::validate_schedule(
            goal,
            duration_days,
            &milestone_descriptions,
            &milestone_amounts,
        )?;

        let campaign = registry::register_campaign(
            &env,
            creator,
            title,
            description,
            goal,
            duration_days,
            milestone_descriptions,
            milestone_amounts,
        )?;

        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                campaign_id: campaign.id,
                creator: campaign.creator,
                goal: campaign.goal,
                deadline: campaign.deadline,
            },
        );

        Ok(campaign.id)
    }

    /// Escrow `amount` of the configured token into a campaign.
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();
        require_initialized(&env)?;

        let mut campaign = registry::load_campaign(&env, campaign_id)?;
        ledger::record_contribution(&env, &mut campaign, &contributor, amount)?;
        registry::save_campaign(&env, &campaign);

        ledger::deposit(&env, &contributor, amount)?;

        events::emit_contribution_made(
            &env,
            ContributionMadeEvent {
                campaign_id,
                contributor,
                amount,
                raised: campaign.raised,
            },
        );
        Ok(())
    }

    /// Creator requests release of the next milestone. Returns true when the
    /// tranche was paid out immediately, false when it now awaits votes.
    pub fn complete_milestone(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        milestone_id: MilestoneId,
    ) -> Result<bool, Error> {
        caller.require_auth();
        require_initialized(&env)?;
        milestone::request_completion(&env, &caller, campaign_id, milestone_id)
    }

    /// Contributor votes on a milestone awaiting approval. Returns true when
    /// this vote released the milestone.
    pub fn vote_milestone(
        env: Env,
        voter: Address,
        campaign_id: CampaignId,
        milestone_id: MilestoneId,
        approve: bool,
    ) -> Result<bool, Error> {
        voter.require_auth();
        require_initialized(&env)?;
        milestone::cast_vote(&env, &voter, campaign_id, milestone_id, approve)
    }

    /// Return a contributor's full contribution once a campaign has missed
    /// its goal by the deadline.
    pub fn refund(env: Env, campaign_id: CampaignId, contributor: Address) -> Result<i128, Error> {
        contributor.require_auth();
        require_initialized(&env)?;

        let mut campaign = registry::load_campaign(&env, campaign_id)?;
        let amount = ledger::record_refund(&env, &mut campaign, &contributor)?;
        registry::save_campaign(&env, &campaign);

        ledger::payout(&env, &contributor, amount)?;

        events::emit_refund_issued(
            &env,
            RefundIssuedEvent {
                campaign_id,
                contributor,
                amount,
            },
        );
        Ok(amount)
    }

    /// View functions
    pub fn get_campaign_details(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        registry::load_campaign(&env, campaign_id)
    }

    pub fn get_milestone_details(
        env: Env,
        campaign_id: CampaignId,
        milestone_id: MilestoneId,
    ) -> Result<Milestone, Error> {
        registry::load_campaign(&env, campaign_id)?;
        registry::load_milestone(&env, campaign_id, milestone_id)
    }

    pub fn get_milestones(env: Env, campaign_id: CampaignId) -> Result<Vec<Milestone>, Error> {
        let campaign = registry::load_campaign(&env, campaign_id)?;
        registry::load_milestones(&env, &campaign)
    }

    pub fn get_contribution(env: Env, campaign_id: CampaignId, contributor: Address) -> i128 {
        ledger::contribution_of(&env, campaign_id, &contributor)
    }

    pub fn get_contributors(env: Env, campaign_id: CampaignId) -> Result<Vec<Address>, Error> {
        registry::load_campaign(&env, campaign_id)?;
        Ok(ledger::contributors(&env, campaign_id))
    }

    pub fn get_vote(
        env: Env,
        campaign_id: CampaignId,
        milestone_id: MilestoneId,
        voter: Address,
    ) -> Option<VoteRecord> {
        env.storage()
            .persistent()
            .get(&PersistentKey::Vote(campaign_id, milestone_id, voter))
    }

    /// Votes a milestone of this campaign needs right now.
    pub fn required_votes(env: Env, campaign_id: CampaignId) -> Result<u32, Error> {
        let campaign = registry::load_campaign(&env, campaign_id)?;
        Ok(milestone::required_votes(campaign.contributor_count))
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        utils::get_token(&env)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        registry::campaign_count(&env)
    }
}
