use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{CampaignId, MilestoneId};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionMadeEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MilestoneCompletedEvent {
    pub campaign_id: CampaignId,
    pub milestone_id: MilestoneId,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundIssuedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.campaign_id),
        event,
    );
}

pub fn emit_contribution_made(env: &Env, event: ContributionMadeEvent) {
    env.events().publish(
        (Symbol::new(env, "contribution_made"), event.campaign_id),
        event,
    );
}

pub fn emit_milestone_completed(env: &Env, event: MilestoneCompletedEvent) {
    env.events().publish(
        (Symbol::new(env, "milestone_completed"), event.campaign_id),
        event,
    );
}

pub fn emit_refund_issued(env: &Env, event: RefundIssuedEvent) {
    env.events().publish(
        (Symbol::new(env, "refund_issued"), event.campaign_id),
        event,
    );
}
