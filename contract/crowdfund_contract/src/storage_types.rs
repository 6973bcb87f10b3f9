use soroban_sdk::{contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Milestone(CampaignId, MilestoneId),
    Contribution(CampaignId, Address),
    Contributors(CampaignId),
    Vote(CampaignId, MilestoneId, Address),
}

pub type CampaignId = u64;
pub type MilestoneId = u32;

// Milestone status
//
// Pending -> AwaitingVotes -> Released, or Pending -> Released on the
// auto-approval path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum MilestoneStatus {
    Pending,
    AwaitingVotes,
    Released,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub raised: i128,
    pub released_amount: i128,
    pub refunded_amount: i128,
    pub created_at: u64,
    pub deadline: u64,
    pub is_active: bool,
    pub total_milestones: u32,
    pub completed_milestones: u32,
    pub contributor_count: u32,
}

impl Campaign {
    /// Funds still held in escrow for this campaign.
    pub fn escrow_balance(&self) -> i128 {
        self.raised - self.released_amount - self.refunded_amount
    }

    pub fn goal_reached(&self) -> bool {
        self.raised >= self.goal
    }
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Milestone {
    pub id: MilestoneId,
    pub campaign_id: CampaignId,
    pub description: String,
    pub amount: i128,
    pub status: MilestoneStatus,
    pub votes_for: u32,
    pub votes_against: u32,
    // Set when quorum was reached without a majority in favour. The milestone
    // keeps taking votes but is never released.
    pub rejected: bool,
    pub completed_at: Option<u64>,
    pub released_at: Option<u64>,
}

impl Milestone {
    /// True once the creator has requested completion.
    pub fn is_completed(&self) -> bool {
        self.status != MilestoneStatus::Pending
    }

    pub fn is_released(&self) -> bool {
        self.status == MilestoneStatus::Released
    }
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct VoteRecord {
    pub voter: Address,
    pub approve: bool,
    pub cast_at: u64,
}

// Constants
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
