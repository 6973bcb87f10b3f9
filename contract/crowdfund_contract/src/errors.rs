use soroban_sdk::contracterror;

/// Failure kinds surfaced by every contract entry point.
///
/// Codes are stable; clients match on them.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Not found
    CampaignNotFound = 10,
    MilestoneNotFound = 11,

    // Authorization
    NotCreator = 20,
    NotContributor = 21,

    // Validation
    InvalidGoal = 30,
    InvalidDuration = 31,
    NoMilestones = 32,
    MilestoneLengthMismatch = 33,
    InvalidMilestoneAmount = 34,
    MilestoneSumMismatch = 35,
    InvalidAmount = 36,

    // Contribution
    CampaignClosed = 40,
    DeadlineExpired = 41,
    GoalExceeded = 42,

    // Milestones and voting
    OutOfOrder = 50,
    InsufficientFunds = 51,
    NotVotable = 52,
    DuplicateVote = 53,

    // Refund
    CampaignStillActive = 60,
    CampaignSucceeded = 61,
    NoContribution = 62,

    ArithmeticOverflow = 70,
}
