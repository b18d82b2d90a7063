use soroban_sdk::{contracttype, Address, Env, Map};

#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub payment_token: Address, // Base currency asset contributors pay with
    pub start_time: u64,
    pub end_time: u64,
    pub rate: i128, // Issued units per payment token unit
    pub hard_cap: i128,
    pub bounty: i128, // Minted to the admin at finalization
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum GroupId {
    CoreTeam = 0,
    Advisors = 1,
}

/// Fixed allocation table for one vesting group, supplied at construction
/// and consumed when the sale finalizes.
#[derive(Clone)]
#[contracttype]
pub struct VestingGroupConfig {
    pub group: GroupId,
    pub allocations: Map<Address, i128>,
    pub release_offset: u64, // Seconds after finalization until unlock
}

#[derive(Clone)]
#[contracttype]
pub struct VestingBundle {
    pub locked_total: i128,
    pub release_date: u64,
    pub allocations: Map<Address, i128>,
    pub released: Map<Address, bool>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BundleInfo {
    pub locked_total: i128,
    pub release_date: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Admin,
    Beneficiary,
    Finalized,
    TotalIssued,
    TotalSupply,
    Collected,
    VestingConfig,
    Whitelisted(Address),
    Balance(Address),
    Bundle(GroupId),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
