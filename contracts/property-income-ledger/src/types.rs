use soroban_sdk::{contracttype, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub metadata_uri: String,
    pub active: bool,
    pub total_shares: i128,
    /// Net income per share since registration, scaled by `math::SCALE`.
    pub acc_income_per_share: i128,
    pub total_distributed: i128,
    pub last_update: u64,
}

/// Claim bookkeeping for one holder of one property.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HolderAccount {
    pub baseline: i128,
    pub pending: i128,
    pub total_claimed: i128,
    pub last_claim: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositReceipt {
    pub net: i128,
    pub fee: i128,
    pub acc_income_per_share: i128,
}

/// Self-registration record; KYC can only be approved for registered users.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    pub registered_at: u64,
}
