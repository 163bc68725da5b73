use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyRegisteredEvent {
    pub property_id: u64,
    pub name: String,
    pub location: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyUpdatedEvent {
    pub property_id: u64,
    pub name: String,
    pub location: String,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesMintedEvent {
    pub property_id: u64,
    pub to: Address,
    pub amount: i128,
    pub total_shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesBatchMintedEvent {
    pub to: Address,
    pub property_ids: Vec<u64>,
    pub amounts: Vec<i128>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesTransferredEvent {
    pub property_id: u64,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncomeReceivedEvent {
    pub property_id: u64,
    pub depositor: Address,
    pub net: i128,
    pub fee: i128,
    pub acc_income_per_share: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncomeSettledEvent {
    pub property_id: u64,
    pub holder: Address,
    pub settled: i128,
    pub old_shares: i128,
    pub new_shares: i128,
    pub acc_income_per_share: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncomeClaimedEvent {
    pub property_id: u64,
    pub holder: Address,
    pub amount: i128,
    pub acc_income_per_share: i128,
}

pub fn emit_property_registered(env: &Env, property_id: u64, name: String, location: String) {
    let event = PropertyRegisteredEvent {
        property_id,
        name,
        location,
    };
    env.events()
        .publish((symbol_short!("prop_reg"), property_id), event);
}

pub fn emit_property_updated(
    env: &Env,
    property_id: u64,
    name: String,
    location: String,
    active: bool,
) {
    let event = PropertyUpdatedEvent {
        property_id,
        name,
        location,
        active,
    };
    env.events()
        .publish((symbol_short!("prop_upd"), property_id), event);
}

pub fn emit_property_uri(env: &Env, property_id: u64, uri: String) {
    env.events()
        .publish((symbol_short!("prop_uri"), property_id), uri);
}

pub fn emit_shares_minted(env: &Env, property_id: u64, to: Address, amount: i128, total_shares: i128) {
    let event = SharesMintedEvent {
        property_id,
        to,
        amount,
        total_shares,
    };
    env.events().publish((symbol_short!("mint"), property_id), event);
}

pub fn emit_shares_batch_minted(env: &Env, to: Address, property_ids: Vec<u64>, amounts: Vec<i128>) {
    let event = SharesBatchMintedEvent {
        to: to.clone(),
        property_ids,
        amounts,
    };
    env.events().publish((symbol_short!("mint_bat"), to), event);
}

pub fn emit_shares_transferred(env: &Env, property_id: u64, from: Address, to: Address, amount: i128) {
    let event = SharesTransferredEvent {
        property_id,
        from,
        to,
        amount,
    };
    env.events()
        .publish((symbol_short!("transfer"), property_id), event);
}

pub fn emit_income_received(
    env: &Env,
    property_id: u64,
    depositor: Address,
    net: i128,
    fee: i128,
    acc_income_per_share: i128,
) {
    let event = IncomeReceivedEvent {
        property_id,
        depositor,
        net,
        fee,
        acc_income_per_share,
        timestamp: env.ledger().timestamp(),
    };
    env.events()
        .publish((symbol_short!("income"), property_id), event);
}

pub fn emit_fees_collected(env: &Env, property_id: u64, fee: i128) {
    env.events()
        .publish((symbol_short!("fees"), property_id), fee);
}

pub fn emit_income_settled(
    env: &Env,
    property_id: u64,
    holder: Address,
    settled: i128,
    old_shares: i128,
    new_shares: i128,
    acc_income_per_share: i128,
) {
    let event = IncomeSettledEvent {
        property_id,
        holder,
        settled,
        old_shares,
        new_shares,
        acc_income_per_share,
    };
    env.events()
        .publish((symbol_short!("settled"), property_id), event);
}

pub fn emit_income_claimed(
    env: &Env,
    property_id: u64,
    holder: Address,
    amount: i128,
    acc_income_per_share: i128,
) {
    let event = IncomeClaimedEvent {
        property_id,
        holder,
        amount,
        acc_income_per_share,
    };
    env.events()
        .publish((symbol_short!("claimed"), property_id), event);
}

pub fn emit_fees_withdrawn(env: &Env, recipient: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("fee_wdr"), recipient), amount);
}

pub fn emit_fee_rate_updated(env: &Env, admin: Address, fee_bps: u32) {
    env.events()
        .publish((symbol_short!("fee_rate"), admin), fee_bps);
}

pub fn emit_listing_fee_updated(env: &Env, admin: Address, fee: i128) {
    env.events()
        .publish((symbol_short!("list_fee"), admin), fee);
}

pub fn emit_admin_transferred(env: &Env, old_admin: Address, new_admin: Address) {
    env.events()
        .publish((symbol_short!("admin"), old_admin), new_admin);
}

pub fn emit_user_registered(env: &Env, user: Address, registered_at: u64) {
    env.events()
        .publish((symbol_short!("user_reg"), user), registered_at);
}

pub fn emit_kyc_approved(env: &Env, user: Address, kyc_hash: BytesN<32>) {
    env.events()
        .publish((symbol_short!("kyc_ok"), user), kyc_hash);
}

pub fn emit_kyc_revoked(env: &Env, user: Address) {
    env.events().publish((symbol_short!("kyc_rev"), user), ());
}
