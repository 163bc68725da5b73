use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::types::{HolderAccount, Property, UserProfile};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    PaymentToken,
    FeeRate,
    ListingFee,
    FeeBalance,
    FeesCollected,
    NextPropertyId,
    Property(u64),         // property_id -> Property
    Balance(u64, Address), // property_id, holder -> shares
    Account(u64, Address), // property_id, holder -> HolderAccount
    Kyc(Address),          // user -> approved document hash
    User(Address),         // user -> UserProfile
}

// Configuration (instance storage)

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_fee_rate(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::FeeRate)
}

pub fn set_fee_rate(env: &Env, fee_bps: u32) {
    env.storage().instance().set(&DataKey::FeeRate, &fee_bps);
}

pub fn get_listing_fee(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::ListingFee)
}

pub fn set_listing_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::ListingFee, &fee);
}

pub fn get_fee_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::FeeBalance)
        .unwrap_or(0)
}

pub fn set_fee_balance(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::FeeBalance, &amount);
}

pub fn get_fees_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::FeesCollected)
        .unwrap_or(0)
}

pub fn set_fees_collected(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::FeesCollected, &amount);
}

/// Returns the id for a new property and advances the counter.
pub fn next_property_id(env: &Env) -> u64 {
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextPropertyId)
        .unwrap_or(1);
    env.storage()
        .instance()
        .set(&DataKey::NextPropertyId, &(current + 1));
    current
}

pub fn property_count(env: &Env) -> u64 {
    let next: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextPropertyId)
        .unwrap_or(1);
    next - 1
}

// Properties and holders (persistent storage)

pub fn get_property(env: &Env, property_id: u64) -> Option<Property> {
    env.storage()
        .persistent()
        .get(&DataKey::Property(property_id))
}

pub fn set_property(env: &Env, property: &Property) {
    env.storage()
        .persistent()
        .set(&DataKey::Property(property.id), property);
}

pub fn get_balance(env: &Env, property_id: u64, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(property_id, holder.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, property_id: u64, holder: &Address, shares: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(property_id, holder.clone()), &shares);
}

pub fn get_account(env: &Env, property_id: u64, holder: &Address) -> HolderAccount {
    env.storage()
        .persistent()
        .get(&DataKey::Account(property_id, holder.clone()))
        .unwrap_or_default()
}

pub fn set_account(env: &Env, property_id: u64, holder: &Address, account: &HolderAccount) {
    env.storage()
        .persistent()
        .set(&DataKey::Account(property_id, holder.clone()), account);
}

pub fn get_kyc(env: &Env, user: &Address) -> Option<BytesN<32>> {
    env.storage().persistent().get(&DataKey::Kyc(user.clone()))
}

pub fn set_kyc(env: &Env, user: &Address, kyc_hash: &BytesN<32>) {
    env.storage()
        .persistent()
        .set(&DataKey::Kyc(user.clone()), kyc_hash);
}

pub fn remove_kyc(env: &Env, user: &Address) {
    env.storage().persistent().remove(&DataKey::Kyc(user.clone()));
}

pub fn has_user(env: &Env, user: &Address) -> bool {
    env.storage().persistent().has(&DataKey::User(user.clone()))
}

pub fn get_user(env: &Env, user: &Address) -> Option<UserProfile> {
    env.storage().persistent().get(&DataKey::User(user.clone()))
}

pub fn set_user(env: &Env, user: &Address, profile: &UserProfile) {
    env.storage()
        .persistent()
        .set(&DataKey::User(user.clone()), profile);
}
