#![no_std]

mod accrual;
mod admin;
mod compliance;
mod error;
mod events;
mod fees;
mod math;
mod registry;
mod storage;
mod types;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use math::{BPS_DENOMINATOR, DEFAULT_FEE_BPS, MAX_FEE_BPS, SCALE};
pub use types::*;

#[contract]
pub struct PropertyIncomeLedger;

#[contractimpl]
impl PropertyIncomeLedger {
    /// Initialize the contract with admin, payout token, income fee rate (bps)
    /// and the flat listing fee charged per registered property
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        fee_bps: u32,
        listing_fee: i128,
    ) -> Result<(), LedgerError> {
        admin::initialize(&env, &admin, &payment_token, fee_bps, listing_fee)
    }

    // Admin functions
    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), LedgerError> {
        admin::transfer_admin(&env, &admin, &new_admin)
    }

    pub fn set_fee_rate(env: Env, admin: Address, fee_bps: u32) -> Result<(), LedgerError> {
        admin::set_fee_rate(&env, &admin, fee_bps)
    }

    pub fn set_listing_fee(env: Env, admin: Address, fee: i128) -> Result<(), LedgerError> {
        admin::set_listing_fee(&env, &admin, fee)
    }

    pub fn listing_fee(env: Env) -> Result<i128, LedgerError> {
        admin::listing_fee(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        admin::get_admin(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, LedgerError> {
        admin::payment_token(&env)
    }

    pub fn fee_rate(env: Env) -> Result<u32, LedgerError> {
        admin::fee_rate(&env)
    }

    // Compliance functions
    pub fn register_user(env: Env, user: Address) -> Result<(), LedgerError> {
        compliance::register_user(&env, &user)
    }

    pub fn is_registered(env: Env, user: Address) -> bool {
        compliance::is_registered(&env, &user)
    }

    pub fn get_user(env: Env, user: Address) -> Result<UserProfile, LedgerError> {
        compliance::get_user(&env, &user)
    }

    pub fn approve_kyc(
        env: Env,
        admin: Address,
        user: Address,
        kyc_hash: BytesN<32>,
    ) -> Result<(), LedgerError> {
        compliance::approve_kyc(&env, &admin, &user, kyc_hash)
    }

    pub fn revoke_kyc(env: Env, admin: Address, user: Address) -> Result<(), LedgerError> {
        compliance::revoke_kyc(&env, &admin, &user)
    }

    pub fn is_kyc_approved(env: Env, user: Address) -> bool {
        compliance::is_kyc_approved(&env, &user)
    }

    pub fn kyc_hash(env: Env, user: Address) -> Result<BytesN<32>, LedgerError> {
        compliance::kyc_hash(&env, &user)
    }

    // Registry functions
    pub fn register_property(
        env: Env,
        admin: Address,
        name: String,
        location: String,
    ) -> Result<u64, LedgerError> {
        registry::register_property(&env, &admin, name, location)
    }

    pub fn update_property(
        env: Env,
        admin: Address,
        property_id: u64,
        name: String,
        location: String,
        active: bool,
    ) -> Result<(), LedgerError> {
        registry::update_property(&env, &admin, property_id, name, location, active)
    }

    pub fn set_property_uri(
        env: Env,
        admin: Address,
        property_id: u64,
        uri: String,
    ) -> Result<(), LedgerError> {
        registry::set_property_uri(&env, &admin, property_id, uri)
    }

    pub fn property_uri(env: Env, property_id: u64) -> Result<String, LedgerError> {
        registry::property_uri(&env, property_id)
    }

    pub fn get_property(env: Env, property_id: u64) -> Result<Property, LedgerError> {
        registry::get_property(&env, property_id)
    }

    pub fn property_count(env: Env) -> u64 {
        storage::property_count(&env)
    }

    pub fn mint_shares(
        env: Env,
        admin: Address,
        property_id: u64,
        to: Address,
        amount: i128,
    ) -> Result<i128, LedgerError> {
        registry::mint_shares(&env, &admin, property_id, &to, amount)
    }

    pub fn mint_batch(
        env: Env,
        admin: Address,
        to: Address,
        property_ids: Vec<u64>,
        amounts: Vec<i128>,
    ) -> Result<(), LedgerError> {
        registry::mint_batch(&env, &admin, &to, property_ids, amounts)
    }

    pub fn transfer_shares(
        env: Env,
        from: Address,
        to: Address,
        property_id: u64,
        amount: i128,
    ) -> Result<(), LedgerError> {
        registry::transfer_shares(&env, &from, &to, property_id, amount)
    }

    pub fn total_shares(env: Env, property_id: u64) -> Result<i128, LedgerError> {
        registry::total_shares(&env, property_id)
    }

    pub fn shares_of(env: Env, property_id: u64, holder: Address) -> i128 {
        registry::shares_of(&env, property_id, &holder)
    }

    // Income functions
    pub fn deposit_income(
        env: Env,
        depositor: Address,
        property_id: u64,
        amount: i128,
    ) -> Result<DepositReceipt, LedgerError> {
        accrual::deposit_income(&env, &depositor, property_id, amount)
    }

    /// Pay out a holder's unclaimed income; callable by anyone
    pub fn claim(env: Env, property_id: u64, holder: Address) -> Result<i128, LedgerError> {
        accrual::claim(&env, property_id, &holder)
    }

    pub fn get_unclaimed_income(
        env: Env,
        property_id: u64,
        holder: Address,
    ) -> Result<i128, LedgerError> {
        accrual::get_unclaimed_income(&env, property_id, &holder)
    }

    pub fn get_holder_account(
        env: Env,
        property_id: u64,
        holder: Address,
    ) -> Result<HolderAccount, LedgerError> {
        accrual::get_holder_account(&env, property_id, &holder)
    }

    // Fee functions
    pub fn withdraw_fees(env: Env, caller: Address, recipient: Address) -> Result<i128, LedgerError> {
        fees::withdraw_fees(&env, &caller, &recipient)
    }

    pub fn fee_balance(env: Env) -> i128 {
        fees::fee_balance(&env)
    }

    pub fn total_fees_collected(env: Env) -> i128 {
        fees::total_fees_collected(&env)
    }
}
