use soroban_sdk::{token, Address, Env, String, Vec};

use crate::{
    accrual, admin, compliance,
    error::LedgerError,
    events, fees,
    math::{add_i128, sub_i128},
    storage,
    types::Property,
};

pub fn register_property(
    env: &Env,
    admin_addr: &Address,
    name: String,
    location: String,
) -> Result<u64, LedgerError> {
    admin::require_admin(env, admin_addr)?;

    let listing_fee = admin::listing_fee(env)?;
    let token_client = token::Client::new(env, &admin::payment_token(env)?);
    if listing_fee > 0 && token_client.balance(admin_addr) < listing_fee {
        return Err(LedgerError::InsufficientListingFee);
    }

    let property_id = storage::next_property_id(env);
    let property = Property {
        id: property_id,
        name: name.clone(),
        location: location.clone(),
        metadata_uri: String::from_str(env, ""),
        active: true,
        total_shares: 0,
        acc_income_per_share: 0,
        total_distributed: 0,
        last_update: 0,
    };
    storage::set_property(env, &property);

    if listing_fee > 0 {
        fees::accrue(env, listing_fee)?;
        token_client.transfer(admin_addr, &env.current_contract_address(), &listing_fee);
        events::emit_fees_collected(env, property_id, listing_fee);
    }

    events::emit_property_registered(env, property_id, name, location);
    Ok(property_id)
}

pub fn update_property(
    env: &Env,
    admin_addr: &Address,
    property_id: u64,
    name: String,
    location: String,
    active: bool,
) -> Result<(), LedgerError> {
    admin::require_admin(env, admin_addr)?;
    let mut property = get_property(env, property_id)?;

    property.name = name.clone();
    property.location = location.clone();
    property.active = active;
    storage::set_property(env, &property);

    events::emit_property_updated(env, property_id, name, location, active);
    Ok(())
}

pub fn set_property_uri(
    env: &Env,
    admin_addr: &Address,
    property_id: u64,
    uri: String,
) -> Result<(), LedgerError> {
    admin::require_admin(env, admin_addr)?;
    let mut property = get_property(env, property_id)?;

    property.metadata_uri = uri.clone();
    storage::set_property(env, &property);

    events::emit_property_uri(env, property_id, uri);
    Ok(())
}

pub fn property_uri(env: &Env, property_id: u64) -> Result<String, LedgerError> {
    Ok(get_property(env, property_id)?.metadata_uri)
}

pub fn get_property(env: &Env, property_id: u64) -> Result<Property, LedgerError> {
    storage::get_property(env, property_id).ok_or(LedgerError::UnknownProperty)
}

pub fn total_shares(env: &Env, property_id: u64) -> Result<i128, LedgerError> {
    Ok(get_property(env, property_id)?.total_shares)
}

pub fn shares_of(env: &Env, property_id: u64, holder: &Address) -> i128 {
    storage::get_balance(env, property_id, holder)
}

/// Issues new shares of a property. New holders start accruing from the
/// current accumulator, so minting never dilutes income already deposited.
pub fn mint_shares(
    env: &Env,
    admin_addr: &Address,
    property_id: u64,
    to: &Address,
    amount: i128,
) -> Result<i128, LedgerError> {
    admin::require_admin(env, admin_addr)?;
    issue(env, property_id, to, amount)
}

/// Mints `amounts[i]` shares of `property_ids[i]` to one holder. The batch
/// is all-or-nothing.
pub fn mint_batch(
    env: &Env,
    admin_addr: &Address,
    to: &Address,
    property_ids: Vec<u64>,
    amounts: Vec<i128>,
) -> Result<(), LedgerError> {
    admin::require_admin(env, admin_addr)?;
    if property_ids.len() != amounts.len() {
        return Err(LedgerError::BatchLengthMismatch);
    }
    if property_ids.is_empty() {
        return Err(LedgerError::InvalidAmount);
    }
    for (property_id, amount) in property_ids.iter().zip(amounts.iter()) {
        issue(env, property_id, to, amount)?;
    }

    events::emit_shares_batch_minted(env, to.clone(), property_ids, amounts);
    Ok(())
}

fn issue(env: &Env, property_id: u64, to: &Address, amount: i128) -> Result<i128, LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    let mut property = get_property(env, property_id)?;
    compliance::require_kyc(env, to)?;

    let old_balance = shares_of(env, property_id, to);
    let new_balance = add_i128(old_balance, amount)?;
    property.total_shares = add_i128(property.total_shares, amount)?;

    apply_balance_change(env, &property, to, old_balance, new_balance)?;
    storage::set_property(env, &property);

    events::emit_shares_minted(env, property_id, to.clone(), amount, property.total_shares);
    Ok(property.total_shares)
}

pub fn transfer_shares(
    env: &Env,
    from: &Address,
    to: &Address,
    property_id: u64,
    amount: i128,
) -> Result<(), LedgerError> {
    from.require_auth();
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    if from == to {
        return Err(LedgerError::InvalidRecipient);
    }
    let property = get_property(env, property_id)?;
    compliance::require_kyc(env, from)?;
    compliance::require_kyc(env, to)?;

    let from_balance = shares_of(env, property_id, from);
    if from_balance < amount {
        return Err(LedgerError::InsufficientShares);
    }
    let to_balance = shares_of(env, property_id, to);
    let from_after = sub_i128(from_balance, amount)?;
    let to_after = add_i128(to_balance, amount)?;

    apply_balance_change(env, &property, from, from_balance, from_after)?;
    apply_balance_change(env, &property, to, to_balance, to_after)?;

    events::emit_shares_transferred(env, property_id, from.clone(), to.clone(), amount);
    Ok(())
}

// Every balance write goes through here so the income ledger settles the
// old balance before it changes.
fn apply_balance_change(
    env: &Env,
    property: &Property,
    holder: &Address,
    old_shares: i128,
    new_shares: i128,
) -> Result<(), LedgerError> {
    accrual::on_share_balance_change(env, property, holder, old_shares, new_shares)?;
    storage::set_balance(env, property.id, holder, new_shares);
    Ok(())
}
