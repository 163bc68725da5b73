use soroban_sdk::{log, token, Address, Env};

use crate::{
    admin,
    error::LedgerError,
    events, fees,
    math::{add_i128, split_fee, FixedPoint},
    registry, storage,
    types::{DepositReceipt, HolderAccount, Property},
};

/// Deposits income for a property and spreads the net amount over the
/// current share supply.
pub fn deposit_income(
    env: &Env,
    depositor: &Address,
    property_id: u64,
    amount: i128,
) -> Result<DepositReceipt, LedgerError> {
    depositor.require_auth();
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    let mut property = registry::get_property(env, property_id)?;
    if !property.active {
        return Err(LedgerError::PropertyInactive);
    }
    if property.total_shares <= 0 {
        log!(env, "deposit rejected, property {} has no shares", property_id);
        return Err(LedgerError::NoShares);
    }
    let token_address = admin::payment_token(env)?;
    let (net, fee) = split_fee(amount, admin::fee_rate(env)?)?;

    // One division per deposit; holders only multiply.
    let increment = FixedPoint::ratio(net, property.total_shares)?;
    if increment == FixedPoint::ZERO {
        return Err(LedgerError::InvalidAmount);
    }
    let acc = FixedPoint::from_raw(property.acc_income_per_share).checked_add(increment)?;

    property.acc_income_per_share = acc.raw();
    property.total_distributed = add_i128(property.total_distributed, net)?;
    property.last_update = env.ledger().timestamp();
    storage::set_property(env, &property);
    fees::accrue(env, fee)?;

    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(depositor, &env.current_contract_address(), &amount);

    events::emit_income_received(env, property_id, depositor.clone(), net, fee, acc.raw());
    events::emit_fees_collected(env, property_id, fee);

    Ok(DepositReceipt {
        net,
        fee,
        acc_income_per_share: acc.raw(),
    })
}

/// Moves everything `shares` earned since the account's baseline into
/// `pending` and advances the baseline. Returns the amount moved.
fn settle(property: &Property, shares: i128, account: &mut HolderAccount) -> Result<i128, LedgerError> {
    let acc = FixedPoint::from_raw(property.acc_income_per_share);
    let earned = acc
        .checked_sub(FixedPoint::from_raw(account.baseline))?
        .mul_floor(shares)?;
    account.pending = add_i128(account.pending, earned)?;
    account.baseline = acc.raw();
    Ok(earned)
}

/// Hook run by the registry before a holder's balance changes.
pub fn on_share_balance_change(
    env: &Env,
    property: &Property,
    holder: &Address,
    old_shares: i128,
    new_shares: i128,
) -> Result<(), LedgerError> {
    let mut account = storage::get_account(env, property.id, holder);
    let settled = settle(property, old_shares, &mut account)?;
    storage::set_account(env, property.id, holder, &account);

    if settled > 0 {
        log!(env, "settled {} for holder on property {}", settled, property.id);
    }
    events::emit_income_settled(
        env,
        property.id,
        holder.clone(),
        settled,
        old_shares,
        new_shares,
        property.acc_income_per_share,
    );
    Ok(())
}

pub fn get_unclaimed_income(env: &Env, property_id: u64, holder: &Address) -> Result<i128, LedgerError> {
    let property = registry::get_property(env, property_id)?;
    let shares = registry::shares_of(env, property_id, holder);
    let mut account = storage::get_account(env, property_id, holder);
    settle(&property, shares, &mut account)?;
    Ok(account.pending)
}

/// Holder bookkeeping as of now: `pending` includes income accrued since
/// the stored baseline. Nothing is written.
pub fn get_holder_account(env: &Env, property_id: u64, holder: &Address) -> Result<HolderAccount, LedgerError> {
    let property = registry::get_property(env, property_id)?;
    let shares = registry::shares_of(env, property_id, holder);
    let mut account = storage::get_account(env, property_id, holder);
    settle(&property, shares, &mut account)?;
    Ok(account)
}

/// Pays `holder` everything it is owed on a property. Anyone may trigger
/// the payout; funds only ever go to `holder`. Returns 0 without touching
/// state when nothing is owed.
pub fn claim(env: &Env, property_id: u64, holder: &Address) -> Result<i128, LedgerError> {
    let property = registry::get_property(env, property_id)?;
    let shares = registry::shares_of(env, property_id, holder);
    let mut account = storage::get_account(env, property_id, holder);
    settle(&property, shares, &mut account)?;

    let owed = account.pending;
    if owed == 0 {
        log!(env, "nothing to claim on property {}", property_id);
        return Ok(0);
    }
    let token_address = admin::payment_token(env)?;

    account.pending = 0;
    account.total_claimed = add_i128(account.total_claimed, owed)?;
    account.last_claim = env.ledger().timestamp();
    storage::set_account(env, property_id, holder, &account);

    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(&env.current_contract_address(), holder, &owed);

    events::emit_income_claimed(
        env,
        property_id,
        holder.clone(),
        owed,
        property.acc_income_per_share,
    );
    Ok(owed)
}
