use soroban_sdk::{Address, Env};

use crate::{error::LedgerError, events, math::MAX_FEE_BPS, storage};

pub fn initialize(
    env: &Env,
    admin: &Address,
    payment_token: &Address,
    fee_bps: u32,
    listing_fee: i128,
) -> Result<(), LedgerError> {
    if storage::has_admin(env) {
        return Err(LedgerError::AlreadyInitialized);
    }
    admin.require_auth();
    if fee_bps > MAX_FEE_BPS {
        return Err(LedgerError::InvalidFeeRate);
    }
    if listing_fee < 0 {
        return Err(LedgerError::InvalidAmount);
    }

    storage::set_admin(env, admin);
    storage::set_payment_token(env, payment_token);
    storage::set_fee_rate(env, fee_bps);
    storage::set_listing_fee(env, listing_fee);
    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, LedgerError> {
    storage::get_admin(env).ok_or(LedgerError::NotInitialized)
}

/// Authenticates `caller` and checks it is the configured admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    let admin = get_admin(env)?;
    caller.require_auth();
    if admin != *caller {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

pub fn transfer_admin(env: &Env, admin: &Address, new_admin: &Address) -> Result<(), LedgerError> {
    require_admin(env, admin)?;
    storage::set_admin(env, new_admin);
    events::emit_admin_transferred(env, admin.clone(), new_admin.clone());
    Ok(())
}

pub fn payment_token(env: &Env) -> Result<Address, LedgerError> {
    storage::get_payment_token(env).ok_or(LedgerError::NotInitialized)
}

pub fn fee_rate(env: &Env) -> Result<u32, LedgerError> {
    storage::get_fee_rate(env).ok_or(LedgerError::NotInitialized)
}

pub fn set_fee_rate(env: &Env, admin: &Address, fee_bps: u32) -> Result<(), LedgerError> {
    require_admin(env, admin)?;
    if fee_bps > MAX_FEE_BPS {
        return Err(LedgerError::InvalidFeeRate);
    }
    storage::set_fee_rate(env, fee_bps);
    events::emit_fee_rate_updated(env, admin.clone(), fee_bps);
    Ok(())
}

/// Flat fee charged to the admin for every property registered.
pub fn listing_fee(env: &Env) -> Result<i128, LedgerError> {
    storage::get_listing_fee(env).ok_or(LedgerError::NotInitialized)
}

pub fn set_listing_fee(env: &Env, admin: &Address, fee: i128) -> Result<(), LedgerError> {
    require_admin(env, admin)?;
    if fee < 0 {
        return Err(LedgerError::InvalidAmount);
    }
    storage::set_listing_fee(env, fee);
    events::emit_listing_fee_updated(env, admin.clone(), fee);
    Ok(())
}
