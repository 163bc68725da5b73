use soroban_sdk::{token, Address, Env};

use crate::{admin, error::LedgerError, events, math::add_i128, storage};

pub fn fee_balance(env: &Env) -> i128 {
    storage::get_fee_balance(env)
}

/// Lifetime fees skimmed from deposits, withdrawn or not.
pub fn total_fees_collected(env: &Env) -> i128 {
    storage::get_fees_collected(env)
}

pub(crate) fn accrue(env: &Env, fee: i128) -> Result<(), LedgerError> {
    if fee == 0 {
        return Ok(());
    }
    storage::set_fee_balance(env, add_i128(fee_balance(env), fee)?);
    storage::set_fees_collected(env, add_i128(total_fees_collected(env), fee)?);
    Ok(())
}

pub fn withdraw_fees(env: &Env, caller: &Address, recipient: &Address) -> Result<i128, LedgerError> {
    admin::require_admin(env, caller)?;

    let amount = fee_balance(env);
    if amount <= 0 {
        return Err(LedgerError::NoFeesToWithdraw);
    }
    let token_address = admin::payment_token(env)?;

    // Zero the balance before paying out
    storage::set_fee_balance(env, 0);

    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(&env.current_contract_address(), recipient, &amount);

    events::emit_fees_withdrawn(env, recipient.clone(), amount);
    Ok(amount)
}
