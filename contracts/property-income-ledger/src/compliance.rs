use soroban_sdk::{Address, BytesN, Env};

use crate::{admin, error::LedgerError, events, storage, types::UserProfile};

// Identity checks happen off-chain; only the pass/fail outcome and the
// reviewed document hash are stored here.

pub fn register_user(env: &Env, user: &Address) -> Result<(), LedgerError> {
    user.require_auth();
    if storage::has_user(env, user) {
        return Err(LedgerError::AlreadyRegistered);
    }
    let profile = UserProfile {
        registered_at: env.ledger().timestamp(),
    };
    storage::set_user(env, user, &profile);
    events::emit_user_registered(env, user.clone(), profile.registered_at);
    Ok(())
}

pub fn is_registered(env: &Env, user: &Address) -> bool {
    storage::has_user(env, user)
}

pub fn get_user(env: &Env, user: &Address) -> Result<UserProfile, LedgerError> {
    storage::get_user(env, user).ok_or(LedgerError::UserNotRegistered)
}

pub fn approve_kyc(
    env: &Env,
    admin_addr: &Address,
    user: &Address,
    kyc_hash: BytesN<32>,
) -> Result<(), LedgerError> {
    admin::require_admin(env, admin_addr)?;
    if !is_registered(env, user) {
        return Err(LedgerError::UserNotRegistered);
    }
    storage::set_kyc(env, user, &kyc_hash);
    events::emit_kyc_approved(env, user.clone(), kyc_hash);
    Ok(())
}

pub fn revoke_kyc(env: &Env, admin_addr: &Address, user: &Address) -> Result<(), LedgerError> {
    admin::require_admin(env, admin_addr)?;
    if !is_kyc_approved(env, user) {
        return Err(LedgerError::KycNotApproved);
    }
    storage::remove_kyc(env, user);
    events::emit_kyc_revoked(env, user.clone());
    Ok(())
}

pub fn is_kyc_approved(env: &Env, user: &Address) -> bool {
    storage::get_kyc(env, user).is_some()
}

pub fn kyc_hash(env: &Env, user: &Address) -> Result<BytesN<32>, LedgerError> {
    storage::get_kyc(env, user).ok_or(LedgerError::KycNotApproved)
}

pub fn require_kyc(env: &Env, user: &Address) -> Result<(), LedgerError> {
    if !is_kyc_approved(env, user) {
        return Err(LedgerError::KycNotApproved);
    }
    Ok(())
}
