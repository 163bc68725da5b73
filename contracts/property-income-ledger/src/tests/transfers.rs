#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction},
    Address, IntoVal, Symbol,
};

use super::utils::*;
use crate::LedgerError;

// ============ SHARE TRANSFER TESTS ============

#[test]
fn test_transfer_shares() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let bob = create_investor(&ctx);
    let property_id = setup_property(&ctx, &[alice.clone()], &[100]);

    ctx.client.transfer_shares(&alice, &bob, &property_id, &30);

    assert_eq!(ctx.client.shares_of(&property_id, &alice), 70);
    assert_eq!(ctx.client.shares_of(&property_id, &bob), 30);
    assert_eq!(ctx.client.total_shares(&property_id), 100);
}

#[test]
fn test_transfer_requires_sender_auth() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let bob = create_investor(&ctx);
    let property_id = setup_property(&ctx, &[alice.clone()], &[100]);

    ctx.client.transfer_shares(&alice, &bob, &property_id, &30);

    let auths = ctx.env.auths();
    assert_eq!(auths.len(), 1);
    let (signer, invocation) = &auths[0];
    assert_eq!(*signer, alice);
    assert_eq!(
        invocation.function,
        AuthorizedFunction::Contract((
            ctx.contract_id.clone(),
            Symbol::new(&ctx.env, "transfer_shares"),
            (alice.clone(), bob.clone(), property_id, 30i128).into_val(&ctx.env),
        ))
    );
}

#[test]
fn test_transfer_preserves_earnings() {
    let ctx = setup_initialized();
    let holder = create_investor(&ctx);
    let buyer = create_investor(&ctx);
    let property_id = setup_property(&ctx, &[holder.clone()], &[100]);

    deposit(&ctx, property_id, HUNDRED);
    let earned = ctx.client.get_unclaimed_income(&property_id, &holder);
    assert!(earned > 0);

    ctx.client.transfer_shares(&holder, &buyer, &property_id, &100);

    assert_eq!(ctx.client.get_unclaimed_income(&property_id, &holder), earned);
    assert_eq!(ctx.client.get_unclaimed_income(&property_id, &buyer), 0);
    assert_eq!(ctx.client.get_holder_account(&property_id, &holder).pending, earned);

    // Seller can still collect after selling everything
    assert_eq!(ctx.client.claim(&property_id, &holder), earned);
    assert_eq!(ctx.client.claim(&property_id, &buyer), 0);
}

#[test]
fn test_income_after_transfer_follows_new_balances() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let bob = create_investor(&ctx);
    let property_id = setup_property(&ctx, &[alice.clone()], &[100]);

    deposit(&ctx, property_id, HUNDRED);
    ctx.client.transfer_shares(&alice, &bob, &property_id, &25);
    deposit(&ctx, property_id, HUNDRED);

    // alice: all of the first deposit + 75% of the second
    assert_eq!(
        ctx.client.get_unclaimed_income(&property_id, &alice),
        980_000_000 + 735_000_000
    );
    // bob: 25% of the second only
    assert_eq!(ctx.client.get_unclaimed_income(&property_id, &bob), 245_000_000);
}

#[test]
fn test_round_trip_transfer_does_not_double_count() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let bob = create_investor(&ctx);
    let property_id = setup_property(&ctx, &[alice.clone()], &[100]);

    deposit(&ctx, property_id, HUNDRED);
    ctx.client.transfer_shares(&alice, &bob, &property_id, &100);
    ctx.client.transfer_shares(&bob, &alice, &property_id, &100);

    assert_eq!(ctx.client.get_unclaimed_income(&property_id, &alice), 980_000_000);
    assert_eq!(ctx.client.get_unclaimed_income(&property_id, &bob), 0);
}

#[test]
fn test_transfer_insufficient_shares() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let bob = create_investor(&ctx);
    let property_id = setup_property(&ctx, &[alice.clone()], &[10]);

    let result = ctx.client.try_transfer_shares(&alice, &bob, &property_id, &11);

    assert_eq!(result, Err(Ok(LedgerError::InsufficientShares)));
    assert_eq!(ctx.client.shares_of(&property_id, &alice), 10);
}

#[test]
fn test_transfer_invalid_amount() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let bob = create_investor(&ctx);
    let property_id = setup_property(&ctx, &[alice.clone()], &[10]);

    let result = ctx.client.try_transfer_shares(&alice, &bob, &property_id, &0);
    assert_eq!(result, Err(Ok(LedgerError::InvalidAmount)));
}

#[test]
fn test_transfer_to_self() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let property_id = setup_property(&ctx, &[alice.clone()], &[10]);

    let result = ctx.client.try_transfer_shares(&alice, &alice, &property_id, &5);
    assert_eq!(result, Err(Ok(LedgerError::InvalidRecipient)));
}

#[test]
fn test_transfer_unknown_property() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let bob = create_investor(&ctx);

    let result = ctx.client.try_transfer_shares(&alice, &bob, &12, &5);
    assert_eq!(result, Err(Ok(LedgerError::UnknownProperty)));
}

#[test]
fn test_transfer_to_unverified_recipient() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let stranger = Address::generate(&ctx.env);
    let property_id = setup_property(&ctx, &[alice.clone()], &[10]);

    let result = ctx.client.try_transfer_shares(&alice, &stranger, &property_id, &5);

    assert_eq!(result, Err(Ok(LedgerError::KycNotApproved)));
    assert_eq!(ctx.client.shares_of(&property_id, &stranger), 0);
}

// ============ CONSERVATION TESTS ============

#[test]
fn test_funds_are_conserved() {
    let ctx = setup_initialized();
    let alice = create_investor(&ctx);
    let bob = create_investor(&ctx);
    let carol = create_investor(&ctx);
    let holders = [alice.clone(), bob.clone(), carol.clone()];
    let property_id = setup_property(&ctx, &holders, &[37, 41, 22]);

    let mut deposited = 0i128;
    let mut paid = 0i128;
    let steps: [(i128, u32); 6] = [
        (HUNDRED, 0),
        (333_333_333, 1),
        (7, 2),
        (HUNDRED * 3, 0),
        (123_456_789, 1),
        (999, 2),
    ];
    for (i, (amount, actor)) in steps.iter().enumerate() {
        deposit(&ctx, property_id, *amount);
        deposited += amount;

        let from = &holders[*actor as usize];
        let to = &holders[(*actor as usize + 1) % holders.len()];
        if ctx.client.shares_of(&property_id, from) > 1 {
            ctx.client.transfer_shares(from, to, &property_id, &1);
        }
        if i % 2 == 1 {
            paid += ctx.client.claim(&property_id, to);
        }
    }

    let unclaimed: i128 = holders
        .iter()
        .map(|holder| ctx.client.get_unclaimed_income(&property_id, holder))
        .sum();
    let fees = ctx.client.fee_balance();
    let accounted = paid + unclaimed + fees;

    // Rounding dust stays in the contract, never more than was deposited
    assert!(accounted <= deposited);
    assert!(deposited - accounted <= 24);
    assert_eq!(ctx.token_client.balance(&ctx.contract_id), deposited - paid);
    assert!(ctx.token_client.balance(&ctx.contract_id) >= unclaimed + fees);
}
