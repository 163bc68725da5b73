#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env, String, Symbol, TryFromVal, Val, Vec,
};

use crate::{PropertyIncomeLedger, PropertyIncomeLedgerClient, DEFAULT_FEE_BPS};

/// 100 units of a 7-decimal asset.
pub const HUNDRED: i128 = 1_000_000_000;
/// Flat fee used by listing-fee tests; the default setup charges none.
pub const LISTING_FEE: i128 = 50_000_000;

// ============ TEST CONTEXT ============

pub struct TestContext {
    pub env: Env,
    pub client: PropertyIncomeLedgerClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub token: Address,
    pub token_client: TokenClient<'static>,
    pub token_admin_client: StellarAssetClient<'static>,
}

// ============ SETUP FUNCTIONS ============

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);

    let admin = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();

    let contract_id = env.register(PropertyIncomeLedger, ());
    let client = PropertyIncomeLedgerClient::new(&env, &contract_id);
    let token_client = TokenClient::new(&env, &token);
    let token_admin_client = StellarAssetClient::new(&env, &token);

    TestContext {
        env,
        client,
        contract_id,
        admin,
        token,
        token_client,
        token_admin_client,
    }
}

pub fn setup_initialized() -> TestContext {
    let ctx = setup_test();
    ctx.client
        .initialize(&ctx.admin, &ctx.token, &DEFAULT_FEE_BPS, &0);
    ctx
}

// ============ USERS ============

pub fn kyc_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[7u8; 32])
}

pub fn create_investor(ctx: &TestContext) -> Address {
    let investor = Address::generate(&ctx.env);
    ctx.client.register_user(&investor);
    ctx.client
        .approve_kyc(&ctx.admin, &investor, &kyc_hash(&ctx.env));
    investor
}

pub fn create_depositor(ctx: &TestContext, funds: i128) -> Address {
    let depositor = Address::generate(&ctx.env);
    ctx.token_admin_client.mint(&depositor, &funds);
    depositor
}

// ============ PROPERTIES ============

pub fn register_property(ctx: &TestContext) -> u64 {
    ctx.client.register_property(
        &ctx.admin,
        &String::from_str(&ctx.env, "Harbor View"),
        &String::from_str(&ctx.env, "Lisbon"),
    )
}

/// Registers a property and mints `shares[i]` to `holders[i]`.
pub fn setup_property(ctx: &TestContext, holders: &[Address], shares: &[i128]) -> u64 {
    let property_id = register_property(ctx);
    for (holder, amount) in holders.iter().zip(shares.iter()) {
        ctx.client
            .mint_shares(&ctx.admin, &property_id, holder, amount);
    }
    property_id
}

// ============ INCOME ============

pub fn deposit(ctx: &TestContext, property_id: u64, amount: i128) {
    let depositor = create_depositor(ctx, amount);
    ctx.client
        .deposit_income(&depositor, &property_id, &amount);
}

pub fn advance_time(ctx: &TestContext, seconds: u64) {
    let now = ctx.env.ledger().timestamp();
    ctx.env.ledger().set_timestamp(now + seconds);
}

// ============ EVENTS ============

/// Events published by the ledger contract, as (topic symbol, topics, data).
pub fn contract_events(ctx: &TestContext) -> std::vec::Vec<(Symbol, Vec<Val>, Val)> {
    let mut found = std::vec::Vec::new();
    for (address, topics, data) in ctx.env.events().all().iter() {
        if address != ctx.contract_id {
            continue;
        }
        let name = Symbol::try_from_val(&ctx.env, &topics.get(0).unwrap()).unwrap();
        found.push((name, topics, data));
    }
    found
}

pub fn last_event_data<T: TryFromVal<Env, Val>>(ctx: &TestContext, name: &str) -> T {
    let symbol = Symbol::new(&ctx.env, name);
    let (_, _, data) = contract_events(ctx)
        .into_iter()
        .rev()
        .find(|(topic, _, _)| *topic == symbol)
        .expect("event not published");
    T::try_from_val(&ctx.env, &data).ok().unwrap()
}
