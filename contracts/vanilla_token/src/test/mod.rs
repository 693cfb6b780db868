#![cfg(test)]

// ---------------------------------------------------------------------------
// Behavioural suite for the token.
//
// Every test builds its own provider and deploys a fresh instance through
// `setup()`, so no ledger state crosses test boundaries. `wallet` is the
// deployer and holds the whole supply; `other` starts with nothing.
// ---------------------------------------------------------------------------


use soroban_sdk::{vec, Address, Env, Val, Vec};
use vanilla_provider::{Provider, GENESIS_SEQUENCE};

use crate::{VanillaToken, VanillaTokenClient, DECIMALS};

/// 10 tokens.
pub const TEST_AMOUNT: i128 = 10 * 10_i128.pow(DECIMALS);
/// Far enough ahead that no test outlives an approval.
pub const EXPIRATION_LEDGER: u32 = GENESIS_SEQUENCE + 1_000;

pub struct Fixture {
    pub provider: Provider,
    pub env: Env,
    token: VanillaTokenClient<'static>,
    pub wallet: Address,
    pub other: Address,
}

impl Fixture {
    /// Client for the token under test. The budget is reset on every access,
    /// so each invocation runs under the per-call gas ceiling.
    pub fn token(&self) -> &VanillaTokenClient<'static> {
        self.provider.reset_budget();
        &self.token
    }
}

/// Deploys a token instance that has not been initialized yet.
pub fn setup_uninitialized() -> Fixture {
    let provider = Provider::default_provider().unwrap();
    let env = provider.env().clone();
    let wallets = provider.get_wallets().unwrap();

    let token = VanillaTokenClient::new(&env, &provider.deploy(VanillaToken));

    Fixture {
        wallet: wallets[0].address.clone(),
        other: wallets[1].address.clone(),
        provider,
        env,
        token,
    }
}

/// Deploys and initializes a token with `wallet` as the deployer.
pub fn setup() -> Fixture {
    let f = setup_uninitialized();
    f.token().initialize(&f.wallet);
    f
}

/// Asserts the most recent contract event came from the token under test
/// with exactly these topics and data.
pub fn assert_last_event(f: &Fixture, topics: Vec<Val>, data: Val) {
    let event = f.provider.last_event().unwrap();
    assert_eq!(vec![&f.env, event], vec![&f.env, (f.token.address.clone(), topics, data)]);
}

/// Third wallet, for transfers that go to neither party of an approval.
pub fn third_wallet(f: &Fixture) -> Address {
    f.provider.wallet(2).unwrap().address
}
