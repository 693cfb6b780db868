#![cfg(test)]


use soroban_sdk::{contract, contractimpl, symbol_short, Env, TryFromVal};

use crate::{Provider, ProviderConfig, GENESIS_SEQUENCE, GENESIS_TIMESTAMP};

// ---------------------------------------------------------------------------
// Minimal stub so `deploy` and `last_event` have something to run.
// ---------------------------------------------------------------------------
#[contract]
pub struct PingStub;

#[contractimpl]
impl PingStub {
    pub fn ping(env: Env, value: u32) {
        env.events().publish((symbol_short!("ping"),), value);
    }
}

#[test]
fn ledger_is_pinned_to_the_configured_baseline() {
    let provider = Provider::default_provider().unwrap();
    let env = provider.env();

    assert_eq!(env.ledger().protocol_version(), 21);
    assert_eq!(env.ledger().sequence(), GENESIS_SEQUENCE);
    assert_eq!(env.ledger().timestamp(), GENESIS_TIMESTAMP);
}

#[test]
fn network_id_is_the_same_for_every_provider() {
    let a = Provider::default_provider().unwrap();
    let b = Provider::default_provider().unwrap();

    assert_eq!(
        a.env().ledger().network_id().to_array(),
        b.env().ledger().network_id().to_array()
    );
}

#[test]
fn default_provider_uses_default_config() {
    let provider = Provider::default_provider().unwrap();
    assert_eq!(provider.config(), &ProviderConfig::default());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ProviderConfig { gas_limit: 0, ..ProviderConfig::default() };
    assert!(Provider::new(config).is_err());
}

#[test]
fn each_deploy_creates_a_new_instance() {
    let provider = Provider::default_provider().unwrap();
    let first = provider.deploy(PingStub);
    let second = provider.deploy(PingStub);

    assert_ne!(first, second);
}

#[test]
fn last_event_reports_the_most_recent_publish() {
    let provider = Provider::default_provider().unwrap();
    let env = provider.env();
    let id = provider.deploy(PingStub);
    let client = PingStubClient::new(env, &id);

    assert!(provider.last_event().is_none());

    client.ping(&7);
    let (contract, _topics, data) = provider.last_event().unwrap();
    assert_eq!(contract, id);
    assert_eq!(u32::try_from_val(env, &data).unwrap(), 7);
}

#[test]
fn budget_is_reset_for_every_metered_call() {
    let provider = Provider::default_provider().unwrap();
    let client = PingStubClient::new(provider.env(), &provider.deploy(PingStub));

    for value in 0..150 {
        provider.metered(|| client.ping(&value));
    }
    let (_, _, data) = provider.last_event().unwrap();
    assert_eq!(u32::try_from_val(provider.env(), &data).unwrap(), 149);
}

#[test]
fn single_call_over_the_gas_limit_is_rejected() {
    let config = ProviderConfig { gas_limit: 1_000, ..ProviderConfig::default() };
    let provider = Provider::new(config).unwrap();
    provider.env().budget().reset_unlimited();
    let client = PingStubClient::new(provider.env(), &provider.deploy(PingStub));

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        provider.metered(|| client.try_ping(&1))
    }));
    assert!(!matches!(outcome, Ok(Ok(Ok(())))));

    provider.env().budget().reset_unlimited();
}
