#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod allowance;
mod balance;
mod errors;
mod events;
mod storage;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use errors::VanillaTokenError;
use events::TokenEvents;
use storage::TokenMetadata;

/// Decimal places the token amounts are expressed in.
pub const DECIMALS: u32 = 18;
/// Whole supply, credited to the deployer by `initialize`: 10 000 tokens.
pub const TOTAL_SUPPLY: i128 = 10_000 * 10_i128.pow(DECIMALS);
/// Largest representable amount, conventionally approved to mean "unlimited".
pub const UNLIMITED_ALLOWANCE: i128 = i128::MAX;

const NAME: &str = "Vanilla Token";
const SYMBOL: &str = "VTN";

fn check_nonnegative_amount(amount: i128) -> Result<(), VanillaTokenError> {
    if amount < 0 {
        return Err(VanillaTokenError::NegativeAmount);
    }
    Ok(())
}

fn ensure_initialized(env: &Env) -> Result<(), VanillaTokenError> {
    if !storage::has_metadata(env) {
        return Err(VanillaTokenError::NotInitialized);
    }
    Ok(())
}

fn metadata(env: &Env) -> Result<TokenMetadata, VanillaTokenError> {
    storage::get_metadata(env).ok_or(VanillaTokenError::NotInitialized)
}

#[contract]
pub struct VanillaToken;

#[contractimpl]
impl VanillaToken {
    /// Stores the token metadata and credits the whole supply to `owner`.
    pub fn initialize(env: Env, owner: Address) -> Result<(), VanillaTokenError> {
        if storage::has_metadata(&env) {
            return Err(VanillaTokenError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_metadata(
            &env,
            &TokenMetadata {
                decimals: DECIMALS,
                name: String::from_str(&env, NAME),
                symbol: String::from_str(&env, SYMBOL),
            },
        );
        storage::set_total_supply(&env, TOTAL_SUPPLY);
        balance::receive_balance(&env, &owner, TOTAL_SUPPLY)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::mint(&env, &owner, TOTAL_SUPPLY);
        log!(&env, "initialized", owner, TOTAL_SUPPLY);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::extend_instance_ttl(&env);
        allowance::read_allowance(&env, &from, &spender).amount
    }

    /// Sets (overwrites) the amount `spender` may move out of `from`'s balance
    /// until `expiration_ledger`.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), VanillaTokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        ensure_initialized(&env)?;
        storage::extend_instance_ttl(&env);

        allowance::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;

        TokenEvents::approval(&env, &from, &spender, amount);
        log!(&env, "approve", from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::get_balance(&env, &id)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), VanillaTokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        ensure_initialized(&env)?;
        storage::extend_instance_ttl(&env);

        balance::move_balance(&env, &from, &to, amount)?;

        TokenEvents::transfer(&env, &from, &to, amount);
        log!(&env, "transfer", from, to, amount);
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// the allowance `from` granted to `spender`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), VanillaTokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        ensure_initialized(&env)?;
        storage::extend_instance_ttl(&env);

        allowance::spend_allowance(&env, &from, &spender, amount)?;
        balance::move_balance(&env, &from, &to, amount)?;

        TokenEvents::transfer(&env, &from, &to, amount);
        log!(&env, "transfer_from", spender, from, to, amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, VanillaTokenError> {
        metadata(&env).map(|m| m.decimals)
    }

    pub fn name(env: Env) -> Result<String, VanillaTokenError> {
        metadata(&env).map(|m| m.name)
    }

    pub fn symbol(env: Env) -> Result<String, VanillaTokenError> {
        metadata(&env).map(|m| m.symbol)
    }

    pub fn total_supply(env: Env) -> Result<i128, VanillaTokenError> {
        storage::get_total_supply(&env).ok_or(VanillaTokenError::NotInitialized)
    }
}
