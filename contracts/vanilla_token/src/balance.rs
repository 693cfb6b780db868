use soroban_sdk::{Address, Env};

use crate::{
    errors::VanillaTokenError,
    storage::{get_balance, set_balance},
};

/// Credits `amount` to `to`. Reverts with `Overflow` rather than wrapping.
pub fn receive_balance(env: &Env, to: &Address, amount: i128) -> Result<(), VanillaTokenError> {
    let balance = get_balance(env, to);
    let updated = balance.checked_add(amount).ok_or(VanillaTokenError::Overflow)?;
    set_balance(env, to, updated);
    Ok(())
}

/// Debits `amount` from `from`; the balance may never go below zero.
pub fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), VanillaTokenError> {
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(VanillaTokenError::InsufficientBalance);
    }
    set_balance(env, from, balance - amount);
    Ok(())
}

/// Moves `amount` between two balances. The debit happens first so a
/// self-transfer reads the already-debited balance when crediting.
pub fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), VanillaTokenError> {
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount)
}
