use soroban_sdk::{Address, Env};

use crate::{
    errors::VanillaTokenError,
    storage::{get_allowance, set_allowance, AllowanceValue},
};

/// Returns the live allowance, treating an expired entry as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    match get_allowance(env, from, spender) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue { amount: 0, expiration_ledger: allowance.expiration_ledger },
        None => AllowanceValue { amount: 0, expiration_ledger: 0 },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), VanillaTokenError> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(VanillaTokenError::InvalidExpiration);
    }
    // Temporary entries cannot outlive the network's maximum TTL.
    if expiration_ledger > env.ledger().max_live_until_ledger() {
        return Err(VanillaTokenError::InvalidExpiration);
    }

    set_allowance(env, from, spender, &AllowanceValue { amount, expiration_ledger });
    Ok(())
}

/// Consumes `amount` of the allowance `from` granted to `spender`.
///
/// Every allowance is decremented, including one set to
/// [`crate::UNLIMITED_ALLOWANCE`]: after spending `t` from the sentinel the
/// stored value is `UNLIMITED_ALLOWANCE - t`.
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), VanillaTokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(VanillaTokenError::InsufficientAllowance);
    }

    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
