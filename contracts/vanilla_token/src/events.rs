use soroban_sdk::{symbol_short, Address, Env};

pub struct TokenEvents;

impl TokenEvents {
    /// Emits an `approval` event after an allowance is set.
    ///
    /// Topics: `("approval", owner, spender)`
    /// Data:   `amount`
    pub fn approval(env: &Env, owner: &Address, spender: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("approval"), owner.clone(), spender.clone()), amount);
    }

    /// Emits a `transfer` event for both `transfer` and `transfer_from`.
    ///
    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        env.events().publish((symbol_short!("transfer"), from.clone(), to.clone()), amount);
    }

    /// Emitted once, when the whole supply is credited to the deployer.
    pub fn mint(env: &Env, to: &Address, amount: i128) {
        env.events().publish((symbol_short!("mint"), to.clone()), amount);
    }
}
