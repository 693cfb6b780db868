use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VanillaTokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    NegativeAmount = 402,
    InsufficientBalance = 403,
    InsufficientAllowance = 404,
    InvalidExpiration = 405,
    Overflow = 406,
}
