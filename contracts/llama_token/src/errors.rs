use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAdmin = 3,
    InvalidDecimals = 4,
    NegativeAmount = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    InvalidExpiration = 8,
    EndpointNotSet = 9,
    NotEndpoint = 10,
    MathOverflow = 11,
}
