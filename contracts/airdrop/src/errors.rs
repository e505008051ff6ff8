use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    ClaimStartInThePast = 4,
    ClaimEndBeforeStart = 5,
    ZeroDuration = 6,
    InvalidArrayLength = 7,
    RecipientAlreadySet = 8,
    ZeroAmount = 9,
    ClaimNotStarted = 10,
    ClaimEnded = 11,
    NothingToClaim = 12,
    NothingVestedToClaim = 13,
    MathOverflow = 14,
    AmountOverflow = 15,
    VestingExceedsClaimWindow = 16,
}
