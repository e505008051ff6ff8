use sale_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InvalidTimeWindow = 4,
    InvalidAmount = 5,
    InvalidThresholds = 6,
    AlreadyDeposited = 7,
    TokensNotDeposited = 8,
    ZeroContribution = 9,
    NotInFundingPeriod = 10,
    NotWhitelisted = 11,
    ClaimPeriodNotStarted = 12,
    NoContributionsToClaim = 13,
    NothingVestedToClaim = 14,
    NothingToWithdraw = 15,
    MathOverflow = 16,
    AmountOverflow = 17,
    FundingNotEnded = 18,
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        match err {
            MathError::EmptyTiers | MathError::NonIncreasingCeiling => Error::InvalidThresholds,
            MathError::InvalidWindow => Error::InvalidTimeWindow,
            MathError::Overflow | MathError::Underflow | MathError::DivisionByZero => {
                Error::MathOverflow
            }
        }
    }
}
