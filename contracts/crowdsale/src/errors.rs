use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAddress = 4,
    InvalidRate = 5,
    ZeroAmount = 6,
    InvalidTimeRange = 7,
    NotWhitelisted = 8,
    SaleNotActive = 9,
    SaleAlreadyStarted = 10,
    HardCapReached = 11,
    SaleAlreadyFinalized = 12,
    FinalizeNotAllowed = 13,
    TransferFrozen = 14,
    InsufficientBalance = 15,
    UnknownGroup = 16,
    NotEligible = 17,
    AlreadyReleased = 18,
    TooEarly = 19,
}
