use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,

    // Income errors
    InvalidAmount = 4,
    NoShares = 5,
    NoFeesToWithdraw = 6,

    // Registry errors
    UnknownProperty = 7,
    PropertyInactive = 8,
    InsufficientShares = 9,
    KycNotApproved = 10,
    InvalidRecipient = 11,

    // Configuration errors
    InvalidFeeRate = 12,

    // Arithmetic errors
    MathOverflow = 13,

    // User registry errors
    AlreadyRegistered = 14,
    UserNotRegistered = 15,

    // Listing errors
    InsufficientListingFee = 16,
    BatchLengthMismatch = 17,
}
