use anchor_lang::prelude::*;

#[error_code]
pub enum GenesisError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Already started")]
    AlreadyStarted,

    #[msg("Not started yet")]
    NotStarted,

    #[msg("Start time must be in the future")]
    PastStartTime,

    #[msg("Fee exceeds the maximum allowed fee")]
    FeeTooHigh,

    #[msg("Zero address not allowed")]
    ZeroAddress,

    #[msg("Participant index out of range")]
    IndexOutOfRange,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Image url too long")]
    UrlTooLong,

    #[msg("Name or symbol too long")]
    NameTooLong,

    #[msg("Stake mint has more than 18 decimals")]
    UnsupportedMintDecimals,

    #[msg("Amount is not representable in the stake mint's decimals")]
    UnrepresentableAmount,

    #[msg("Participant account does not match the registry sequence")]
    ParticipantMismatch,

    #[msg("Fee fund must be a token account for the stake mint")]
    InvalidFundAccount,

    #[msg("Insufficient staked balance")]
    InsufficientBalance,

    #[msg("Amount does not cover the stake fee")]
    InsufficientAmount,

    #[msg("Stake would exceed the per-account maximum")]
    StakeCapExceeded,

    #[msg("Not enough points to play")]
    InsufficientPoints,

    #[msg("Token transfer source has insufficient funds")]
    LedgerTransferFailed,

    #[msg("Account already holds this role")]
    RoleAlreadyGranted,

    #[msg("Account does not hold this role")]
    RoleNotGranted,

    #[msg("Role set is full")]
    RoleSetFull,

    #[msg("Id already used")]
    IdAlreadyUsed,

    #[msg("Initial supply cannot be more than max supply")]
    InitialSupplyTooHigh,

    #[msg("Stake mint charges a transfer fee")]
    TransferFeeMint,

    #[msg("Page size exceeds the return data limit")]
    PageTooLarge,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
