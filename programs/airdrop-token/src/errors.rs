use anchor_lang::prelude::*;

#[error_code]
pub enum TokenError {
    #[msg("This allocation has already been claimed")]
    AlreadyClaimed,

    #[msg("Claimant and amount are not part of the airdrop")]
    NotEligible,

    #[msg("Airdrop end date has not been reached yet")]
    AirdropStillActive,

    #[msg("Airdrop has already ended")]
    AirdropAlreadyEnded,

    #[msg("Minimum mint interval has not elapsed since the last mint")]
    MintTooSoon,

    #[msg("Mint amount exceeds the allowed share of the current supply")]
    MintExceedsMaximum,

    #[msg("Unauthorized - signer is not the owner")]
    Unauthorized,

    #[msg("Vault mismatch - provided vault does not match the airdrop vault")]
    VaultMismatch,

    #[msg("Mint mismatch - token account does not hold this token")]
    MintMismatch,

    #[msg("Claims would exceed the airdrop-reserved supply")]
    InsufficientBalance,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,

    #[msg("Airdrop end timestamp must be in the future")]
    InvalidEndTimestamp,
}

#[cfg(test)]
pub(crate) fn assert_token_error<T: std::fmt::Debug>(result: Result<T>, expected: TokenError) {
    let expected_code = u32::from(expected);
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, expected_code,
            "unexpected error {}",
            err.error_name
        ),
        other => panic!("expected error code {expected_code}, got {other:?}"),
    }
}
