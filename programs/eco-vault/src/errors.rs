use anchor_lang::prelude::*;
use anchor_lang::error::Error;

// Codes start at 100 and are part of the client contract: append only.
#[error_code(offset = 100)]
pub enum ErrorCode {
    #[msg("Owner only")]
    OwnerOnly,
    #[msg("Initiative not found")]
    NotFound,
    #[msg("Insufficient vault balance")]
    InsufficientBalance,
    #[msg("Initiative not verified")]
    NotVerified,
    #[msg("Amount is zero")]
    InvalidAmount,
    #[msg("Name too long")]
    NameTooLong,
    #[msg("Amount overflow")]
    AmountOverflow,
    #[msg("Registry full")]
    RegistryFull,
}

/// Numeric code carried by an Anchor error, `None` for raw program errors.
pub fn error_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(err) => Some(err.error_code_number),
        Error::ProgramError(_) => None,
    }
}
