//! Error types

use {
    num_derive::FromPrimitive,
    solana_program::{
        decode_error::DecodeError,
        msg,
        program_error::{PrintProgramError, ProgramError},
    },
    std::error::Error,
    thiserror::Error,
};

/// Errors that may be returned by the CPI transfer program.
#[derive(Clone, Debug, Eq, Error, PartialEq, FromPrimitive)]
pub enum CpiTransferError {
    // 0
    /// Vault authority account address does not match expected PDA
    #[error("Vault authority account address does not match expected PDA")]
    VaultAuthorityMismatch,
    /// Transfer amount should be positive
    #[error("Transfer amount should be positive")]
    ZeroTransferAmount,
}

impl From<CpiTransferError> for ProgramError {
    fn from(e: CpiTransferError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for CpiTransferError {
    fn type_of() -> &'static str {
        "CpiTransferError"
    }
}

impl PrintProgramError for CpiTransferError {
    fn print<E>(&self)
    where
        E: 'static + Error + DecodeError<E> + PrintProgramError + num_traits::FromPrimitive,
    {
        msg!(&self.to_string());
    }
}
