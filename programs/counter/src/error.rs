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

/// Errors that may be returned by the counter program.
#[derive(Clone, Debug, Eq, Error, PartialEq, FromPrimitive)]
pub enum CounterError {
    // 0
    /// Signer does not match the authority recorded on the counter account
    #[error("Signer does not match the authority recorded on the counter account")]
    AuthorityMismatch,
    /// Increment amount would overflow the counter
    #[error("Increment amount would overflow the counter")]
    CounterOverflow,
}

impl From<CounterError> for ProgramError {
    fn from(e: CounterError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for CounterError {
    fn type_of() -> &'static str {
        "CounterError"
    }
}

impl PrintProgramError for CounterError {
    fn print<E>(&self)
    where
        E: 'static + Error + DecodeError<E> + PrintProgramError + num_traits::FromPrimitive,
    {
        msg!(&self.to_string());
    }
}
