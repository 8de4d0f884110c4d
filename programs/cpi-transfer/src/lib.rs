//! CPI transfer program
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod entrypoint;
pub mod error;
pub mod instruction;
pub mod processor;

use {
    solana_pubkey::Pubkey,
    spl_associated_token_account_client::address::get_associated_token_address_with_program_id,
};

solana_pubkey::declare_id!("EYVaBK84hNXKXKELmQ99b2LWfein9i6q2t5Gek3thPvs");

const VAULT_AUTHORITY_SEED: &[u8] = br"authority";

pub(crate) fn get_vault_authority_with_seed_for_program(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED], program_id)
}

pub(crate) fn get_vault_authority_signer_seeds(bump_seed: &[u8]) -> [&[u8]; 2] {
    [VAULT_AUTHORITY_SEED, bump_seed]
}

/// Derive the vault authority PDA that signs transfers out of the vault
pub fn get_vault_authority() -> Pubkey {
    get_vault_authority_for_program(&id())
}

/// Derive the vault authority PDA for a specific CPI transfer program
/// deployment
pub fn get_vault_authority_for_program(program_id: &Pubkey) -> Pubkey {
    get_vault_authority_with_seed_for_program(program_id).0
}

/// Derive the vault `ATA` holding tokens of `mint` on behalf of the program
pub fn get_vault_address(mint: &Pubkey, token_program_id: &Pubkey) -> Pubkey {
    get_vault_address_for_program(mint, token_program_id, &id())
}

/// Derive the vault `ATA` for a specific CPI transfer program deployment
pub fn get_vault_address_for_program(
    mint: &Pubkey,
    token_program_id: &Pubkey,
    program_id: &Pubkey,
) -> Pubkey {
    get_associated_token_address_with_program_id(
        &get_vault_authority_for_program(program_id),
        mint,
        token_program_id,
    )
}
