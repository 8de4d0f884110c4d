//! Program state processor

use {
    crate::{
        error::CpiTransferError, get_vault_authority_signer_seeds,
        get_vault_authority_with_seed_for_program, instruction::CpiTransferInstruction,
    },
    solana_account_info::{next_account_info, AccountInfo},
    solana_cpi::{invoke, invoke_signed},
    solana_msg::msg,
    solana_program_error::{ProgramError, ProgramResult},
    solana_pubkey::Pubkey,
    solana_system_interface::instruction::transfer,
    spl_token_2022::{
        check_spl_token_program_account, extension::PodStateWithExtensions,
        instruction::transfer_checked, pod::PodMint,
    },
};

/// Processes a [`TransferSol`](enum.CpiTransferInstruction.html) instruction.
pub fn process_transfer_sol(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let funder_account = next_account_info(account_info_iter)?;
    let recipient_account = next_account_info(account_info_iter)?;
    let _system_program_account = next_account_info(account_info_iter)?;

    if amount == 0 {
        msg!("Transfer amount should be positive");
        return Err(CpiTransferError::ZeroTransferAmount.into());
    }
    if !funder_account.is_signer {
        msg!("Funder must sign the lamport transfer");
        return Err(ProgramError::MissingRequiredSignature);
    }

    invoke(
        &transfer(funder_account.key, recipient_account.key, amount),
        &[funder_account.clone(), recipient_account.clone()],
    )
}

/// Processes a [`TransferTokens`](enum.CpiTransferInstruction.html)
/// instruction.
pub fn process_transfer_tokens(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let source_account = next_account_info(account_info_iter)?;
    let mint_account = next_account_info(account_info_iter)?;
    let destination_account = next_account_info(account_info_iter)?;
    let owner_account = next_account_info(account_info_iter)?;
    let token_program_account = next_account_info(account_info_iter)?;

    check_spl_token_program_account(token_program_account.key)?;

    if amount == 0 {
        msg!("Transfer amount should be positive");
        return Err(CpiTransferError::ZeroTransferAmount.into());
    }
    if !owner_account.is_signer {
        msg!("Source owner must sign the token transfer");
        return Err(ProgramError::MissingRequiredSignature);
    }

    let decimals = mint_decimals(mint_account)?;

    invoke(
        &transfer_checked(
            token_program_account.key,
            source_account.key,
            mint_account.key,
            destination_account.key,
            owner_account.key,
            &[],
            amount,
            decimals,
        )?,
        &[
            source_account.clone(),
            mint_account.clone(),
            destination_account.clone(),
            owner_account.clone(),
            token_program_account.clone(),
        ],
    )
}

/// Processes a [`TransferFromVault`](enum.CpiTransferInstruction.html)
/// instruction.
pub fn process_transfer_from_vault(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let vault_account = next_account_info(account_info_iter)?;
    let mint_account = next_account_info(account_info_iter)?;
    let destination_account = next_account_info(account_info_iter)?;
    let vault_authority_account = next_account_info(account_info_iter)?;
    let token_program_account = next_account_info(account_info_iter)?;

    check_spl_token_program_account(token_program_account.key)?;

    if amount == 0 {
        msg!("Transfer amount should be positive");
        return Err(CpiTransferError::ZeroTransferAmount.into());
    }

    let (vault_authority, bump_seed) = get_vault_authority_with_seed_for_program(program_id);
    if *vault_authority_account.key != vault_authority {
        msg!("Vault authority account address does not match expected PDA");
        return Err(CpiTransferError::VaultAuthorityMismatch.into());
    }

    let decimals = mint_decimals(mint_account)?;

    let bump_seed = [bump_seed];
    let signer_seeds = get_vault_authority_signer_seeds(&bump_seed);
    invoke_signed(
        &transfer_checked(
            token_program_account.key,
            vault_account.key,
            mint_account.key,
            destination_account.key,
            &vault_authority,
            &[],
            amount,
            decimals,
        )?,
        &[
            vault_account.clone(),
            mint_account.clone(),
            destination_account.clone(),
            vault_authority_account.clone(),
            token_program_account.clone(),
        ],
        &[&signer_seeds],
    )
}

/// Reads the decimals off a mint account of either token program.
fn mint_decimals(mint_account: &AccountInfo) -> Result<u8, ProgramError> {
    let mint_data = mint_account.try_borrow_data()?;
    Ok(PodStateWithExtensions::<PodMint>::unpack(&mint_data)?
        .base
        .decimals)
}

/// Instruction processor
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    match CpiTransferInstruction::unpack(input)? {
        CpiTransferInstruction::TransferSol { amount } => {
            msg!("Instruction: TransferSol");
            process_transfer_sol(accounts, amount)
        }
        CpiTransferInstruction::TransferTokens { amount } => {
            msg!("Instruction: TransferTokens");
            process_transfer_tokens(accounts, amount)
        }
        CpiTransferInstruction::TransferFromVault { amount } => {
            msg!("Instruction: TransferFromVault");
            process_transfer_from_vault(program_id, accounts, amount)
        }
    }
}
