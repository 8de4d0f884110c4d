//! Program state processor

use {
    crate::{error::CounterError, instruction::CounterInstruction, state::Counter},
    solana_account_info::{next_account_info, AccountInfo},
    solana_cpi::invoke,
    solana_msg::msg,
    solana_program_error::{ProgramError, ProgramResult},
    solana_pubkey::Pubkey,
    solana_rent::Rent,
    solana_system_interface::instruction::create_account,
    solana_sysvar::Sysvar,
    spl_pod::primitives::PodU64,
};

/// Processes an [`Initialize`](enum.CounterInstruction.html) instruction.
pub fn process_initialize(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let counter_account = next_account_info(account_info_iter)?;
    let payer_account = next_account_info(account_info_iter)?;
    let _system_program_account = next_account_info(account_info_iter)?;

    if !counter_account.is_signer {
        msg!("Counter account must sign its own creation");
        return Err(ProgramError::MissingRequiredSignature);
    }
    if !payer_account.is_signer {
        msg!("Payer must sign to fund the counter account");
        return Err(ProgramError::MissingRequiredSignature);
    }
    if counter_account.data_len() > 0 {
        msg!("Counter account already initialized");
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    // Both the payer and the counter keypair signed the transaction, so a
    // plain invoke carries the signatures through to the system program.
    let rent = Rent::get()?;
    invoke(
        &create_account(
            payer_account.key,
            counter_account.key,
            rent.minimum_balance(Counter::LEN),
            Counter::LEN as u64,
            program_id,
        ),
        &[payer_account.clone(), counter_account.clone()],
    )?;

    let mut counter_data = counter_account.try_borrow_mut_data()?;
    let counter = bytemuck::from_bytes_mut::<Counter>(&mut counter_data[..]);
    counter.count = PodU64::from(0);
    counter.authority = *payer_account.key;

    Ok(())
}

/// Processes an [`Increment`](enum.CounterInstruction.html) instruction.
pub fn process_increment(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    mutate_count(program_id, accounts, |count| {
        count
            .checked_add(amount)
            .ok_or_else(|| CounterError::CounterOverflow.into())
    })
}

/// Processes a [`Decrement`](enum.CounterInstruction.html) instruction.
pub fn process_decrement(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    mutate_count(program_id, accounts, |count| Ok(count.saturating_sub(amount)))
}

/// Processes an [`Update`](enum.CounterInstruction.html) instruction.
pub fn process_update(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    mutate_count(program_id, accounts, |_| Ok(amount))
}

/// Processes a [`Reset`](enum.CounterInstruction.html) instruction.
pub fn process_reset(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    mutate_count(program_id, accounts, |_| Ok(0))
}

/// Applies `op` to the stored count after validating the counter account and
/// its authority. The count is only written back if `op` succeeds.
fn mutate_count<F>(program_id: &Pubkey, accounts: &[AccountInfo], op: F) -> ProgramResult
where
    F: FnOnce(u64) -> Result<u64, ProgramError>,
{
    let account_info_iter = &mut accounts.iter();

    let counter_account = next_account_info(account_info_iter)?;
    let authority_account = next_account_info(account_info_iter)?;

    if counter_account.owner != program_id {
        msg!("Counter account is not owned by the counter program");
        return Err(ProgramError::InvalidAccountData);
    }
    if counter_account.data_len() != Counter::LEN {
        msg!("Counter account data has an unexpected length");
        return Err(ProgramError::InvalidAccountData);
    }
    if !authority_account.is_signer {
        msg!("Counter authority must sign");
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut counter_data = counter_account.try_borrow_mut_data()?;
    let counter = bytemuck::from_bytes_mut::<Counter>(&mut counter_data[..]);

    if counter.authority != *authority_account.key {
        msg!("Signer does not match the counter authority");
        return Err(CounterError::AuthorityMismatch.into());
    }

    counter.count = PodU64::from(op(u64::from(counter.count))?);

    Ok(())
}

/// Instruction processor
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    match CounterInstruction::unpack(input)? {
        CounterInstruction::Initialize => {
            msg!("Instruction: Initialize");
            process_initialize(program_id, accounts)
        }
        CounterInstruction::Increment { amount } => {
            msg!("Instruction: Increment");
            process_increment(program_id, accounts, amount)
        }
        CounterInstruction::Decrement { amount } => {
            msg!("Instruction: Decrement");
            process_decrement(program_id, accounts, amount)
        }
        CounterInstruction::Update { amount } => {
            msg!("Instruction: Update");
            process_update(program_id, accounts, amount)
        }
        CounterInstruction::Reset => {
            msg!("Instruction: Reset");
            process_reset(program_id, accounts)
        }
    }
}
