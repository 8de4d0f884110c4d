use {
    crate::helpers::common::{init_mollusk, resulting_account},
    cpi_transfer::{error::CpiTransferError, instruction::transfer_sol},
    mollusk_svm::result::Check,
    solana_account::Account,
    solana_program::program_error::ProgramError,
    solana_pubkey::Pubkey,
    solana_sdk_ids::system_program,
};

mod helpers;

fn funder_account() -> Account {
    Account {
        lamports: 1_000_000_000,
        ..Account::default()
    }
}

#[test]
fn test_transfer_sol() {
    let mollusk = init_mollusk();

    let funder = Pubkey::new_unique();
    let recipient = Pubkey::new_unique();

    let instruction = transfer_sol(&cpi_transfer::id(), &funder, &recipient, 500_000);
    let accounts = &[
        (funder, funder_account()),
        (recipient, Account::default()),
        (system_program::id(), Account::default()),
    ];

    let result = mollusk.process_and_validate_instruction(&instruction, accounts, &[Check::success()]);

    assert_eq!(resulting_account(&result, &recipient).lamports, 500_000);
    assert_eq!(resulting_account(&result, &funder).lamports, 999_500_000);
}

#[test]
fn test_transfer_sol_zero_amount_fails() {
    let mollusk = init_mollusk();

    let funder = Pubkey::new_unique();
    let recipient = Pubkey::new_unique();

    let instruction = transfer_sol(&cpi_transfer::id(), &funder, &recipient, 0);
    let accounts = &[
        (funder, funder_account()),
        (recipient, Account::default()),
        (system_program::id(), Account::default()),
    ];

    mollusk.process_and_validate_instruction(
        &instruction,
        accounts,
        &[Check::err(CpiTransferError::ZeroTransferAmount.into())],
    );
}

#[test]
fn test_transfer_sol_unsigned_funder_fails() {
    let mollusk = init_mollusk();

    let funder = Pubkey::new_unique();
    let recipient = Pubkey::new_unique();

    let mut instruction = transfer_sol(&cpi_transfer::id(), &funder, &recipient, 500_000);
    instruction.accounts[0].is_signer = false;

    let accounts = &[
        (funder, funder_account()),
        (recipient, Account::default()),
        (system_program::id(), Account::default()),
    ];

    mollusk.process_and_validate_instruction(
        &instruction,
        accounts,
        &[Check::err(ProgramError::MissingRequiredSignature)],
    );
}
