use {
    mollusk_svm::{result::InstructionResult, Mollusk},
    solana_account::Account,
    solana_program_option::COption,
    solana_program_pack::Pack,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
};

pub const MINT_DECIMALS: u8 = 9;
pub const MINT_SUPPLY: u64 = 500_000_000;

pub fn init_mollusk() -> Mollusk {
    let mut mollusk = Mollusk::new(&cpi_transfer::id(), "cpi_transfer");
    mollusk_svm_programs_token::token::add_program(&mut mollusk);
    mollusk_svm_programs_token::token2022::add_program(&mut mollusk);
    mollusk
}

// spl_token and spl_token_2022 share the base mint and account layouts, so
// packing the spl_token state works under either owner program.
pub fn setup_mint(token_program_id: &Pubkey, mint_authority: &Pubkey) -> Account {
    let state = spl_token::state::Mint {
        decimals: MINT_DECIMALS,
        is_initialized: true,
        supply: MINT_SUPPLY,
        mint_authority: COption::Some(*mint_authority),
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Mint::LEN];
    state.pack_into_slice(&mut data);

    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner: *token_program_id,
        ..Default::default()
    }
}

pub fn setup_token_account(
    token_program_id: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Account {
    let state = spl_token::state::Account {
        mint: *mint,
        owner: *owner,
        amount,
        delegate: COption::None,
        state: spl_token::state::AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Account::LEN];
    state.pack_into_slice(&mut data);

    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner: *token_program_id,
        ..Default::default()
    }
}

pub fn token_balance(account: &Account) -> u64 {
    spl_token::state::Account::unpack(&account.data).unwrap().amount
}

pub fn resulting_account(result: &InstructionResult, key: &Pubkey) -> Account {
    result.get_account(key).unwrap().clone()
}
