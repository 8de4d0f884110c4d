use {
    counter::state::Counter,
    mollusk_svm::{result::InstructionResult, Mollusk},
    solana_account::Account,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
    spl_pod::primitives::PodU64,
};

pub fn init_mollusk() -> Mollusk {
    Mollusk::new(&counter::id(), "counter")
}

/// Builds a counter account in its post-initialization form.
pub fn setup_counter_account(count: u64, authority: &Pubkey) -> Account {
    let state = Counter {
        count: PodU64::from(count),
        authority: *authority,
    };
    let data = bytemuck::bytes_of(&state).to_vec();
    let lamports = Rent::default().minimum_balance(data.len());

    Account {
        lamports,
        data,
        owner: counter::id(),
        ..Default::default()
    }
}

pub fn counter_count(account: &Account) -> u64 {
    u64::from(bytemuck::from_bytes::<Counter>(&account.data).count)
}

pub fn counter_authority(account: &Account) -> Pubkey {
    bytemuck::from_bytes::<Counter>(&account.data).authority
}

pub fn resulting_account(result: &InstructionResult, key: &Pubkey) -> Account {
    result.get_account(key).unwrap().clone()
}
