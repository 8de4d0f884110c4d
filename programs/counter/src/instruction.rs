//! Program instructions

use {
    solana_instruction::{AccountMeta, Instruction},
    solana_program_error::ProgramError,
    solana_pubkey::Pubkey,
    solana_system_interface::program as system_program,
    std::convert::TryInto,
};

/// Instructions supported by the counter program
#[derive(Clone, Debug, PartialEq)]
#[repr(u8)]
pub enum CounterInstruction {
    /// Create and initialize a counter account.
    ///
    /// The counter account is a fresh keypair account funded by the payer.
    /// Its count starts at zero and its authority is set to the payer, which
    /// becomes the only key allowed to invoke the mutating instructions.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w, s]` Unallocated counter account to create
    /// 1. `[w, s]` Payer funding the account creation, recorded as the
    ///    counter authority
    /// 2. `[]` System program
    Initialize,

    /// Add `amount` to the count.
    ///
    /// Fails if the addition would overflow a `u64`; the count is left
    /// unchanged in that case.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Counter account
    /// 1. `[s]` Counter authority
    Increment {
        /// little-endian `u64` representing the amount to add
        amount: u64,
    },

    /// Subtract `amount` from the count, clamping at zero.
    ///
    /// Subtracting more than the current count leaves the count at zero
    /// rather than failing.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Counter account
    /// 1. `[s]` Counter authority
    Decrement {
        /// little-endian `u64` representing the amount to subtract
        amount: u64,
    },

    /// Set the count to exactly `amount`, regardless of its prior value.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Counter account
    /// 1. `[s]` Counter authority
    Update {
        /// little-endian `u64` representing the new count
        amount: u64,
    },

    /// Set the count back to zero.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Counter account
    /// 1. `[s]` Counter authority
    Reset,
}

impl CounterInstruction {
    /// Packs a [`CounterInstruction`](enum.CounterInstruction.html) into a
    /// byte array.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            CounterInstruction::Initialize => buf.push(0),
            CounterInstruction::Increment { amount } => {
                buf.push(1);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            CounterInstruction::Decrement { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            CounterInstruction::Update { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            CounterInstruction::Reset => buf.push(4),
        }
        buf
    }

    /// Unpacks a byte array into a
    /// [`CounterInstruction`](enum.CounterInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        match input.split_first() {
            Some((&0, rest)) if rest.is_empty() => Ok(CounterInstruction::Initialize),
            Some((&1, rest)) if rest.len() == 8 => {
                let amount = u64::from_le_bytes(rest.try_into().unwrap());
                Ok(CounterInstruction::Increment { amount })
            }
            Some((&2, rest)) if rest.len() == 8 => {
                let amount = u64::from_le_bytes(rest.try_into().unwrap());
                Ok(CounterInstruction::Decrement { amount })
            }
            Some((&3, rest)) if rest.len() == 8 => {
                let amount = u64::from_le_bytes(rest.try_into().unwrap());
                Ok(CounterInstruction::Update { amount })
            }
            Some((&4, rest)) if rest.is_empty() => Ok(CounterInstruction::Reset),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Creates an `Initialize` instruction.
pub fn initialize(program_id: &Pubkey, counter_account: &Pubkey, payer: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*counter_account, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: CounterInstruction::Initialize.pack(),
    }
}

/// Creates an `Increment` instruction.
pub fn increment(
    program_id: &Pubkey,
    counter_account: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: mutation_accounts(counter_account, authority),
        data: CounterInstruction::Increment { amount }.pack(),
    }
}

/// Creates a `Decrement` instruction.
pub fn decrement(
    program_id: &Pubkey,
    counter_account: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: mutation_accounts(counter_account, authority),
        data: CounterInstruction::Decrement { amount }.pack(),
    }
}

/// Creates an `Update` instruction.
pub fn update(
    program_id: &Pubkey,
    counter_account: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: mutation_accounts(counter_account, authority),
        data: CounterInstruction::Update { amount }.pack(),
    }
}

/// Creates a `Reset` instruction.
pub fn reset(program_id: &Pubkey, counter_account: &Pubkey, authority: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: mutation_accounts(counter_account, authority),
        data: CounterInstruction::Reset.pack(),
    }
}

fn mutation_accounts(counter_account: &Pubkey, authority: &Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(*counter_account, false),
        AccountMeta::new_readonly(*authority, true),
    ]
}
