//! Program instructions

use {
    solana_instruction::{AccountMeta, Instruction},
    solana_program_error::ProgramError,
    solana_pubkey::Pubkey,
    solana_system_interface::program as system_program,
    std::convert::TryInto,
};

/// Instructions supported by the CPI transfer program
#[derive(Clone, Debug, PartialEq)]
#[repr(u8)]
pub enum CpiTransferInstruction {
    /// Transfer lamports from the funder to the recipient through a system
    /// program invocation.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w, s]` Funder
    /// 1. `[w]` Recipient
    /// 2. `[]` System program
    TransferSol {
        /// little-endian `u64` representing the lamports to transfer
        amount: u64,
    },

    /// Transfer tokens between two accounts of the same mint through a
    /// `transfer_checked` invocation signed by the source owner.
    ///
    /// Transfer decimals are read from the mint, so both spl-token and
    /// spl-token-2022 mints are accepted.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Source token account
    /// 1. `[]` Token mint
    /// 2. `[w]` Destination token account
    /// 3. `[s]` Owner of the source token account
    /// 4. `[]` SPL Token program of the mint
    TransferTokens {
        /// little-endian `u64` representing the amount to transfer
        amount: u64,
    },

    /// Transfer tokens out of the program vault through a `transfer_checked`
    /// invocation signed by the vault authority PDA.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Vault token account, must be owned by the vault authority:
    ///    `get_vault_authority()`
    /// 1. `[]` Token mint
    /// 2. `[w]` Destination token account
    /// 3. `[]` Vault authority, address must be: `get_vault_authority()`
    /// 4. `[]` SPL Token program of the mint
    TransferFromVault {
        /// little-endian `u64` representing the amount to transfer
        amount: u64,
    },
}

impl CpiTransferInstruction {
    /// Packs a [`CpiTransferInstruction`](enum.CpiTransferInstruction.html)
    /// into a byte array.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            CpiTransferInstruction::TransferSol { amount } => {
                buf.push(0);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            CpiTransferInstruction::TransferTokens { amount } => {
                buf.push(1);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            CpiTransferInstruction::TransferFromVault { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }
        buf
    }

    /// Unpacks a byte array into a
    /// [`CpiTransferInstruction`](enum.CpiTransferInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        match input.split_first() {
            Some((&0, rest)) if rest.len() == 8 => {
                let amount = u64::from_le_bytes(rest.try_into().unwrap());
                Ok(CpiTransferInstruction::TransferSol { amount })
            }
            Some((&1, rest)) if rest.len() == 8 => {
                let amount = u64::from_le_bytes(rest.try_into().unwrap());
                Ok(CpiTransferInstruction::TransferTokens { amount })
            }
            Some((&2, rest)) if rest.len() == 8 => {
                let amount = u64::from_le_bytes(rest.try_into().unwrap());
                Ok(CpiTransferInstruction::TransferFromVault { amount })
            }
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Creates a `TransferSol` instruction.
pub fn transfer_sol(
    program_id: &Pubkey,
    funder: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*funder, true),
            AccountMeta::new(*recipient, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: CpiTransferInstruction::TransferSol { amount }.pack(),
    }
}

/// Creates a `TransferTokens` instruction.
pub fn transfer_tokens(
    program_id: &Pubkey,
    source: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    token_program_id: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*source, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(*token_program_id, false),
        ],
        data: CpiTransferInstruction::TransferTokens { amount }.pack(),
    }
}

/// Creates a `TransferFromVault` instruction.
pub fn transfer_from_vault(
    program_id: &Pubkey,
    vault: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    vault_authority: &Pubkey,
    token_program_id: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*vault, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*vault_authority, false),
            AccountMeta::new_readonly(*token_program_id, false),
        ],
        data: CpiTransferInstruction::TransferFromVault { amount }.pack(),
    }
}
