use {
    crate::{
        common::{parse_pubkey, parse_token_program, process_transaction},
        config::Config,
        output::{format_output, println_display},
        CommandResult,
    },
    clap::Args,
    cpi_transfer::{get_vault_address, get_vault_authority},
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_signer::Signer,
    solana_transaction::Transaction,
    std::fmt::{Display, Formatter},
};

#[derive(Clone, Debug, Args)]
pub struct TransferFromVaultArgs {
    /// The address of the mint to transfer
    #[clap(value_parser = parse_pubkey)]
    pub mint: Pubkey,

    /// The address of the token account to receive the tokens
    #[clap(value_parser = parse_pubkey)]
    pub recipient_token_account: Pubkey,

    /// The amount of tokens to transfer out of the vault
    #[clap(value_parser)]
    pub amount: u64,

    /// The address of the token program that the mint belongs to.
    /// Queries the mint account if not provided.
    #[clap(long, value_parser = parse_token_program)]
    pub token_program: Option<Pubkey>,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferFromVaultOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub mint_address: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub vault_address: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub vault_authority: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub recipient_token_account: Pubkey,
    pub amount: u64,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub signature: Option<Signature>,
}

impl Display for TransferFromVaultOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Mint address:", &self.mint_address.to_string())?;
        writeln_name_value(f, "Vault address:", &self.vault_address.to_string())?;
        writeln_name_value(f, "Vault authority:", &self.vault_authority.to_string())?;
        writeln_name_value(
            f,
            "Recipient token account:",
            &self.recipient_token_account.to_string(),
        )?;
        writeln_name_value(f, "Amount:", &self.amount.to_string())?;

        if let Some(signature) = self.signature {
            writeln_name_value(f, "Signature:", &signature.to_string())?;
        }

        Ok(())
    }
}

impl QuietDisplay for TransferFromVaultOutput {
    fn write_str(&self, _: &mut dyn std::fmt::Write) -> std::fmt::Result {
        Ok(())
    }
}
impl VerboseDisplay for TransferFromVaultOutput {}

pub async fn command_transfer_from_vault(
    config: &Config,
    args: TransferFromVaultArgs,
) -> CommandResult {
    let payer = config.fee_payer()?;
    let rpc_client = config.rpc_client.clone();

    let token_program = match args.token_program {
        Some(token_program) => token_program,
        None => rpc_client.get_account(&args.mint).await?.owner,
    };

    let vault_address = get_vault_address(&args.mint, &token_program);
    let vault_authority = get_vault_authority();

    println_display(
        config,
        format!(
            "Transferring {} tokens of mint {} out of vault {}",
            args.amount, args.mint, vault_address
        ),
    );

    let instruction = cpi_transfer::instruction::transfer_from_vault(
        &cpi_transfer::id(),
        &vault_address,
        &args.mint,
        &args.recipient_token_account,
        &vault_authority,
        &token_program,
        args.amount,
    );

    let latest_blockhash = rpc_client.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[&*payer],
        latest_blockhash,
    );

    let signature = process_transaction(config, transaction).await?;

    Ok(format_output(
        config,
        TransferFromVaultOutput {
            mint_address: args.mint,
            vault_address,
            vault_authority,
            recipient_token_account: args.recipient_token_account,
            amount: args.amount,
            signature,
        },
    ))
}
