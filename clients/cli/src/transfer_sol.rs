use {
    crate::{
        common::{parse_pubkey, process_transaction},
        config::Config,
        output::{format_output, println_display},
        CommandResult,
    },
    clap::Args,
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
pub struct TransferSolArgs {
    /// The address of the account to receive the lamports
    #[clap(value_parser = parse_pubkey)]
    pub recipient: Pubkey,

    /// The amount of lamports to transfer
    #[clap(value_parser)]
    pub lamports: u64,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSolOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub funder_address: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub recipient_address: Pubkey,
    pub lamports: u64,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub signature: Option<Signature>,
}

impl Display for TransferSolOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Funder address:", &self.funder_address.to_string())?;
        writeln_name_value(f, "Recipient address:", &self.recipient_address.to_string())?;
        writeln_name_value(f, "Lamports:", &self.lamports.to_string())?;

        if let Some(signature) = self.signature {
            writeln_name_value(f, "Signature:", &signature.to_string())?;
        }

        Ok(())
    }
}

impl QuietDisplay for TransferSolOutput {
    fn write_str(&self, _: &mut dyn std::fmt::Write) -> std::fmt::Result {
        Ok(())
    }
}
impl VerboseDisplay for TransferSolOutput {}

pub async fn command_transfer_sol(config: &Config, args: TransferSolArgs) -> CommandResult {
    let payer = config.fee_payer()?;
    let rpc_client = config.rpc_client.clone();

    println_display(
        config,
        format!(
            "Transferring {} lamports to {}",
            args.lamports, args.recipient
        ),
    );

    let instruction = cpi_transfer::instruction::transfer_sol(
        &cpi_transfer::id(),
        &payer.pubkey(),
        &args.recipient,
        args.lamports,
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
        TransferSolOutput {
            funder_address: payer.pubkey(),
            recipient_address: args.recipient,
            lamports: args.lamports,
            signature,
        },
    ))
}
