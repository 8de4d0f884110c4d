use {
    crate::{
        common::{parse_pubkey, parse_token_program, process_transaction, resolve_signer},
        config::Config,
        output::{format_output, println_display},
        CommandResult,
    },
    clap::{ArgMatches, Args},
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_clap_v3_utils::input_parsers::signer::{SignerSource, SignerSourceParserBuilder},
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    solana_pubkey::Pubkey,
    solana_remote_wallet::remote_wallet::RemoteWalletManager,
    solana_signature::Signature,
    solana_signer::Signer,
    solana_transaction::Transaction,
    spl_associated_token_account_client::address::get_associated_token_address_with_program_id,
    std::{
        fmt::{Display, Formatter},
        rc::Rc,
    },
};

#[derive(Clone, Debug, Args)]
pub struct TransferTokensArgs {
    /// The address of the mint to transfer
    #[clap(value_parser = parse_pubkey)]
    pub mint: Pubkey,

    /// The address of the token account to receive the tokens
    #[clap(value_parser = parse_pubkey)]
    pub recipient_token_account: Pubkey,

    /// The amount of tokens to transfer
    #[clap(value_parser)]
    pub amount: u64,

    /// The address of the token account to transfer from.
    /// If not provided, defaults to the owner associated token account
    #[clap(long, value_parser = parse_pubkey)]
    pub source: Option<Pubkey>,

    /// Signer source of the source token account owner if different from fee
    /// payer
    #[clap(
        long,
        value_parser = SignerSourceParserBuilder::default().allow_all().build()
    )]
    pub owner: Option<SignerSource>,

    /// The address of the token program that the mint belongs to.
    /// Queries the mint account if not provided.
    #[clap(long, value_parser = parse_token_program)]
    pub token_program: Option<Pubkey>,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferTokensOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub mint_address: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub source_token_account: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub recipient_token_account: Pubkey,
    pub amount: u64,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub signature: Option<Signature>,
}

impl Display for TransferTokensOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Mint address:", &self.mint_address.to_string())?;
        writeln_name_value(
            f,
            "Source token account:",
            &self.source_token_account.to_string(),
        )?;
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

impl QuietDisplay for TransferTokensOutput {
    fn write_str(&self, _: &mut dyn std::fmt::Write) -> std::fmt::Result {
        Ok(())
    }
}
impl VerboseDisplay for TransferTokensOutput {}

pub async fn command_transfer_tokens(
    config: &Config,
    args: TransferTokensArgs,
    matches: &ArgMatches,
    wallet_manager: &mut Option<Rc<RemoteWalletManager>>,
) -> CommandResult {
    let payer = config.fee_payer()?;
    let rpc_client = config.rpc_client.clone();
    let owner = resolve_signer(
        matches,
        args.owner.as_ref(),
        "owner",
        payer.clone(),
        wallet_manager,
    )?;

    let token_program = match args.token_program {
        Some(token_program) => token_program,
        None => rpc_client.get_account(&args.mint).await?.owner,
    };

    let source = args.source.unwrap_or_else(|| {
        get_associated_token_address_with_program_id(&owner.pubkey(), &args.mint, &token_program)
    });

    println_display(
        config,
        format!(
            "Transferring {} tokens of mint {} to {}",
            args.amount, args.mint, args.recipient_token_account
        ),
    );

    let instruction = cpi_transfer::instruction::transfer_tokens(
        &cpi_transfer::id(),
        &source,
        &args.mint,
        &args.recipient_token_account,
        &owner.pubkey(),
        &token_program,
        args.amount,
    );

    let latest_blockhash = rpc_client.get_latest_blockhash().await?;
    let mut signers: Vec<&dyn Signer> = vec![payer.as_ref()];
    if owner.pubkey() != payer.pubkey() {
        signers.push(owner.as_ref());
    }
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &signers,
        latest_blockhash,
    );

    let signature = process_transaction(config, transaction).await?;

    Ok(format_output(
        config,
        TransferTokensOutput {
            mint_address: args.mint,
            source_token_account: source,
            recipient_token_account: args.recipient_token_account,
            amount: args.amount,
            signature,
        },
    ))
}
