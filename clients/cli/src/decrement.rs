use {
    crate::{
        common::{fetch_counter, parse_pubkey, process_transaction, resolve_signer},
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
    std::{
        fmt::{Display, Formatter},
        rc::Rc,
    },
};

#[derive(Clone, Debug, Args)]
pub struct DecrementArgs {
    /// The address of the counter account
    #[clap(value_parser = parse_pubkey)]
    pub counter: Pubkey,

    /// The amount to subtract from the count
    #[clap(value_parser)]
    pub amount: u64,

    /// Signer source of the counter authority if different from fee payer
    #[clap(
        long,
        value_parser = SignerSourceParserBuilder::default().allow_all().build()
    )]
    pub authority: Option<SignerSource>,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecrementOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub counter_address: Pubkey,
    pub amount: u64,
    pub new_count: Option<u64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub signature: Option<Signature>,
}

impl Display for DecrementOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Counter address:", &self.counter_address.to_string())?;
        writeln_name_value(f, "Amount:", &self.amount.to_string())?;

        if let Some(new_count) = self.new_count {
            writeln_name_value(f, "New count:", &new_count.to_string())?;
        }
        if let Some(signature) = self.signature {
            writeln_name_value(f, "Signature:", &signature.to_string())?;
        }

        Ok(())
    }
}

impl QuietDisplay for DecrementOutput {
    fn write_str(&self, _: &mut dyn std::fmt::Write) -> std::fmt::Result {
        Ok(())
    }
}
impl VerboseDisplay for DecrementOutput {}

pub async fn command_decrement(
    config: &Config,
    args: DecrementArgs,
    matches: &ArgMatches,
    wallet_manager: &mut Option<Rc<RemoteWalletManager>>,
) -> CommandResult {
    let payer = config.fee_payer()?;
    let rpc_client = config.rpc_client.clone();
    let authority = resolve_signer(
        matches,
        args.authority.as_ref(),
        "authority",
        payer.clone(),
        wallet_manager,
    )?;

    println_display(
        config,
        format!("Decrementing counter {} by {}", args.counter, args.amount),
    );

    let instruction = counter::instruction::decrement(
        &counter::id(),
        &args.counter,
        &authority.pubkey(),
        args.amount,
    );

    let latest_blockhash = rpc_client.get_latest_blockhash().await?;
    let mut signers: Vec<&dyn Signer> = vec![payer.as_ref()];
    if authority.pubkey() != payer.pubkey() {
        signers.push(authority.as_ref());
    }
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &signers,
        latest_blockhash,
    );

    let signature = process_transaction(config, transaction).await?;
    let new_count = match signature {
        Some(_) => Some(u64::from(fetch_counter(&rpc_client, &args.counter).await?.count)),
        None => None,
    };

    Ok(format_output(
        config,
        DecrementOutput {
            counter_address: args.counter,
            amount: args.amount,
            new_count,
            signature,
        },
    ))
}
