use {
    crate::{
        common::process_transaction,
        config::Config,
        output::{format_output, println_display},
        CommandResult, Error,
    },
    clap::{ArgMatches, Args},
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_clap_v3_utils::{
        input_parsers::signer::{SignerSource, SignerSourceParserBuilder},
        keypair::{signer_from_source_with_config, SignerFromPathConfig},
    },
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    solana_keypair::Keypair,
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
pub struct InitializeArgs {
    /// Signer source of the keypair for the new counter account.
    /// A fresh keypair is generated when not provided.
    #[clap(
        long,
        value_parser = SignerSourceParserBuilder::default().allow_all().build()
    )]
    pub counter: Option<SignerSource>,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub counter_address: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub authority: Pubkey,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub signature: Option<Signature>,
}

impl Display for InitializeOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Counter address:", &self.counter_address.to_string())?;
        writeln_name_value(f, "Authority:", &self.authority.to_string())?;

        if let Some(signature) = self.signature {
            writeln_name_value(f, "Signature:", &signature.to_string())?;
        }

        Ok(())
    }
}

impl QuietDisplay for InitializeOutput {
    fn write_str(&self, _: &mut dyn std::fmt::Write) -> std::fmt::Result {
        Ok(())
    }
}
impl VerboseDisplay for InitializeOutput {}

pub async fn command_initialize(
    config: &Config,
    args: InitializeArgs,
    matches: &ArgMatches,
    wallet_manager: &mut Option<Rc<RemoteWalletManager>>,
) -> CommandResult {
    let payer = config.fee_payer()?;
    let rpc_client = config.rpc_client.clone();

    let counter_signer: Box<dyn Signer> = match &args.counter {
        Some(source) => {
            let signer_config = SignerFromPathConfig {
                allow_null_signer: false,
            };
            signer_from_source_with_config(matches, source, "counter", wallet_manager, &signer_config)
                .map_err(|e| -> Error { e.to_string().into() })?
        }
        None => Box::new(Keypair::new()),
    };
    let counter_address = counter_signer.pubkey();

    println_display(config, format!("Initializing counter {}", counter_address));

    let instruction =
        counter::instruction::initialize(&counter::id(), &counter_address, &payer.pubkey());

    let latest_blockhash = rpc_client.get_latest_blockhash().await?;
    let signers: Vec<&dyn Signer> = vec![payer.as_ref(), counter_signer.as_ref()];
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &signers,
        latest_blockhash,
    );

    let signature = process_transaction(config, transaction).await?;

    Ok(format_output(
        config,
        InitializeOutput {
            counter_address,
            authority: payer.pubkey(),
            signature,
        },
    ))
}
