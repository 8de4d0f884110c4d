use {
    crate::{
        config::Config,
        decrement::{command_decrement, DecrementArgs},
        increment::{command_increment, IncrementArgs},
        initialize::{command_initialize, InitializeArgs},
        output::parse_output_format,
        reset::{command_reset, ResetArgs},
        show::{command_show, ShowArgs},
        transfer_from_vault::{command_transfer_from_vault, TransferFromVaultArgs},
        transfer_sol::{command_transfer_sol, TransferSolArgs},
        transfer_tokens::{command_transfer_tokens, TransferTokensArgs},
        update::{command_update, UpdateArgs},
        CommandResult,
    },
    clap::{
        builder::{PossibleValuesParser, TypedValueParser},
        ArgMatches, Parser, Subcommand,
    },
    solana_clap_v3_utils::input_parsers::{
        parse_url_or_moniker,
        signer::{SignerSource, SignerSourceParserBuilder},
    },
    solana_cli_output::OutputFormat,
    solana_remote_wallet::remote_wallet::RemoteWalletManager,
    std::rc::Rc,
};

#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about = "A command line tool for interacting with the counter and CPI transfer programs"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Configuration file to use
    #[clap(global(true), short = 'C', long = "config", id = "PATH")]
    pub config_file: Option<String>,

    /// Simulate transaction instead of executing
    #[clap(global(true), long, alias = "dryrun")]
    pub dry_run: bool,

    /// URL for Solana JSON `RPC` or moniker (or their first letter):
    /// [`mainnet-beta`, `testnet`, `devnet`, `localhost`].
    /// Default from the configuration file.
    #[clap(
        global(true),
        short = 'u',
        long = "url",
        id = "URL_OR_MONIKER",
        value_parser = parse_url_or_moniker,
    )]
    pub json_rpc_url: Option<String>,

    /// Specify the fee-payer account. This may be a keypair file, the ASK
    /// keyword or the pubkey of an offline signer, provided an appropriate
    /// --signer argument is also passed. Defaults to the client keypair.
    #[clap(
        global(true),
        long,
        id = "PAYER_KEYPAIR",
        value_parser = SignerSourceParserBuilder::default().allow_all().build(),
    )]
    pub fee_payer: Option<SignerSource>,

    /// Show additional information
    #[clap(global(true), short, long)]
    pub verbose: bool,

    /// Return information in specified output format
    #[clap(
        global(true),
        long = "output",
        id = "FORMAT",
        conflicts_with = "verbose",
        value_parser = PossibleValuesParser::new([
            "display",
            "json",
            "json-compact",
            "quiet",
            "verbose"
        ]).map(|o| parse_output_format(&o)),
    )]
    pub output_format: Option<OutputFormat>,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create and initialize a new counter account
    Initialize(InitializeArgs),
    /// Add to the count of a counter account
    Increment(IncrementArgs),
    /// Subtract from the count of a counter account, stopping at zero
    Decrement(DecrementArgs),
    /// Set the count of a counter account to an exact value
    Update(UpdateArgs),
    /// Set the count of a counter account back to zero
    Reset(ResetArgs),
    /// Display the contents of a counter account
    Show(ShowArgs),
    /// Transfer lamports through the CPI transfer program
    TransferSol(TransferSolArgs),
    /// Transfer tokens through the CPI transfer program
    TransferTokens(TransferTokensArgs),
    /// Transfer tokens out of the CPI transfer program vault
    TransferFromVault(TransferFromVaultArgs),
}

impl Command {
    pub async fn execute(
        self,
        config: &Config,
        matches: &ArgMatches,
        wallet_manager: &mut Option<Rc<RemoteWalletManager>>,
    ) -> CommandResult {
        match self {
            Command::Initialize(args) => {
                command_initialize(config, args, matches, wallet_manager).await
            }
            Command::Increment(args) => {
                command_increment(config, args, matches, wallet_manager).await
            }
            Command::Decrement(args) => {
                command_decrement(config, args, matches, wallet_manager).await
            }
            Command::Update(args) => command_update(config, args, matches, wallet_manager).await,
            Command::Reset(args) => command_reset(config, args, matches, wallet_manager).await,
            Command::Show(args) => command_show(config, args).await,
            Command::TransferSol(args) => command_transfer_sol(config, args).await,
            Command::TransferTokens(args) => {
                command_transfer_tokens(config, args, matches, wallet_manager).await
            }
            Command::TransferFromVault(args) => command_transfer_from_vault(config, args).await,
        }
    }
}
