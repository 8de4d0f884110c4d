#![allow(dead_code)]

use {
    counter::state::Counter,
    solana_cli_config::Config as SolanaConfig,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_commitment_config::CommitmentConfig,
    solana_keypair::{write_keypair_file, Keypair},
    solana_program_pack::Pack,
    solana_pubkey::Pubkey,
    solana_sdk_ids::bpf_loader_upgradeable,
    solana_signer::Signer,
    solana_test_validator::{TestValidator, TestValidatorGenesis, UpgradeableProgramInfo},
    solana_transaction::Transaction,
    spl_associated_token_account::get_associated_token_address_with_program_id,
    spl_token::{self, state::Mint as SplTokenMint},
    std::{path::PathBuf, process::Command, sync::Arc},
    tempfile::NamedTempFile,
};

pub const COUNTER_CLI_BIN: &str = "../../target/debug/counter-cli";

pub struct TestEnv {
    pub rpc_client: Arc<RpcClient>,
    pub payer: Keypair,
    pub config_file_path: String,
    // Persist these to keep them in scope
    _validator: TestValidator,
    _keypair_file: NamedTempFile,
    _config_file: NamedTempFile,
}

pub async fn start_validator() -> (TestValidator, Keypair) {
    solana_logger::setup();
    let mut test_validator_genesis = TestValidatorGenesis::default();

    test_validator_genesis.add_upgradeable_programs_with_path(&[
        UpgradeableProgramInfo {
            program_id: counter::id(),
            loader: bpf_loader_upgradeable::id(),
            program_path: PathBuf::from("../../target/deploy/counter.so"),
            upgrade_authority: Pubkey::default(),
        },
        UpgradeableProgramInfo {
            program_id: cpi_transfer::id(),
            loader: bpf_loader_upgradeable::id(),
            program_path: PathBuf::from("../../target/deploy/cpi_transfer.so"),
            upgrade_authority: Pubkey::default(),
        },
    ]);

    test_validator_genesis.start_async().await
}

pub async fn setup_test_env() -> TestEnv {
    let (validator, payer) = start_validator().await;
    let rpc_client = Arc::new(validator.get_async_rpc_client());

    // Write payer keypair to a temporary file
    let keypair_file = NamedTempFile::new().unwrap();
    write_keypair_file(&payer, keypair_file.path()).unwrap();
    let keypair_file_path = keypair_file.path().to_str().unwrap().to_string();

    // Create and save CLI configuration file
    let config_file = NamedTempFile::new().unwrap();
    let config_file_path = config_file.path().to_str().unwrap().to_string();
    let solana_config = SolanaConfig {
        json_rpc_url: validator.rpc_url(),
        websocket_url: validator.rpc_pubsub_url(),
        keypair_path: keypair_file_path,
        ..SolanaConfig::default()
    };
    solana_config.save(&config_file_path).unwrap();

    TestEnv {
        payer,
        rpc_client,
        config_file_path,
        _keypair_file: keypair_file,
        _config_file: config_file,
        _validator: validator,
    }
}

/// Requests an airdrop and blocks until it is confirmed, using the latest
/// blockhash and its last valid block height as the expiry window.
pub async fn airdrop_and_confirm(env: &TestEnv, recipient: &Pubkey, lamports: u64) {
    let signature = env
        .rpc_client
        .request_airdrop(recipient, lamports)
        .await
        .unwrap();
    let blockhash = env.rpc_client.get_latest_blockhash().await.unwrap();
    env.rpc_client
        .confirm_transaction_with_spinner(&signature, &blockhash, CommitmentConfig::confirmed())
        .await
        .unwrap();
}

pub fn write_keypair_to_temp_file(keypair: &Keypair) -> (String, NamedTempFile) {
    let file = NamedTempFile::new().unwrap();
    write_keypair_file(keypair, file.path()).unwrap();
    let path = file.path().to_str().unwrap().to_string();
    (path, file)
}

pub async fn fetch_counter_state(env: &TestEnv, counter_address: &Pubkey) -> (u64, Pubkey) {
    let account = env.rpc_client.get_account(counter_address).await.unwrap();
    assert_eq!(account.owner, counter::id());
    let state = bytemuck::from_bytes::<Counter>(&account.data);
    (u64::from(state.count), state.authority)
}

pub fn execute_initialize(env: &TestEnv, counter_keypair_path: &str, fee_payer_path: &str) {
    let status = Command::new(COUNTER_CLI_BIN)
        .args([
            "initialize",
            "-C",
            &env.config_file_path,
            "--fee-payer",
            fee_payer_path,
            "--counter",
            counter_keypair_path,
        ])
        .status()
        .unwrap();
    assert!(status.success());
}

/// Runs one of the mutating counter subcommands, returning whether the CLI
/// exited successfully.
pub fn execute_counter_command(
    env: &TestEnv,
    subcommand: &str,
    counter_address: &Pubkey,
    amount: Option<u64>,
    fee_payer_path: &str,
) -> bool {
    let mut args = vec![
        subcommand.to_string(),
        "-C".to_string(),
        env.config_file_path.clone(),
        "--fee-payer".to_string(),
        fee_payer_path.to_string(),
        counter_address.to_string(),
    ];

    if let Some(amount) = amount {
        args.push(amount.to_string());
    }

    Command::new(COUNTER_CLI_BIN)
        .args(args)
        .status()
        .unwrap()
        .success()
}

pub fn execute_show(env: &TestEnv, counter_address: &Pubkey) -> bool {
    Command::new(COUNTER_CLI_BIN)
        .args([
            "show",
            "-C",
            &env.config_file_path,
            &counter_address.to_string(),
        ])
        .status()
        .unwrap()
        .success()
}

pub fn execute_transfer_sol(env: &TestEnv, recipient: &Pubkey, lamports: u64) {
    let status = Command::new(COUNTER_CLI_BIN)
        .args([
            "transfer-sol",
            "-C",
            &env.config_file_path,
            &recipient.to_string(),
            &lamports.to_string(),
        ])
        .status()
        .unwrap();
    assert!(status.success());
}

pub fn execute_transfer_tokens(
    env: &TestEnv,
    mint: &Pubkey,
    recipient_token_account: &Pubkey,
    amount: u64,
) {
    let status = Command::new(COUNTER_CLI_BIN)
        .args([
            "transfer-tokens",
            "-C",
            &env.config_file_path,
            &mint.to_string(),
            &recipient_token_account.to_string(),
            &amount.to_string(),
        ])
        .status()
        .unwrap();
    assert!(status.success());
}

pub fn execute_transfer_from_vault(
    env: &TestEnv,
    mint: &Pubkey,
    recipient_token_account: &Pubkey,
    amount: u64,
) {
    let status = Command::new(COUNTER_CLI_BIN)
        .args([
            "transfer-from-vault",
            "-C",
            &env.config_file_path,
            &mint.to_string(),
            &recipient_token_account.to_string(),
            &amount.to_string(),
        ])
        .status()
        .unwrap();
    assert!(status.success());
}

pub async fn create_mint(env: &TestEnv, token_program_addr: &Pubkey) -> Pubkey {
    let mint_account = Keypair::new();
    let rent = env
        .rpc_client
        .get_minimum_balance_for_rent_exemption(SplTokenMint::LEN)
        .await
        .unwrap();

    let blockhash = env.rpc_client.get_latest_blockhash().await.unwrap();

    let transaction = Transaction::new_signed_with_payer(
        &[
            solana_system_interface::instruction::create_account(
                &env.payer.pubkey(),
                &mint_account.pubkey(),
                rent,
                SplTokenMint::LEN as u64,
                token_program_addr,
            ),
            spl_token::instruction::initialize_mint(
                token_program_addr,
                &mint_account.pubkey(),
                &env.payer.pubkey(),
                None,
                9,
            )
            .unwrap(),
        ],
        Some(&env.payer.pubkey()),
        &[env.payer.insecure_clone(), mint_account.insecure_clone()],
        blockhash,
    );

    env.rpc_client
        .send_and_confirm_transaction(&transaction)
        .await
        .unwrap();
    mint_account.pubkey()
}

pub async fn create_associated_token_account(
    env: &TestEnv,
    token_program: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Pubkey {
    let ata = get_associated_token_address_with_program_id(owner, mint, token_program);

    let ata_account = env.rpc_client.get_account(&ata).await;
    if ata_account.is_ok() {
        return ata; // Return early if it exists
    }

    let instruction = spl_associated_token_account::instruction::create_associated_token_account(
        &env.payer.pubkey(),
        owner,
        mint,
        token_program,
    );

    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&env.payer.pubkey()),
        &[&env.payer],
        env.rpc_client.get_latest_blockhash().await.unwrap(),
    );

    env.rpc_client
        .send_and_confirm_transaction(&tx)
        .await
        .unwrap();
    ata
}

pub async fn mint_to(
    env: &TestEnv,
    token_program: &Pubkey,
    mint: &Pubkey,
    token_account: &Pubkey,
    amount: u64,
) {
    let instruction = spl_token::instruction::mint_to(
        token_program,
        mint,
        token_account,
        &env.payer.pubkey(),
        &[],
        amount,
    )
    .unwrap();

    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&env.payer.pubkey()),
        &[&env.payer],
        env.rpc_client.get_latest_blockhash().await.unwrap(),
    );

    env.rpc_client
        .send_and_confirm_transaction(&tx)
        .await
        .unwrap();
}

pub async fn token_balance(env: &TestEnv, token_account: &Pubkey) -> u64 {
    let account = env.rpc_client.get_account(token_account).await.unwrap();
    spl_token::state::Account::unpack(&account.data)
        .unwrap()
        .amount
}
