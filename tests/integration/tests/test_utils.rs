// Test utilities for subflow integration tests
// =============================================
//
// Helpers for preparing SPL token fixtures on a local validator:
// creating a mint, creating plain token accounts, minting balances,
// and topping up the payer with an airdrop. All of these go through
// the blocking RPC client, matching how the tests themselves submit
// transactions.
//
// The integration tests expect a running validator with the subflow
// program deployed, e.g.:
//
//   solana-test-validator --bpf-program \
//       Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS \
//       target/deploy/subflow.so

use anchor_spl::token::spl_token;
use anyhow::Result;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::Transaction,
};
use std::thread;
use std::time::Duration;

/// Airdrop `sol` to `pubkey` if its balance is below that amount.
pub fn ensure_funded(rpc: &RpcClient, pubkey: &Pubkey, sol: u64) -> Result<()> {
    let target = sol * LAMPORTS_PER_SOL;
    if rpc.get_balance(pubkey)? >= target {
        return Ok(());
    }

    let signature = rpc.request_airdrop(pubkey, target)?;
    for _ in 0..30 {
        if rpc.confirm_transaction(&signature)? {
            return Ok(());
        }
        thread::sleep(Duration::from_millis(500));
    }
    anyhow::bail!("airdrop to {pubkey} not confirmed");
}

/// Create a new SPL token mint with `payer` as mint authority.
pub fn create_mint(rpc: &RpcClient, payer: &Keypair, decimals: u8) -> Result<Pubkey> {
    let mint = Keypair::new();
    let rent = rpc.get_minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN)?;

    let instructions = [
        system_instruction::create_account(
            &payer.pubkey(),
            &mint.pubkey(),
            rent,
            spl_token::state::Mint::LEN as u64,
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_mint(
            &spl_token::ID,
            &mint.pubkey(),
            &payer.pubkey(),
            None,
            decimals,
        )?,
    ];

    let blockhash = rpc.get_latest_blockhash()?;
    let tx = Transaction::new_signed_with_payer(
        &instructions,
        Some(&payer.pubkey()),
        &[payer, &mint],
        blockhash,
    );
    rpc.send_and_confirm_transaction(&tx)?;

    Ok(mint.pubkey())
}

/// Create a token account for `owner` on `mint`.
pub fn create_token_account(
    rpc: &RpcClient,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<Pubkey> {
    let account = Keypair::new();
    let rent = rpc.get_minimum_balance_for_rent_exemption(spl_token::state::Account::LEN)?;

    let instructions = [
        system_instruction::create_account(
            &payer.pubkey(),
            &account.pubkey(),
            rent,
            spl_token::state::Account::LEN as u64,
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_account(
            &spl_token::ID,
            &account.pubkey(),
            mint,
            owner,
        )?,
    ];

    let blockhash = rpc.get_latest_blockhash()?;
    let tx = Transaction::new_signed_with_payer(
        &instructions,
        Some(&payer.pubkey()),
        &[payer, &account],
        blockhash,
    );
    rpc.send_and_confirm_transaction(&tx)?;

    Ok(account.pubkey())
}

/// Mint `amount` base units to `destination`. `payer` must be the mint
/// authority.
pub fn mint_to(
    rpc: &RpcClient,
    payer: &Keypair,
    mint: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) -> Result<()> {
    let instruction = spl_token::instruction::mint_to(
        &spl_token::ID,
        mint,
        destination,
        &payer.pubkey(),
        &[],
        amount,
    )?;

    let blockhash = rpc.get_latest_blockhash()?;
    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[payer],
        blockhash,
    );
    rpc.send_and_confirm_transaction(&tx)?;

    Ok(())
}
