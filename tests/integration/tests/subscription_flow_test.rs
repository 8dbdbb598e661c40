// End-to-end subscription flow
// ============================
//
// Validates the full merchant/subscriber lifecycle against a local
// validator:
// 1. Initialize the platform
// 2. Create a mint and a service with its payment vault
// 3. Add a billing plan
// 4. Subscribe (token payment into the vault)
// 5. Renew (end date extends from the current end date)
// 6. Pause the service and verify renewals are rejected

use anchor_spl::token::spl_token;
use solana_sdk::program_pack::Pack;
use subflow_sdk::{pda, SubflowClient};

#[path = "test_utils.rs"]
mod test_utils;
use test_utils::{create_mint, create_token_account, ensure_funded, mint_to};

const PLAN_INTERVAL_DAYS: u64 = 30;
const PLAN_COST: u64 = 500;

#[test]
#[ignore = "requires a local validator with the subflow program deployed"]
fn test_subscription_flow() {
    let client = SubflowClient::from_env().expect("failed to build client from environment");
    let rpc = client.program.rpc();

    ensure_funded(&rpc, &client.payer(), 10).expect("airdrop failed");

    println!("\n1. Initialize the platform");
    // Tolerate a platform left behind by an earlier test run
    let _ = client.initialize();

    println!("\n2. Create mint and service");
    let mint = create_mint(&rpc, &client.payer, 6).expect("mint creation failed");
    let (service, signature) = client
        .create_service("acme-films", "https://acme.example/logo.png", mint)
        .expect("create_service failed");
    println!("   Service {service} created: {signature}");

    println!("\n3. Add a {PLAN_INTERVAL_DAYS}-day plan");
    let (plan, signature) = client
        .add_plan(service, PLAN_INTERVAL_DAYS, PLAN_COST)
        .expect("add_plan failed");
    println!("   Plan {plan} added: {signature}");

    println!("\n4. Subscribe");
    let token_account = create_token_account(&rpc, &client.payer, &mint, &client.payer())
        .expect("token account creation failed");
    mint_to(&rpc, &client.payer, &mint, &token_account, PLAN_COST * 10)
        .expect("minting test balance failed");

    let signature = client
        .subscribe(service, plan, token_account)
        .expect("subscribe failed");
    println!("   Subscribed: {signature}");

    let state: subflow::Subscriber = client
        .get_account(&pda::find_subscriber(&plan, &client.payer()).0)
        .expect("subscriber state missing");
    assert_eq!(state.plan, plan);
    assert_eq!(state.subscriber, client.payer());
    let first_end = state.subscription_end_date;
    assert!(first_end > 0);

    // The plan's cost landed in the vault
    let vault = pda::find_vault(&service).0;
    let vault_data = rpc.get_account_data(&vault).expect("vault missing");
    let vault_state = spl_token::state::Account::unpack(&vault_data).expect("bad vault state");
    assert_eq!(vault_state.amount, PLAN_COST);

    println!("\n5. Renew");
    let signature = client
        .renew(service, plan, token_account)
        .expect("renew failed");
    println!("   Renewed: {signature}");

    let state: subflow::Subscriber = client
        .get_account(&pda::find_subscriber(&plan, &client.payer()).0)
        .expect("subscriber state missing");
    // Active subscription extends from its previous end date
    assert_eq!(
        state.subscription_end_date,
        first_end + (PLAN_INTERVAL_DAYS * 24 * 60 * 60) as i64
    );

    println!("\n6. Pause blocks renewals");
    client.pause(service, 1).expect("pause failed");

    let paused_renew = client.renew(service, plan, token_account);
    assert!(paused_renew.is_err(), "renew succeeded on a paused service");

    let unpause_early = client.unpause(service);
    assert!(
        unpause_early.is_err(),
        "unpause succeeded before the pause elapsed"
    );

    println!("\nSubscription flow completed successfully!");
}
