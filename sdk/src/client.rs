use crate::{pda, ProviderConfig, Result, SdkError};
use anchor_client::{Client, Cluster, Program};
use anchor_lang::AccountDeserialize;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_program,
};
use std::rc::Rc;

/// Client for interacting with the subflow program.
///
/// The provider (endpoint plus signing identity) is an explicit
/// constructed dependency; the program handle is resolved through the
/// program crate's compiled-in `ID` rather than any runtime name lookup.
pub struct SubflowClient {
    pub client: Client<Rc<Keypair>>,
    pub payer: Rc<Keypair>,
    pub program: Program<Rc<Keypair>>,
}

impl SubflowClient {
    /// Create a client from an explicit cluster and payer.
    pub fn new(
        cluster: Cluster,
        payer: Rc<Keypair>,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Self> {
        let client = Client::new_with_options(
            cluster,
            payer.clone(),
            commitment.unwrap_or(CommitmentConfig::confirmed()),
        );

        let program = client.program(subflow::ID)?;

        Ok(Self {
            client,
            payer,
            program,
        })
    }

    /// Create a client from the ambient environment configuration.
    pub fn from_env() -> Result<Self> {
        let config = ProviderConfig::from_env()?;
        Self::new(config.cluster, config.payer, None)
    }

    /// The payer's public key
    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Platform PDA for this client's payer
    pub fn subflow_address(&self) -> Pubkey {
        pda::find_subflow(&self.payer()).0
    }

    /// Initialize the platform account for the payer. Fails once the
    /// platform already exists for this authority.
    pub fn initialize(&self) -> Result<Signature> {
        let (subflow_pda, _) = pda::find_subflow(&self.payer());

        let signature = self
            .program
            .request()
            .accounts(subflow::accounts::InitializeSubflow {
                subflow: subflow_pda,
                authority: self.payer(),
                system_program: system_program::ID,
            })
            .args(subflow::instruction::Initialize {})
            .send()?;

        Ok(signature)
    }

    /// Register a service and its payment vault. Returns the service
    /// address alongside the transaction signature.
    pub fn create_service(
        &self,
        name: &str,
        uri: &str,
        mint: Pubkey,
    ) -> Result<(Pubkey, Signature)> {
        let (subflow_pda, _) = pda::find_subflow(&self.payer());
        let (service, _) = pda::find_service(name, &subflow_pda, &self.payer());
        let (vault, _) = pda::find_vault(&service);

        let signature = self
            .program
            .request()
            .accounts(subflow::accounts::CreateService {
                subflow: subflow_pda,
                service,
                vault,
                authority: self.payer(),
                mint,
                system_program: system_program::ID,
                token_program: anchor_spl::token::ID,
            })
            .args(subflow::instruction::CreateService {
                name: name.to_string(),
                uri: uri.to_string(),
            })
            .send()?;

        Ok((service, signature))
    }

    /// Add a billing plan to a service owned by the payer.
    pub fn add_plan(
        &self,
        service: Pubkey,
        interval: u64,
        cost: u64,
    ) -> Result<(Pubkey, Signature)> {
        let (plan, _) = pda::find_plan(interval, &service);

        let signature = self
            .program
            .request()
            .accounts(subflow::accounts::AddPlan {
                service,
                plan,
                authority: self.payer(),
                system_program: system_program::ID,
            })
            .args(subflow::instruction::AddPlan { interval, cost })
            .send()?;

        Ok((plan, signature))
    }

    /// Pause a service for `duration` days.
    pub fn pause(&self, service: Pubkey, duration: u8) -> Result<Signature> {
        let signature = self
            .program
            .request()
            .accounts(subflow::accounts::PauseService {
                subflow: self.subflow_address(),
                service,
                authority: self.payer(),
            })
            .args(subflow::instruction::Pause { duration })
            .send()?;

        Ok(signature)
    }

    /// Lift an elapsed pause.
    pub fn unpause(&self, service: Pubkey) -> Result<Signature> {
        let signature = self
            .program
            .request()
            .accounts(subflow::accounts::UnpauseService {
                subflow: self.subflow_address(),
                service,
                authority: self.payer(),
            })
            .args(subflow::instruction::Unpause {})
            .send()?;

        Ok(signature)
    }

    /// Subscribe the payer to a plan, paying one interval up front from
    /// `subscriber_token_account`.
    pub fn subscribe(
        &self,
        service: Pubkey,
        plan: Pubkey,
        subscriber_token_account: Pubkey,
    ) -> Result<Signature> {
        let (vault, _) = pda::find_vault(&service);
        let (subscriber_state, _) = pda::find_subscriber(&plan, &self.payer());

        let signature = self
            .program
            .request()
            .accounts(subflow::accounts::Subscribe {
                service,
                plan,
                vault,
                subscriber: self.payer(),
                subscriber_token_account,
                subscriber_state,
                system_program: system_program::ID,
                token_program: anchor_spl::token::ID,
            })
            .args(subflow::instruction::Subscribe {})
            .send()?;

        Ok(signature)
    }

    /// Pay for another interval of an existing subscription.
    pub fn renew(
        &self,
        service: Pubkey,
        plan: Pubkey,
        subscriber_token_account: Pubkey,
    ) -> Result<Signature> {
        let (vault, _) = pda::find_vault(&service);
        let (subscriber_state, _) = pda::find_subscriber(&plan, &self.payer());

        let signature = self
            .program
            .request()
            .accounts(subflow::accounts::Renew {
                service,
                plan,
                vault,
                subscriber: self.payer(),
                subscriber_token_account,
                subscriber_state,
                token_program: anchor_spl::token::ID,
            })
            .args(subflow::instruction::Renew {})
            .send()?;

        Ok(signature)
    }

    /// Invoke the on-chain status check for `subscriber_key`.
    pub fn check_status(&self, plan: Pubkey, subscriber_key: Pubkey) -> Result<Signature> {
        let (subscriber_state, _) = pda::find_subscriber(&plan, &subscriber_key);

        let signature = self
            .program
            .request()
            .accounts(subflow::accounts::CheckSubscription {
                subscriber_state,
                plan,
            })
            .args(subflow::instruction::CheckStatus { subscriber_key })
            .send()?;

        Ok(signature)
    }

    /// Client-side status check: fetch the subscription state and
    /// compare its end date to the local clock.
    pub fn is_subscribed(&self, plan: &Pubkey, subscriber_key: &Pubkey) -> Result<bool> {
        let (subscriber_state, _) = pda::find_subscriber(plan, subscriber_key);
        let state: subflow::Subscriber = self.get_account(&subscriber_state)?;

        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Ok(state.is_active(now))
    }

    /// Fetch and deserialize a program-owned account.
    pub fn get_account<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<T> {
        self.program
            .account(*address)
            .map_err(|_| SdkError::AccountNotFound(address.to_string()))
    }
}
