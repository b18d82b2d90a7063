use crate::errors::Error;
use crate::storage;
use crate::types::*;
use crate::vesting;
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, token, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Whitelisted capped crowdsale with vesting escrow"
);

#[contract]
pub struct Crowdsale;

#[contractimpl]
impl Crowdsale {
    /// Initialize the crowdsale. Sale parameters and the vesting group
    /// tables are fixed here; only the conversion rate stays mutable, and
    /// only until the sale starts.
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        beneficiary: Address,
        start_time: u64,
        end_time: u64,
        rate: i128,
        hard_cap: i128,
        bounty: i128,
        vesting: Vec<VestingGroupConfig>,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        let own = env.current_contract_address();
        if admin == own || beneficiary == own {
            return Err(Error::InvalidAddress);
        }
        if start_time >= end_time {
            return Err(Error::InvalidTimeRange);
        }
        if rate <= 0 {
            return Err(Error::InvalidRate);
        }
        if hard_cap <= 0 || bounty <= 0 {
            return Err(Error::ZeroAmount);
        }

        let config = SaleConfig {
            payment_token: payment_token.clone(),
            start_time,
            end_time,
            rate,
            hard_cap,
            bounty,
        };

        storage::set_config(&env, &config);
        storage::set_admin(&env, &admin);
        storage::set_beneficiary(&env, &beneficiary);
        storage::set_vesting_config(&env, &vesting);
        storage::set_total_issued(&env, 0);
        storage::set_total_supply(&env, 0);
        storage::set_collected(&env, 0);

        env.events().publish(
            (symbol_short!("sale_init"),),
            (admin, payment_token, start_time, end_time, rate, hard_cap),
        );

        Ok(())
    }

    /// Hand the administrator role to a new address.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        if new_admin == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }

        storage::set_admin(&env, &new_admin);
        env.events().publish((symbol_short!("admin"),), new_admin);

        Ok(())
    }

    /// Point collected funds at a new beneficiary. Allowed any number of
    /// times, before or after finalization.
    pub fn set_beneficiary(env: Env, caller: Address, beneficiary: Address) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        if beneficiary == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }

        storage::set_beneficiary(&env, &beneficiary);
        env.events().publish((symbol_short!("benef"),), beneficiary);

        Ok(())
    }

    /// Change the units-per-payment-token rate. Rejected once the sale
    /// window has opened.
    pub fn set_conversion_rate(env: Env, caller: Address, rate: i128) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        if rate <= 0 {
            return Err(Error::InvalidRate);
        }

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        if get_ledger_timestamp(&env) >= config.start_time {
            return Err(Error::SaleAlreadyStarted);
        }

        config.rate = rate;
        storage::set_config(&env, &config);
        env.events().publish((symbol_short!("rate_set"),), rate);

        Ok(())
    }

    /// Approve addresses for contribution. Idempotent union.
    pub fn add_to_whitelist(env: Env, caller: Address, addrs: Vec<Address>) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        for addr in addrs.iter() {
            storage::set_whitelisted(&env, &addr);
        }
        env.events().publish((symbol_short!("wl_add"),), addrs);

        Ok(())
    }

    /// Exchange `amount` of the payment token for issued units at the
    /// configured rate. The contribution that crosses the hard cap is
    /// accepted in full; every contribution after that is rejected whole,
    /// never truncated.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<i128, Error> {
        contributor.require_auth();

        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        if !storage::is_whitelisted(&env, &contributor) {
            return Err(Error::NotWhitelisted);
        }

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let now = get_ledger_timestamp(&env);
        if storage::is_finalized(&env) || now < config.start_time || now > config.end_time {
            return Err(Error::SaleNotActive);
        }

        let total_issued = storage::get_total_issued(&env);
        if total_issued >= config.hard_cap {
            return Err(Error::HardCapReached);
        }

        let units = amount * config.rate;

        // Pull the base currency in before crediting anything.
        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        let new_total = total_issued + units;
        storage::set_total_issued(&env, new_total);
        storage::set_collected(&env, storage::get_collected(&env) + amount);
        Self::mint(&env, &contributor, units);

        env.events().publish(
            (symbol_short!("funds"), contributor),
            (amount, units, new_total, config.rate),
        );

        Ok(units)
    }

    /// One-shot close of the sale: flips the finalized flag, mints the
    /// bounty to the admin, seeds the vesting bundles, then forwards the
    /// collected funds to the beneficiary. The flag flips before any
    /// external effect, so a reentrant call dies on the finalized guard.
    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        if storage::is_finalized(&env) {
            return Err(Error::SaleAlreadyFinalized);
        }

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let now = get_ledger_timestamp(&env);
        let total_issued = storage::get_total_issued(&env);
        if total_issued < config.hard_cap && now <= config.end_time {
            return Err(Error::FinalizeNotAllowed);
        }

        storage::set_finalized(&env);

        let admin = storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        Self::mint(&env, &admin, config.bounty);

        let vesting_config = storage::get_vesting_config(&env).ok_or(Error::NotInitialized)?;
        vesting::seed_bundles(&env, &vesting_config, now);

        let beneficiary = storage::get_beneficiary(&env).ok_or(Error::NotInitialized)?;
        let collected = storage::get_collected(&env);
        if collected > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&env.current_contract_address(), &beneficiary, &collected);
        }

        env.events()
            .publish((symbol_short!("final"),), (total_issued, collected));

        Ok(())
    }

    /// Peer-to-peer move of issued units. Frozen until the sale finalizes;
    /// mint paths are internal and never pass through here.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        if !storage::is_finalized(&env) {
            return Err(Error::TransferFrozen);
        }

        let from_balance = storage::get_balance(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        storage::set_balance(&env, &from, from_balance - amount);
        storage::set_balance(&env, &to, storage::get_balance(&env, &to) + amount);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);

        Ok(())
    }

    /// Claim the caller's locked allocation from a vesting bundle. Succeeds
    /// at most once per address, only after the bundle's release date.
    pub fn release_for(env: Env, group: GroupId, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let amount = vesting::release(&env, group, &caller)?;
        Self::mint(&env, &caller, amount);

        env.events()
            .publish((symbol_short!("released"), group), (caller, amount));

        Ok(amount)
    }

    // View functions

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn beneficiary(env: Env) -> Result<Address, Error> {
        storage::get_beneficiary(&env).ok_or(Error::NotInitialized)
    }

    pub fn conversion_rate(env: Env) -> Result<i128, Error> {
        Ok(storage::get_config(&env).ok_or(Error::NotInitialized)?.rate)
    }

    pub fn total_issued(env: Env) -> i128 {
        storage::get_total_issued(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn collected(env: Env) -> i128 {
        storage::get_collected(&env)
    }

    pub fn is_finalized(env: Env) -> bool {
        storage::is_finalized(&env)
    }

    pub fn is_whitelisted(env: Env, addr: Address) -> bool {
        storage::is_whitelisted(&env, &addr)
    }

    pub fn balance(env: Env, addr: Address) -> i128 {
        storage::get_balance(&env, &addr)
    }

    pub fn bundle(env: Env, group: GroupId) -> Result<BundleInfo, Error> {
        vesting::bundle_info(&env, group)
    }

    // Internal helpers

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *caller != admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// The only path that creates issued units: contribution, bounty, and
    /// vesting release all come through here.
    fn mint(env: &Env, to: &Address, amount: i128) {
        storage::set_balance(env, to, storage::get_balance(env, to) + amount);
        storage::set_total_supply(env, storage::get_total_supply(env) + amount);
        env.events()
            .publish((symbol_short!("mint"), to.clone()), amount);
    }
}
