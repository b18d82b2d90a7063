use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<SaleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_beneficiary(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Beneficiary)
}

pub fn set_beneficiary(env: &Env, beneficiary: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Beneficiary, beneficiary);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
}

pub fn get_total_issued(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalIssued)
        .unwrap_or(0)
}

pub fn set_total_issued(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalIssued, &amount);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

pub fn get_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Collected)
        .unwrap_or(0)
}

pub fn set_collected(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Collected, &amount);
}

pub fn get_vesting_config(env: &Env) -> Option<Vec<VestingGroupConfig>> {
    env.storage().instance().get(&DataKey::VestingConfig)
}

pub fn set_vesting_config(env: &Env, vesting: &Vec<VestingGroupConfig>) {
    env.storage()
        .instance()
        .set(&DataKey::VestingConfig, vesting);
}

pub fn is_whitelisted(env: &Env, addr: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(addr.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, addr: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Whitelisted(addr.clone()), &true);
}

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(addr.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(addr.clone()), &amount);
}

pub fn get_bundle(env: &Env, group: GroupId) -> Option<VestingBundle> {
    env.storage().persistent().get(&DataKey::Bundle(group))
}

pub fn set_bundle(env: &Env, group: GroupId, bundle: &VestingBundle) {
    env.storage()
        .persistent()
        .set(&DataKey::Bundle(group), bundle);
}
