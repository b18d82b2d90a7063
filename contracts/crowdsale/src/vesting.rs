use crate::errors::Error;
use crate::storage;
use crate::types::*;
use soroban_sdk::{Address, Env, Map, Vec};

/// Turns the fixed group configuration into locked bundles. Called exactly
/// once, by `finalize`; bundles are immutable afterwards except for the
/// release bookkeeping below.
pub fn seed_bundles(env: &Env, vesting: &Vec<VestingGroupConfig>, now: u64) {
    for group_config in vesting.iter() {
        let mut locked_total: i128 = 0;
        for (_, amount) in group_config.allocations.iter() {
            locked_total += amount;
        }

        let bundle = VestingBundle {
            locked_total,
            release_date: now + group_config.release_offset,
            allocations: group_config.allocations.clone(),
            released: Map::new(env),
        };
        storage::set_bundle(env, group_config.group, &bundle);
    }
}

/// Validates a release claim and updates the bundle bookkeeping. Returns the
/// allocation amount; the caller is responsible for minting it. Each address
/// releases at most once, and `locked_total` reaches exactly 0 once every
/// allocated address has done so.
pub fn release(env: &Env, group: GroupId, caller: &Address) -> Result<i128, Error> {
    let mut bundle = storage::get_bundle(env, group).ok_or(Error::UnknownGroup)?;

    let amount = bundle
        .allocations
        .get(caller.clone())
        .ok_or(Error::NotEligible)?;

    if bundle.released.get(caller.clone()).unwrap_or(false) {
        return Err(Error::AlreadyReleased);
    }

    if get_ledger_timestamp(env) < bundle.release_date {
        return Err(Error::TooEarly);
    }

    bundle.released.set(caller.clone(), true);
    bundle.locked_total -= amount;
    storage::set_bundle(env, group, &bundle);

    Ok(amount)
}

pub fn bundle_info(env: &Env, group: GroupId) -> Result<BundleInfo, Error> {
    let bundle = storage::get_bundle(env, group).ok_or(Error::UnknownGroup)?;
    Ok(BundleInfo {
        locked_total: bundle.locked_total,
        release_date: bundle.release_date,
    })
}
