#![no_std]

mod contract;
mod errors;
mod storage;
mod types;
mod vesting;


pub use contract::{Crowdsale, CrowdsaleClient};
pub use errors::Error;
pub use types::{BundleInfo, GroupId, SaleConfig, VestingGroupConfig};
