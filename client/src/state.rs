//! Shared account and argument types

use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};
use solana_program::clock::SECONDS_PER_DAY;

use crate::error::TrzRewardsError;

/// Enum representing the account type managed by the program
#[derive(Clone, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub enum AccountType {
    /// If the account has not been initialized, the enum will be 0
    Uninitialized,
    /// Reward pool
    RewardPool,
    /// Mining account
    Mining,
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Uninitialized
    }
}

impl From<AccountType> for u8 {
    fn from(value: AccountType) -> Self {
        match value {
            AccountType::Uninitialized => 0,
            AccountType::RewardPool => 1,
            AccountType::Mining => 2,
        }
    }
}

/// LockupPeriod is used to define the time during which the lockup will recieve full reward
#[derive(BorshDeserialize, BorshSerialize, Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum LockupPeriod {
    /// Unreachable option
    None,
    /// Unlimited lockup period.
    Flex,
    /// Three months
    ThreeMonths,
    /// SixMonths
    SixMonths,
    /// OneYear
    OneYear,
}

impl LockupPeriod {
    /// Converts LockupPeriod into the Multiplier
    /// which will be used in rewards calculations
    pub fn multiplier(&self) -> u64 {
        match self {
            LockupPeriod::None => 0,
            LockupPeriod::ThreeMonths => 2,
            LockupPeriod::SixMonths => 4,
            LockupPeriod::OneYear => 6,
            LockupPeriod::Flex => 1,
        }
    }

    /// Calculates the time when a lockup should expire
    pub fn end_timestamp(&self, start_ts: u64) -> Result<u64, TrzRewardsError> {
        // negative timestamps mean a date earlier than 1970, so the truncation is safe
        let beginning_of_the_day = start_ts - (start_ts % SECONDS_PER_DAY);

        match self {
            LockupPeriod::None => Err(TrzRewardsError::InvalidLockupPeriod),
            LockupPeriod::ThreeMonths => Ok(beginning_of_the_day + SECONDS_PER_DAY * 90),
            LockupPeriod::SixMonths => Ok(beginning_of_the_day + SECONDS_PER_DAY * 180),
            LockupPeriod::OneYear => Ok(beginning_of_the_day + SECONDS_PER_DAY * 365),
            LockupPeriod::Flex => Ok(beginning_of_the_day + SECONDS_PER_DAY * 5),
        }
    }

    /// Number of days the lockup lasts, as plain numbers
    pub fn days(&self) -> Result<u64, TrzRewardsError> {
        match self {
            LockupPeriod::None => Err(TrzRewardsError::InvalidLockupPeriod),
            LockupPeriod::ThreeMonths => Ok(90),
            LockupPeriod::SixMonths => Ok(180),
            LockupPeriod::OneYear => Ok(365),
            LockupPeriod::Flex => Ok(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockup_multipliers() {
        assert_eq!(LockupPeriod::None.multiplier(), 0);
        assert_eq!(LockupPeriod::Flex.multiplier(), 1);
        assert_eq!(LockupPeriod::ThreeMonths.multiplier(), 2);
        assert_eq!(LockupPeriod::SixMonths.multiplier(), 4);
        assert_eq!(LockupPeriod::OneYear.multiplier(), 6);
    }

    #[test]
    fn test_end_timestamp_truncates_to_day() {
        // 2022-01-01 00:00:00 UTC plus a few hours
        let start_ts = 1_640_995_200 + 3 * 60 * 60;

        assert_eq!(
            LockupPeriod::ThreeMonths.end_timestamp(start_ts).unwrap(),
            1_640_995_200 + SECONDS_PER_DAY * 90
        );
        assert_eq!(
            LockupPeriod::None.end_timestamp(start_ts),
            Err(TrzRewardsError::InvalidLockupPeriod)
        );
    }

    #[test]
    fn test_account_type_discriminants() {
        assert_eq!(u8::from(AccountType::default()), 0);
        assert_eq!(u8::from(AccountType::RewardPool), 1);
        assert_eq!(u8::from(AccountType::Mining), 2);
    }
}
