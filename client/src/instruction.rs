//! Instruction types

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::{system_program, sysvar};

use crate::state::LockupPeriod;

/// Instructions supported by the program
#[derive(Debug, BorshDeserialize, BorshSerialize, PartialEq, Eq)]
pub enum RewardsInstruction {
    /// Creates and initializes a reward pool account
    ///
    /// Accounts:
    /// [W] Reward pool account
    /// [R] Reward mint account
    /// [W] Vault account
    /// [WS] Payer
    /// [RS] Deposit authority
    /// [R] Rent sysvar
    /// [R] Token program
    /// [R] System program
    InitializePool {
        /// Account can fill the reward vault
        fill_authority: Pubkey,
        /// Account can distribute rewards for stakers
        distribute_authority: Pubkey,
    },

    /// Fills the reward pool with rewards
    ///
    /// Accounts:
    /// [W] Reward pool account
    /// [R] Reward mint account
    /// [W] Vault account
    /// [RS] Fill authority
    /// [W] Source token account
    /// [R] Token program
    FillVault {
        /// Amount to fill
        rewards: u64,
        /// Rewards distribution ends at given date
        distribution_ends_at: u64,
    },

    /// Initializes mining account for the specified mining owner
    ///
    /// Accounts:
    /// [W] Reward pool account
    /// [W] Mining
    /// [WS] Payer
    /// [R] System program
    InitializeMining {
        /// Represent the end-user, owner of the mining
        mining_owner: Pubkey,
    },

    /// Deposits amount of supply to the mining account
    ///
    /// Accounts:
    /// [W] Reward pool account
    /// [W] Mining
    /// [RS] Deposit authority
    /// [W] Delegate mining
    DepositMining {
        /// Amount to deposit
        amount: u64,
        /// Lockup Period
        lockup_period: LockupPeriod,
        /// Specifies the owner of the Mining Account
        mining_owner: Pubkey,
        /// Wallet address of the delegate
        delegate: Pubkey,
    },

    /// Withdraws amount of supply from the mining account
    ///
    /// Accounts:
    /// [W] Reward pool account
    /// [W] Mining
    /// [RS] Deposit authority
    /// [W] Delegate mining
    WithdrawMining {
        /// Amount to withdraw
        amount: u64,
        /// Specifies the owner of the Mining Account
        mining_owner: Pubkey,
        /// Wallet address of the delegate
        delegate: Pubkey,
    },

    /// Claims amount of rewards
    ///
    /// Accounts:
    /// [R] Reward pool account
    /// [R] Reward mint account
    /// [W] Vault account
    /// [W] Mining
    /// [RS] Mining owner
    /// [RS] Deposit authority
    /// [W] Mining owner reward token account
    /// [R] Token program
    Claim,

    /// Restakes an existing deposit under a new lockup
    ///
    /// Accounts:
    /// [W] Reward pool account
    /// [W] Mining
    /// [RS] Deposit authority
    /// [W] Delegate mining
    ExtendStake {
        /// Lockup period before restaking. Actually it's only needed
        /// for Flex to AnyPeriod edge case
        old_lockup_period: LockupPeriod,
        /// Requested lockup period for restaking
        new_lockup_period: LockupPeriod,
        /// Deposit start_ts
        deposit_start_ts: u64,
        /// Amount of tokens to be restaked, this
        /// number cannot be decreased. It reflects the number of staked tokens
        /// before the extend_stake function call
        base_amount: u64,
        /// In case user wants to increase it's staked number of tokens,
        /// the addition amount might be provided
        additional_amount: u64,
        /// The wallet who owns the mining account
        mining_owner: Pubkey,
        /// Wallet addres of delegate
        delegate: Pubkey,
    },

    /// Distributes tokens among mining owners
    ///
    /// Accounts:
    /// [W] Reward pool account
    /// [RS] Distribute authority
    DistributeRewards,

    /// Closes mining account and transfers all lamports to the target account
    ///
    /// Accounts:
    /// [W] Mining
    /// [RS] Mining owner
    /// [W] Target account
    /// [RS] Deposit authority
    /// [R] Reward pool account
    CloseMining,

    /// Changes delegate mining account
    ///
    /// Accounts:
    /// [W] Reward pool account
    /// [W] Mining
    /// [RS] Deposit authority
    /// [RS] Mining owner
    /// [W] Old delegate mining
    /// [W] New delegate mining
    ChangeDelegate {
        /// Amount of staked tokens
        staked_amount: u64,
        /// Wallet address of the new delegate
        new_delegate: Pubkey,
    },

    /// Applies a slashing penalty to a mining account
    ///
    /// Accounts:
    /// [RS] Deposit authority
    /// [W] Reward pool account
    /// [W] Mining
    Slash {
        /// The owner of the slashed mining account
        mining_owner: Pubkey,
        /// Number of tokens that had been slashed
        slash_amount_in_native: u64,
        /// Weighted stake part for the slashed number of tokens multiplied by the period
        slash_amount_multiplied_by_period: u64,
        /// None if it's Flex period, because it's already expired
        stake_expiration_date: Option<u64>,
    },

    /// Decreases the weighted stake of a mining account
    ///
    /// Accounts:
    /// [RS] Deposit authority
    /// [W] Reward pool account
    /// [W] Mining
    DecreaseRewards {
        /// The owner of the mining account
        mining_owner: Pubkey,
        /// The number by which weighted stake should be decreased
        decreased_weighted_stake_number: u64,
    },
}

/// Creates 'InitializePool' instruction.
#[allow(clippy::too_many_arguments)]
pub fn initialize_pool(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    reward_mint: &Pubkey,
    vault: &Pubkey,
    payer: &Pubkey,
    deposit_authority: &Pubkey,
    fill_authority: &Pubkey,
    distribute_authority: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new_readonly(*reward_mint, false),
        AccountMeta::new(*vault, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::InitializePool {
            fill_authority: *fill_authority,
            distribute_authority: *distribute_authority,
        },
        accounts,
    )
}

/// Creates 'FillVault' instruction.
#[allow(clippy::too_many_arguments)]
pub fn fill_vault(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    reward_mint: &Pubkey,
    vault: &Pubkey,
    authority: &Pubkey,
    from: &Pubkey,
    rewards: u64,
    distribution_ends_at: u64,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new_readonly(*reward_mint, false),
        AccountMeta::new(*vault, false),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*from, false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::FillVault {
            rewards,
            distribution_ends_at,
        },
        accounts,
    )
}

/// Creates 'InitializeMining' instruction.
pub fn initialize_mining(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    mining: &Pubkey,
    payer: &Pubkey,
    mining_owner: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new(*mining, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::InitializeMining {
            mining_owner: *mining_owner,
        },
        accounts,
    )
}

/// Creates 'DepositMining' instruction.
#[allow(clippy::too_many_arguments)]
pub fn deposit_mining(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    mining: &Pubkey,
    deposit_authority: &Pubkey,
    delegate_mining: &Pubkey,
    amount: u64,
    lockup_period: LockupPeriod,
    mining_owner: &Pubkey,
    delegate: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new(*mining, false),
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new(*delegate_mining, false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::DepositMining {
            amount,
            lockup_period,
            mining_owner: *mining_owner,
            delegate: *delegate,
        },
        accounts,
    )
}

/// Creates 'WithdrawMining' instruction.
#[allow(clippy::too_many_arguments)]
pub fn withdraw_mining(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    mining: &Pubkey,
    deposit_authority: &Pubkey,
    delegate_mining: &Pubkey,
    amount: u64,
    mining_owner: &Pubkey,
    delegate: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new(*mining, false),
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new(*delegate_mining, false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::WithdrawMining {
            amount,
            mining_owner: *mining_owner,
            delegate: *delegate,
        },
        accounts,
    )
}

/// Creates 'Claim' instruction.
#[allow(clippy::too_many_arguments)]
pub fn claim(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    reward_mint: &Pubkey,
    vault: &Pubkey,
    mining: &Pubkey,
    mining_owner: &Pubkey,
    deposit_authority: &Pubkey,
    mining_owner_reward_token: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(*reward_pool, false),
        AccountMeta::new_readonly(*reward_mint, false),
        AccountMeta::new(*vault, false),
        AccountMeta::new(*mining, false),
        AccountMeta::new_readonly(*mining_owner, true),
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new(*mining_owner_reward_token, false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];

    Instruction::new_with_borsh(*program_id, &RewardsInstruction::Claim, accounts)
}

/// Creates 'ExtendStake' instruction.
#[allow(clippy::too_many_arguments)]
pub fn extend_stake(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    mining: &Pubkey,
    deposit_authority: &Pubkey,
    delegate_mining: &Pubkey,
    old_lockup_period: LockupPeriod,
    new_lockup_period: LockupPeriod,
    deposit_start_ts: u64,
    base_amount: u64,
    additional_amount: u64,
    mining_owner: &Pubkey,
    delegate: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new(*mining, false),
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new(*delegate_mining, false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::ExtendStake {
            old_lockup_period,
            new_lockup_period,
            deposit_start_ts,
            base_amount,
            additional_amount,
            mining_owner: *mining_owner,
            delegate: *delegate,
        },
        accounts,
    )
}

/// Creates 'DistributeRewards' instruction.
pub fn distribute_rewards(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    distribute_authority: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new_readonly(*distribute_authority, true),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::DistributeRewards,
        accounts,
    )
}

/// Creates 'CloseMining' instruction.
pub fn close_mining(
    program_id: &Pubkey,
    mining: &Pubkey,
    mining_owner: &Pubkey,
    target_account: &Pubkey,
    deposit_authority: &Pubkey,
    reward_pool: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*mining, false),
        AccountMeta::new_readonly(*mining_owner, true),
        AccountMeta::new(*target_account, false),
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new_readonly(*reward_pool, false),
    ];

    Instruction::new_with_borsh(*program_id, &RewardsInstruction::CloseMining, accounts)
}

/// Creates 'ChangeDelegate' instruction.
#[allow(clippy::too_many_arguments)]
pub fn change_delegate(
    program_id: &Pubkey,
    reward_pool: &Pubkey,
    mining: &Pubkey,
    deposit_authority: &Pubkey,
    mining_owner: &Pubkey,
    old_delegate_mining: &Pubkey,
    new_delegate_mining: &Pubkey,
    new_delegate: &Pubkey,
    staked_amount: u64,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new(*mining, false),
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new_readonly(*mining_owner, true),
        AccountMeta::new(*old_delegate_mining, false),
        AccountMeta::new(*new_delegate_mining, false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::ChangeDelegate {
            staked_amount,
            new_delegate: *new_delegate,
        },
        accounts,
    )
}

/// Creates 'Slash' instruction.
#[allow(clippy::too_many_arguments)]
pub fn slash(
    program_id: &Pubkey,
    deposit_authority: &Pubkey,
    reward_pool: &Pubkey,
    mining: &Pubkey,
    mining_owner: &Pubkey,
    slash_amount_in_native: u64,
    slash_amount_multiplied_by_period: u64,
    stake_expiration_date: Option<u64>,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new(*mining, false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::Slash {
            mining_owner: *mining_owner,
            slash_amount_in_native,
            slash_amount_multiplied_by_period,
            stake_expiration_date,
        },
        accounts,
    )
}

/// Creates 'DecreaseRewards' instruction.
pub fn decrease_rewards(
    program_id: &Pubkey,
    deposit_authority: &Pubkey,
    reward_pool: &Pubkey,
    mining: &Pubkey,
    mining_owner: &Pubkey,
    decreased_weighted_stake_number: u64,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(*deposit_authority, true),
        AccountMeta::new(*reward_pool, false),
        AccountMeta::new(*mining, false),
    ];

    Instruction::new_with_borsh(
        *program_id,
        &RewardsInstruction::DecreaseRewards {
            mining_owner: *mining_owner,
            decreased_weighted_stake_number,
        },
        accounts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;
    use std::convert::TryInto;

    #[test]
    fn test_deposit_mining_accounts() {
        let reward_pool = Pubkey::new_unique();
        let mining = Pubkey::new_unique();
        let deposit_authority = Pubkey::new_unique();
        let delegate_mining = Pubkey::new_unique();
        let mining_owner = Pubkey::new_unique();
        let delegate = Pubkey::new_unique();

        let ix = deposit_mining(
            &crate::id(),
            &reward_pool,
            &mining,
            &deposit_authority,
            &delegate_mining,
            100,
            LockupPeriod::ThreeMonths,
            &mining_owner,
            &delegate,
        );

        assert_eq!(ix.program_id, crate::id());
        assert_eq!(ix.accounts.len(), 4);
        assert_eq!(ix.accounts[0].pubkey, reward_pool);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[2].pubkey, deposit_authority);
        assert!(ix.accounts[2].is_signer);
        assert!(!ix.accounts[2].is_writable);

        let expected = RewardsInstruction::DepositMining {
            amount: 100,
            lockup_period: LockupPeriod::ThreeMonths,
            mining_owner,
            delegate,
        }
        .try_to_vec()
        .unwrap();
        assert_eq!(ix.data, expected);
    }

    #[test]
    fn test_fill_vault_wire_format() {
        let data = RewardsInstruction::FillVault {
            rewards: 42,
            distribution_ends_at: 1_700_000_000,
        }
        .try_to_vec()
        .unwrap();

        // variant index, then two little-endian u64 fields
        assert_eq!(data[0], 1);
        assert_eq!(data.len(), 1 + 8 + 8);
        assert_eq!(u64::from_le_bytes(data[1..9].try_into().unwrap()), 42);
    }

    #[test]
    fn test_claim_signers() {
        let keys: Vec<Pubkey> = (0..7).map(|_| Pubkey::new_unique()).collect();
        let ix = claim(
            &crate::id(),
            &keys[0],
            &keys[1],
            &keys[2],
            &keys[3],
            &keys[4],
            &keys[5],
            &keys[6],
        );

        let signers: Vec<&Pubkey> = ix
            .accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| &meta.pubkey)
            .collect();
        assert_eq!(signers, vec![&keys[4], &keys[5]]);
        assert_eq!(ix.accounts.last().unwrap().pubkey, spl_token::id());
    }
}
