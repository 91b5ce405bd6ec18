// #![deny(missing_docs)]

//! Client bindings for the rewards contract

pub mod descriptor;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod plugin;
pub mod state;

pub use descriptor::{create_trz_rewards_program, ProgramDescriptor};
pub use plugin::{Plugin, ProgramBinding, ProgramRegistry, Rewards};

pub use solana_program;

solana_program::declare_id!("BF5PatmRTQDgEKoXR7iHRbkibEEi83nVM38cUKWzQcTR");
