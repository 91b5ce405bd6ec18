//! Program descriptor produced by the generated client

use num_traits::FromPrimitive;
use solana_program::pubkey::Pubkey;

use crate::error::{ClientError, TrzRewardsError};

/// Runtime value identifying the program and its bindings.
///
/// Consumers forward descriptors to a host registry; the fields stay private
/// so registration code never depends on the binding internals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramDescriptor {
    name: &'static str,
    address: Pubkey,
}

impl ProgramDescriptor {
    /// Program name as it appears in the IDL
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// On-chain address of the program
    pub fn address(&self) -> Pubkey {
        self.address
    }

    /// Resolves a custom error code from transaction metadata
    pub fn error_from_code(&self, code: u32) -> Option<TrzRewardsError> {
        TrzRewardsError::from_u32(code)
    }
}

/// Builds the descriptor for the rewards program.
pub fn create_trz_rewards_program() -> Result<ProgramDescriptor, ClientError> {
    Ok(ProgramDescriptor {
        name: "trz_rewards",
        address: crate::id(),
    })
}
