//! Registration of the program bindings with a host registry

use crate::descriptor::{create_trz_rewards_program, ProgramDescriptor};
use crate::error::ClientError;

/// Capability exposed by a host's program registry.
///
/// When `overwrite` is false the host decides whether a second registration
/// of the same address is rejected or ignored; nothing here imposes a policy.
pub trait ProgramRegistry {
    /// Adds a program descriptor to the registry
    fn register_program(
        &mut self,
        program: ProgramDescriptor,
        overwrite: bool,
    ) -> Result<(), ClientError>;
}

/// A plugin populates a host registry at installation time.
pub trait Plugin {
    /// Installs the plugin into the given host
    fn install(&self, host: &mut dyn ProgramRegistry) -> Result<(), ClientError>;
}

/// Descriptor factory paired with the overwrite flag it registers under.
#[derive(Clone, Copy)]
pub struct ProgramBinding {
    factory: fn() -> Result<ProgramDescriptor, ClientError>,
    overwrite: bool,
}

impl ProgramBinding {
    /// Creates a binding for the given factory
    pub fn new(factory: fn() -> Result<ProgramDescriptor, ClientError>, overwrite: bool) -> Self {
        Self { factory, overwrite }
    }

    /// Builds the descriptor and makes exactly one registration call.
    ///
    /// A factory failure propagates before the host is touched; a host
    /// rejection propagates unmodified.
    pub fn install_into(&self, host: &mut dyn ProgramRegistry) -> Result<(), ClientError> {
        let program = (self.factory)()?;
        host.register_program(program, self.overwrite)
    }
}

/// Plugin registering the rewards program bindings.
pub struct Rewards {
    binding: ProgramBinding,
}

impl Rewards {
    /// Creates the plugin with its default binding
    pub fn new() -> Self {
        Self {
            binding: ProgramBinding::new(create_trz_rewards_program, false),
        }
    }
}

impl Default for Rewards {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for Rewards {
    fn install(&self, host: &mut dyn ProgramRegistry) -> Result<(), ClientError> {
        self.binding.install_into(host)
    }
}
