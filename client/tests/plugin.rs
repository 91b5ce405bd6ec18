use std::collections::HashMap;

use solana_sdk::pubkey::Pubkey;
use trz_rewards_client::error::ClientError;
use trz_rewards_client::{Plugin, ProgramBinding, ProgramDescriptor, ProgramRegistry, Rewards};

/// Registry stub rejecting duplicates unless asked to overwrite.
#[derive(Default)]
struct TestRegistry {
    programs: HashMap<Pubkey, ProgramDescriptor>,
    calls: Vec<bool>,
}

impl ProgramRegistry for TestRegistry {
    fn register_program(
        &mut self,
        program: ProgramDescriptor,
        overwrite: bool,
    ) -> Result<(), ClientError> {
        self.calls.push(overwrite);

        let address = program.address();
        if !overwrite && self.programs.contains_key(&address) {
            return Err(ClientError::ProgramAlreadyRegistered(address));
        }

        self.programs.insert(address, program);
        Ok(())
    }
}

#[test]
fn test_install_registers_once() {
    let mut registry = TestRegistry::default();

    Rewards::new().install(&mut registry).unwrap();

    assert_eq!(registry.calls, vec![false]);
    assert_eq!(registry.programs.len(), 1);

    let program = registry
        .programs
        .get(&trz_rewards_client::id())
        .expect("rewards program must be registered under its address");
    assert_eq!(program.name(), "trz_rewards");
}

#[test]
fn test_double_install_hits_host_policy() {
    let mut registry = TestRegistry::default();
    let plugin = Rewards::new();

    plugin.install(&mut registry).unwrap();
    let second = plugin.install(&mut registry);

    // the adapter made both calls; the rejection came from the host
    assert_eq!(registry.calls.len(), 2);
    assert_eq!(
        second,
        Err(ClientError::ProgramAlreadyRegistered(
            trz_rewards_client::id()
        ))
    );
    assert_eq!(registry.programs.len(), 1);
}

#[test]
fn test_factory_failure_skips_registration() {
    fn broken_factory() -> Result<ProgramDescriptor, ClientError> {
        Err(ClientError::MalformedSchema("truncated idl".to_string()))
    }

    let mut registry = TestRegistry::default();
    let binding = ProgramBinding::new(broken_factory, false);

    let result = binding.install_into(&mut registry);

    assert_eq!(
        result,
        Err(ClientError::MalformedSchema("truncated idl".to_string()))
    );
    assert!(registry.calls.is_empty());
    assert!(registry.programs.is_empty());
}

#[test]
fn test_overwriting_registry_accepts_duplicates() {
    let mut registry = TestRegistry::default();
    let binding = ProgramBinding::new(
        trz_rewards_client::create_trz_rewards_program,
        true,
    );

    binding.install_into(&mut registry).unwrap();
    binding.install_into(&mut registry).unwrap();

    assert_eq!(registry.calls, vec![true, true]);
    assert_eq!(registry.programs.len(), 1);
}
