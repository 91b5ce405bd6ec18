use std::path::Path;

use anyhow::Result;
use trz_rewards_codegen::{generate_idl, CodegenConfig};

fn main() -> Result<()> {
    solana_logger::setup_with_default("info");

    // manifest dir sits one level below the project root
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    let config = CodegenConfig::for_project_root(&root);

    generate_idl(&config)
}
