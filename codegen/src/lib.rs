//! IDL generation for the rewards program.
//!
//! This crate supplies configuration only: the actual schema extraction is
//! done by the external `shank` CLI, which reads the program source tree and
//! writes the IDL artifact. Any failure of the tool propagates to the caller.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context, Result};
use log::info;

/// Program name as it appears in the generated IDL
pub const PROGRAM_NAME: &str = "trz_rewards";

/// On-chain address of the program, base-58 encoded.
///
/// Passed through to the generator untouched; the tool owns validation.
pub const PROGRAM_ID: &str = "BF5PatmRTQDgEKoXR7iHRbkibEEi83nVM38cUKWzQcTR";

/// Supported IDL generators
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generator {
    /// The shank CLI, driven by `#[account]` annotations in program source
    Shank,
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Shank => f.write_str("shank"),
        }
    }
}

/// Static configuration for one generator invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Which generator to run
    pub generator: Generator,
    /// Program name used for the IDL artifact
    pub program_name: String,
    /// Base-58 program address recorded in the IDL
    pub program_id: String,
    /// Directory receiving the generated IDL file
    pub idl_dir: PathBuf,
    /// Directory where generator binaries get installed
    pub binary_install_dir: PathBuf,
    /// Root of the program source crate the generator reads
    pub program_dir: PathBuf,
}

impl CodegenConfig {
    /// The fixed configuration, with all paths under the given project root.
    pub fn for_project_root(root: &Path) -> Self {
        Self {
            generator: Generator::Shank,
            program_name: PROGRAM_NAME.to_string(),
            program_id: PROGRAM_ID.to_string(),
            idl_dir: root.join("idls"),
            binary_install_dir: root.join(".crates"),
            program_dir: root.join("programs").join("rewards"),
        }
    }
}

/// A tool that can turn program source into an IDL artifact.
pub trait GeneratorTool {
    /// Runs the tool for the given configuration
    fn generate(&mut self, config: &CodegenConfig) -> Result<()>;
}

/// The real shank CLI, spawned as a blocking child process.
pub struct ShankCli;

impl ShankCli {
    fn executable(config: &CodegenConfig) -> PathBuf {
        config.binary_install_dir.join("bin").join("shank")
    }

    /// Installs shank-cli under the configured directory when it is missing.
    fn ensure_installed(config: &CodegenConfig) -> Result<PathBuf> {
        let executable = Self::executable(config);
        if executable.exists() {
            return Ok(executable);
        }

        info!(
            "installing shank-cli into {}",
            config.binary_install_dir.display()
        );
        let status = Command::new("cargo")
            .arg("install")
            .arg("shank-cli")
            .arg("--root")
            .arg(&config.binary_install_dir)
            .status()
            .context("failed to spawn cargo install")?;
        if !status.success() {
            return Err(anyhow!("cargo install shank-cli exited with {}", status));
        }

        Ok(executable)
    }
}

impl GeneratorTool for ShankCli {
    fn generate(&mut self, config: &CodegenConfig) -> Result<()> {
        let executable = Self::ensure_installed(config)?;

        fs::create_dir_all(&config.idl_dir).with_context(|| {
            format!("failed to create idl directory {}", config.idl_dir.display())
        })?;

        let status = Command::new(executable)
            .arg("idl")
            .arg("--crate-root")
            .arg(&config.program_dir)
            .arg("--out-dir")
            .arg(&config.idl_dir)
            .status()
            .context("failed to spawn shank")?;
        if !status.success() {
            return Err(anyhow!("shank idl exited with {}", status));
        }

        Ok(())
    }
}

/// Runs the configured generator exactly once.
pub fn generate_idl(config: &CodegenConfig) -> Result<()> {
    match config.generator {
        Generator::Shank => generate_idl_with(config, &mut ShankCli),
    }
}

/// Same as [`generate_idl`], with the tool supplied by the caller.
pub fn generate_idl_with(config: &CodegenConfig, tool: &mut dyn GeneratorTool) -> Result<()> {
    info!(
        "generating {} idl for {} ({})",
        config.generator, config.program_name, config.program_id
    );
    tool.generate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTool {
        calls: Vec<CodegenConfig>,
    }

    impl GeneratorTool for RecordingTool {
        fn generate(&mut self, config: &CodegenConfig) -> Result<()> {
            self.calls.push(config.clone());
            Ok(())
        }
    }

    #[test]
    fn test_fixed_configuration() {
        let root = Path::new("/work/trz-rewards");
        let config = CodegenConfig::for_project_root(root);

        assert_eq!(config.generator.to_string(), "shank");
        assert_eq!(config.program_name, "trz_rewards");
        assert_eq!(
            config.program_id,
            "BF5PatmRTQDgEKoXR7iHRbkibEEi83nVM38cUKWzQcTR"
        );
        assert_eq!(config.idl_dir, root.join("idls"));
        assert_eq!(config.binary_install_dir, root.join(".crates"));
        assert_eq!(config.program_dir, root.join("programs/rewards"));
    }

    #[test]
    fn test_generator_invoked_once_with_config() {
        let config = CodegenConfig::for_project_root(Path::new("."));
        let mut tool = RecordingTool::default();

        generate_idl_with(&config, &mut tool).unwrap();

        assert_eq!(tool.calls.len(), 1);
        assert_eq!(tool.calls[0].program_id, PROGRAM_ID);
        assert_eq!(tool.calls[0], config);
    }

    #[test]
    fn test_tool_failure_propagates() {
        struct FailingTool;

        impl GeneratorTool for FailingTool {
            fn generate(&mut self, _config: &CodegenConfig) -> Result<()> {
                Err(anyhow!("missing program source"))
            }
        }

        let config = CodegenConfig::for_project_root(Path::new("."));
        let err = generate_idl_with(&config, &mut FailingTool).unwrap_err();
        assert_eq!(err.to_string(), "missing program source");
    }
}
