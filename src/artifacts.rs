//! Lookup of compiled contract artifacts

use std::path::PathBuf;

use crate::errors::DeploymentFailure;

/// Directory `cargo odra build` writes wasm files to
pub const DEFAULT_WASM_DIR: &str = "wasm";

/// Where compiled contracts are taken from
#[derive(Debug, Clone)]
pub enum Artifacts {
    /// In-process VM, contracts are linked into the binary
    Vm,
    /// Directory of `<ContractName>.wasm` files
    Dir(PathBuf),
}

impl Artifacts {
    pub fn vm() -> Self {
        Self::Vm
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::Dir(dir.into())
    }

    /// Fails if the artifact for contract `name` has not been built.
    pub fn resolve(&self, name: &'static str) -> Result<(), DeploymentFailure> {
        match self {
            Self::Vm => Ok(()),
            Self::Dir(dir) => {
                let path = dir.join(format!("{name}.wasm"));
                if path.is_file() {
                    Ok(())
                } else {
                    Err(DeploymentFailure::ArtifactNotFound { name, path })
                }
            }
        }
    }
}
