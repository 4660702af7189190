//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the costing
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CostingPolicy, PolicyFile};

/// Loads and validates the costing policy.
///
/// # Directory Structure
///
/// The configuration directory contains a single file:
/// ```text
/// config/costing/
/// └── policy.yaml   # Notional profit basis and recognition fraction
/// ```
///
/// # Example
///
/// ```no_run
/// use costing_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/costing").unwrap();
/// let fraction = loader.policy().recognition_fraction();
/// println!("recognising {fraction} of notional profit");
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: CostingPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/costing")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if the file is
    /// missing, contains invalid YAML, or specifies a zero recognition
    /// denominator.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let path_str = policy_path.display().to_string();

        let content = fs::read_to_string(&policy_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: PolicyFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let policy = file.policy;
        if policy.recognition_denominator == 0 {
            return Err(EngineError::ConfigParseError {
                path: path_str,
                message: "recognition_denominator must be non-zero".to_string(),
            });
        }

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &CostingPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> CostingPolicy {
        self.policy
    }
}
