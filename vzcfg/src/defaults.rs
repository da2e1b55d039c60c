/* -------------------------------------------------------------------------- *\
 *                |   █████╗ ██╗   ██╗██████╗  █████╗ ███████╗ |              *
 *                |  ██╔══██╗██║   ██║██╔══██╗██╔══██╗██╔════╝ |              *
 *                |  ███████║██║   ██║██████╔╝███████║█████╗   |              *
 *                |  ██╔══██║██║   ██║██╔══██╗██╔══██║██╔══╝   |              *
 *                |  ██║  ██║╚██████╔╝██║  ██║██║  ██║███████╗ |              *
 *                |  ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝ |              *
 *                +--------------------------------------------+              *
 *                                                                            *
 *                         Distributed Systems Runtime                        *
 * -------------------------------------------------------------------------- *
 * Copyright 2022 - 2024, the aurae contributors                              *
 * SPDX-License-Identifier: Apache-2.0                                        *
\* -------------------------------------------------------------------------- */

//! Default sizing parameters.
//!
//! [`Defaults::default()`] carries the values the generator has always used.
//! Operators can override any subset of them from a TOML document:
//!
//! ```toml
//! memory_mb = 512
//! cpu_units = 2000
//! ```

use crate::error::{Result, VzcfgError};
use serde::Deserialize;
use std::path::Path;

/// Memory, in MB, at which the reference UBC table was calibrated.
///
/// This is independent of [Defaults::memory_mb]: changing the default memory
/// grant must not recalibrate the reference table.
pub const REFERENCE_MEMORY_MB: f64 = 256.0;

pub const DEFAULT_MEMORY_MB: f64 = 256.0;
pub const DEFAULT_DISK_GB: f64 = 10.0;
pub const DEFAULT_CPUS: i64 = 1;
pub const DEFAULT_CPU_LIMIT: f64 = 50.0;
pub const DEFAULT_CPU_UNITS: u64 = 1000;
pub const DEFAULT_INODES_PER_GB: f64 = 200_000.0;
pub const DEFAULT_QUOTA_TIME: u64 = 1800;

/// Values used for any field a [crate::SizingRequest] leaves out, plus the
/// fixed parameters that are never part of a request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Guaranteed memory in MB when the request names none.
    pub memory_mb: f64,
    /// Filesystem limit in GB.
    pub disk_gb: f64,
    /// Number of vcpus.
    pub cpus: i64,
    /// Per-vcpu usage limit in percent.
    pub cpu_limit: f64,
    /// CPU scheduler priority.
    pub cpu_units: u64,
    /// Filesystem inodes per GB of disk.
    pub inodes_per_gb: f64,
    /// Quota burst time in seconds.
    pub quota_time: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            memory_mb: DEFAULT_MEMORY_MB,
            disk_gb: DEFAULT_DISK_GB,
            cpus: DEFAULT_CPUS,
            cpu_limit: DEFAULT_CPU_LIMIT,
            cpu_units: DEFAULT_CPU_UNITS,
            inodes_per_gb: DEFAULT_INODES_PER_GB,
            quota_time: DEFAULT_QUOTA_TIME,
        }
    }
}

impl Defaults {
    /// Attempt to parse a defaults file into memory.
    pub fn parse_from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let defaults_toml = std::fs::read_to_string(path).map_err(|source| {
            VzcfgError::ReadDefaults { path: path.to_path_buf(), source }
        })?;

        Self::parse_from_toml(&defaults_toml)
    }

    pub fn parse_from_toml(defaults_toml: &str) -> Result<Self> {
        Ok(toml::from_str(defaults_toml)?)
    }
}
