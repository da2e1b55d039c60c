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

use crate::defaults::{Defaults, REFERENCE_MEMORY_MB};
use crate::error::Result;
use crate::sizing::Sizing;
use crate::ubc::{LimitTable, MemoryRatio};
use tracing::debug;

/// Headroom added on top of the requested disk size, in GB.
const DISK_SPACE_HEADROOM_GB: f64 = 1.0;
/// Hard inode limit relative to the soft one.
const DISK_INODES_HEADROOM: f64 = 1.10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskLimits {
    pub space_min: f64,
    pub space_max: f64,
    pub inodes_min: f64,
    pub inodes_max: f64,
    pub quota_time: u64,
}

impl DiskLimits {
    pub fn new(disk_gb: f64, inodes_per_gb: f64, quota_time: u64) -> Self {
        let inodes_min = disk_gb * inodes_per_gb;
        Self {
            space_min: disk_gb,
            space_max: disk_gb + DISK_SPACE_HEADROOM_GB,
            inodes_min,
            inodes_max: inodes_min * DISK_INODES_HEADROOM,
            quota_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuLimits {
    pub units: u64,
    pub limit_total: f64,
    pub count: i64,
}

/// Everything the config file needs, derived from one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledConfig {
    pub sizing: Sizing,
    pub ratio: MemoryRatio,
    pub ubc: LimitTable,
    pub disk: DiskLimits,
    pub cpu: CpuLimits,
}

impl ScaledConfig {
    pub fn derive(sizing: Sizing, defaults: &Defaults) -> Result<Self> {
        let ratio = MemoryRatio::new(*sizing.memory, REFERENCE_MEMORY_MB)?;
        let ubc = LimitTable::reference().scale(ratio);
        ubc.warn_on_violations();

        let disk = DiskLimits::new(
            *sizing.disk,
            defaults.inodes_per_gb,
            defaults.quota_time,
        );

        let cpu = CpuLimits {
            units: defaults.cpu_units,
            limit_total: sizing.vcpu_limit.total(sizing.vcpus),
            count: *sizing.vcpus,
        };

        debug!(
            memory_mb = *sizing.memory,
            %ratio,
            disk_max = disk.space_max,
            cpu_limit = cpu.limit_total,
            "derived container limits"
        );

        Ok(Self { sizing, ratio, ubc, disk, cpu })
    }
}
