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

//! Sizing input as supplied by callers, and its normalized form.

pub use disk::Disk;
pub use memory::Memory;
pub use vcpu::{VcpuCount, VcpuLimit};

use crate::defaults::Defaults;
use crate::error::Result;
use serde::Deserialize;
use validation::{Numeric, ValidatedField};

mod disk;
mod memory;
mod vcpu;

const REQUEST: &str = "request";

/// Sizing fields, each optional.
///
/// Deserializes from a mapping such as
/// `{"memory": "1.5", "disk": 20, "vcpu": 2, "vcpulimit": 50}`. Values may be
/// numbers or numeric strings; they are only interpreted by [Self::normalize].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SizingRequest {
    /// Memory in GiB.
    pub memory: Option<Numeric>,
    /// Disk in GB.
    pub disk: Option<Numeric>,
    /// Number of vcpus.
    pub vcpu: Option<Numeric>,
    /// Per-vcpu usage limit in percent.
    pub vcpulimit: Option<Numeric>,
}

impl SizingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn memory(mut self, gib: impl Into<Numeric>) -> Self {
        self.memory = Some(gib.into());
        self
    }

    pub fn disk(mut self, gb: impl Into<Numeric>) -> Self {
        self.disk = Some(gb.into());
        self
    }

    pub fn vcpu(mut self, count: impl Into<Numeric>) -> Self {
        self.vcpu = Some(count.into());
        self
    }

    pub fn vcpulimit(mut self, percent: impl Into<Numeric>) -> Self {
        self.vcpulimit = Some(percent.into());
        self
    }

    /// Validates every supplied field and fills the rest from `defaults`.
    pub fn normalize(&self, defaults: &Defaults) -> Result<Sizing> {
        let parent = Some(REQUEST);

        let memory =
            Memory::validate_optional(self.memory.clone(), "memory", parent)?
                .unwrap_or_else(|| Memory::from_mb(defaults.memory_mb));

        let disk = Disk::validate_optional(self.disk.clone(), "disk", parent)?
            .unwrap_or_else(|| Disk::new(defaults.disk_gb));

        let vcpus =
            VcpuCount::validate_optional(self.vcpu.clone(), "vcpu", parent)?
                .unwrap_or_else(|| VcpuCount::new(defaults.cpus));

        let vcpu_limit = VcpuLimit::validate_optional(
            self.vcpulimit.clone(),
            "vcpulimit",
            parent,
        )?
        .unwrap_or_else(|| VcpuLimit::new(defaults.cpu_limit));

        Ok(Sizing { memory, disk, vcpus, vcpu_limit })
    }
}

/// A [SizingRequest] with every field validated and defaulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    pub memory: Memory,
    pub disk: Disk,
    pub vcpus: VcpuCount,
    pub vcpu_limit: VcpuLimit,
}
