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

//! User beancounter (UBC) limits.
//!
//! The reference table describes a container with
//! [crate::defaults::REFERENCE_MEMORY_MB] of memory. A request for a
//! different amount copies the table and stretches the page budgets that
//! follow memory; everything else is fixed regardless of size.

pub use reference::{REFERENCE_LIMITS, UNLIMITED};
pub use resource::{UbcGroup, UbcResource};

use crate::error::{Result, VzcfgError};
use std::fmt::{Display, Formatter};
use tracing::warn;

mod reference;
mod resource;

/// One counter as a `barrier:limit` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LimitEntry {
    pub resource: UbcResource,
    pub barrier: u64,
    pub limit: u64,
}

impl Display for LimitEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}:{}", self.resource, self.barrier, self.limit)
    }
}

/// Requested memory relative to the reference memory.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MemoryRatio(f64);

impl MemoryRatio {
    /// Fails with [VzcfgError::DegenerateScale] unless the ratio is positive
    /// and finite.
    pub fn new(memory_mb: f64, reference_mb: f64) -> Result<Self> {
        let ratio = memory_mb / reference_mb;
        if !(ratio > 0.0 && ratio.is_finite()) {
            return Err(VzcfgError::DegenerateScale { memory_mb, ratio });
        }

        Ok(Self(ratio))
    }

    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl Display for MemoryRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Every UBC counter, in config file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitTable {
    entries: [LimitEntry; UbcResource::COUNT],
}

impl Default for LimitTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl LimitTable {
    /// A fresh copy of [REFERENCE_LIMITS].
    pub fn reference() -> Self {
        Self { entries: REFERENCE_LIMITS }
    }

    /// Returns a copy of `self` whose memory scaled counters have their limit
    /// set to `round(barrier * ratio)`. The barrier is kept, as is every
    /// other counter.
    pub fn scale(&self, ratio: MemoryRatio) -> Self {
        let mut scaled = *self;
        for entry in scaled.entries.iter_mut() {
            if entry.resource.is_memory_scaled() {
                // `as` saturates, which is what we want for absurd ratios
                entry.limit = (entry.barrier as f64 * ratio.0).round() as u64;
            }
        }
        scaled
    }

    pub fn get(&self, resource: UbcResource) -> &LimitEntry {
        // entries are stored in UbcResource::ALL order
        &self.entries[resource as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LimitEntry> {
        self.entries.iter()
    }

    pub fn group(
        &self,
        group: UbcGroup,
    ) -> impl Iterator<Item = &LimitEntry> + '_ {
        self.entries.iter().filter(move |e| e.resource.group() == group)
    }

    /// Entries whose barrier exceeds their limit.
    ///
    /// The kernel refuses such pairs. Scaling below the reference memory
    /// produces them for the guaranteed page counters.
    pub fn violations(&self) -> Vec<LimitEntry> {
        self.entries.iter().filter(|e| e.barrier > e.limit).copied().collect()
    }

    pub(crate) fn warn_on_violations(&self) {
        for entry in self.violations() {
            warn!(
                resource = entry.resource.name(),
                barrier = entry.barrier,
                limit = entry.limit,
                "UBC barrier exceeds limit"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    fn ratio(memory_mb: f64) -> MemoryRatio {
        MemoryRatio::new(memory_mb, 256.0).expect("positive ratio")
    }

    #[test]
    fn entry_display() {
        let entry = LimitEntry {
            resource: UbcResource::NumFlock,
            barrier: 188,
            limit: 206,
        };
        assert_eq!(entry.to_string(), "NUMFLOCK=188:206");
    }

    #[test]
    fn get_matches_declaration_order() {
        let table = LimitTable::reference();
        for resource in UbcResource::ALL {
            assert_eq!(table.get(resource).resource, resource);
        }
    }

    #[test]
    fn identity_ratio_replaces_the_placeholder_with_the_barrier() {
        let table = LimitTable::reference().scale(ratio(256.0));

        let scaled =
            UbcResource::ALL.into_iter().filter(UbcResource::is_memory_scaled);
        for resource in scaled {
            let entry = table.get(resource);
            assert_eq!(entry.limit, entry.barrier);
            assert_ne!(entry.limit, UNLIMITED);
        }
    }

    #[test]
    fn scale_uses_the_barrier_times_the_ratio() {
        let table = LimitTable::reference().scale(ratio(1024.0));

        assert_eq!(table.get(UbcResource::PhysPages).limit, 0);
        assert_eq!(table.get(UbcResource::OomGuarPages).limit, 202856);
        assert_eq!(table.get(UbcResource::VmGuarPages).limit, 262144);
    }

    #[test]
    fn scale_rounds_to_nearest() {
        // 50714 * 1.5 = 76071, 50714 * (1.5 + 1/256) ~ 76269.1
        let table = LimitTable::reference().scale(ratio(385.0));
        assert_eq!(table.get(UbcResource::OomGuarPages).limit, 76269);
        assert_eq!(table.get(UbcResource::VmGuarPages).limit, 98560);
    }

    #[test]
    fn scale_does_not_touch_the_source_table() {
        let reference = LimitTable::reference();
        let _ = reference.scale(ratio(4096.0));
        assert_eq!(reference, LimitTable::reference());
        assert_eq!(
            reference.get(UbcResource::VmGuarPages).limit,
            UNLIMITED
        );
    }

    #[test]
    fn scale_keeps_barriers_and_fixed_entries() {
        let reference = LimitTable::reference();
        let scaled = reference.scale(ratio(8192.0));

        for (before, after) in reference.iter().zip(scaled.iter()) {
            assert_eq!(before.barrier, after.barrier);
            if !before.resource.is_memory_scaled() {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn group_yields_entries_in_order() {
        let table = LimitTable::reference();
        let secondary: Vec<_> =
            table.group(UbcGroup::Secondary).map(|e| e.resource).collect();
        assert_eq!(secondary.first(), Some(&UbcResource::KmemSize));
        assert_eq!(secondary.last(), Some(&UbcResource::PrivVmPages));
        assert_eq!(secondary.len(), 7);
    }

    #[test]
    fn small_memory_reports_violations() {
        let reference = LimitTable::reference();
        assert!(reference.scale(ratio(512.0)).violations().is_empty());

        let violations = reference.scale(ratio(128.0)).violations();
        let resources: Vec<_> = violations.iter().map(|e| e.resource).collect();
        assert_eq!(
            resources,
            [UbcResource::VmGuarPages, UbcResource::OomGuarPages]
        );
    }

    #[test_case(0.0; "zero memory")]
    #[test_case(-512.0; "negative memory")]
    #[test]
    fn degenerate_ratios_are_rejected(memory_mb: f64) {
        assert!(matches!(
            MemoryRatio::new(memory_mb, 256.0),
            Err(VzcfgError::DegenerateScale { .. })
        ));
    }
}
