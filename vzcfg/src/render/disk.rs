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

use super::{Decimal, Line, Quantity, Section};
use crate::scaled::DiskLimits;

pub(super) fn section(disk: &DiskLimits) -> Section {
    Section::from(vec![
        Line::pair(
            "DISKSPACE",
            Quantity(disk.space_min),
            Quantity(disk.space_max),
        ),
        Line::pair(
            "DISKINODES",
            Decimal(disk.inodes_min),
            Decimal(disk.inodes_max),
        ),
        Line::setting("QUOTATIME", disk.quota_time),
        Line::Blank,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case(20.0, "20:21", "4000000.0:4400000.0"; "twenty gb")]
    #[test_case(10.0, "10:11", "2000000.0:2200000.0"; "default")]
    #[test_case(2.5, "2.5:3.5", "500000.0:550000.0"; "fractional")]
    #[test]
    fn disk_section(disk_gb: f64, space: &str, inodes: &str) {
        let limits = DiskLimits::new(disk_gb, 200_000.0, 1800);
        pretty_assertions::assert_eq!(
            section(&limits).to_string(),
            format!(
                "DISKSPACE={space}\nDISKINODES={inodes}\nQUOTATIME=1800\n\n"
            )
        );
    }

    #[test]
    fn disk_section_keeps_fraction_on_huge_inode_counts() {
        let limits = DiskLimits::new(1e12, 200_000.0, 1800);
        let rendered = section(&limits);
        let inodes = rendered.setting("DISKINODES").unwrap();
        let (min, max) = inodes.split_once(':').unwrap();
        assert_eq!(min, "200000000000000000.0");
        assert!(max.ends_with(".0"), "{max}");
    }
}
