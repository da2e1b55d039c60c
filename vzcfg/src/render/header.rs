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

use super::{Line, Quantity, Section};
use crate::sizing::Sizing;
use chrono::NaiveDateTime;

/// `ctime(3)` layout, e.g. `Mon Oct 19 09:05:00 2026`.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub(super) fn section(sizing: &Sizing, generated: NaiveDateTime) -> Section {
    Section::from(vec![
        Line::Rule,
        Line::row("CT configuration generated by vzcfg"),
        Line::row(format!("MEMORY    : {}MB", Quantity(*sizing.memory))),
        Line::row(format!("DISK      : {}GB", Quantity(*sizing.disk))),
        Line::row(format!("CPUS      : {}", sizing.vcpus)),
        Line::row(format!("CPULIMIT  : {}%", Quantity(*sizing.vcpu_limit))),
        Line::row(format!("Generated : {}", generated.format(CTIME_FORMAT))),
        Line::Rule,
        Line::Blank,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::Defaults;
    use crate::sizing::SizingRequest;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn banner_embeds_normalized_input() {
        let sizing = SizingRequest::new()
            .memory(1.5)
            .disk(20i64)
            .vcpu(2i64)
            .normalize(&Defaults::default())
            .unwrap();
        let generated = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap();

        let expected = "\
#+--------------------------------------------------------------+
#| CT configuration generated by vzcfg                          |
#| MEMORY    : 1536MB                                           |
#| DISK      : 20GB                                             |
#| CPUS      : 2                                                |
#| CPULIMIT  : 50%                                              |
#| Generated : Mon Oct 19 09:05:00 2026                         |
#+--------------------------------------------------------------+

";
        assert_eq!(section(&sizing, generated).to_string(), expected);
    }

    #[test]
    fn banner_has_eight_comment_lines() {
        let sizing =
            SizingRequest::new().normalize(&Defaults::default()).unwrap();
        let generated = NaiveDate::from_ymd_opt(2024, 2, 29)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .unwrap();

        let section = section(&sizing, generated);
        let comments = section
            .lines()
            .iter()
            .filter(|l| matches!(l, Line::Rule | Line::Row(_)))
            .count();
        assert_eq!(comments, 8);
        assert_eq!(section.lines().last(), Some(&Line::Blank));
    }
}
