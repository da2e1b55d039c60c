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

use super::{Line, Section};
use crate::ubc::{LimitTable, UbcGroup};

pub(super) fn section(table: &LimitTable) -> Section {
    let mut section = Section::new();

    for group in UbcGroup::ALL {
        section.push(Line::comment(group.heading()));
        for entry in table.group(group) {
            section.push(Line::pair(
                entry.resource.name(),
                entry.barrier,
                entry.limit,
            ));
        }
    }

    section.push(Line::Blank);
    section
}
