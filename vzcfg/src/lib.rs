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

//! Derives OpenVZ container configuration from a handful of sizing inputs.
//!
//! A [SizingRequest] names memory (GiB), disk (GB), a vcpu count and a
//! per-vcpu usage limit; any of them may be left out. [ConfigGenerator]
//! fills the gaps from [Defaults], scales the reference user beancounter
//! table to the requested memory and renders the result as the text of a
//! container config file:
//!
//! ```
//! use vzcfg::{render_config, SizingRequest};
//!
//! let config = render_config(&SizingRequest::new().memory(1.0).vcpu(2i64))?;
//! assert!(config.contains("\nOOMGUARPAGES=50714:202856\n"));
//! assert!(config.contains("\nCPULIMIT=100.0\n"));
//! # Ok::<(), vzcfg::VzcfgError>(())
//! ```
//!
//! Writing the file, and anything else touching the host, is left to the
//! caller.

// Lint groups: https://doc.rust-lang.org/rustc/lints/groups.html
#![warn(future_incompatible, nonstandard_style, unused)]
#![warn(
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    unconditional_recursion,
    unused_comparisons,
    while_true
)]
#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![warn(clippy::unwrap_used)]

pub use clock::{Clock, FixedClock, SystemClock};
pub use defaults::{Defaults, REFERENCE_MEMORY_MB};
pub use error::{Result, VzcfgError};
pub use generator::{render_config, ConfigGenerator};
pub use render::{Document, Line, Section};
pub use scaled::{CpuLimits, DiskLimits, ScaledConfig};
pub use sizing::{Disk, Memory, Sizing, SizingRequest, VcpuCount, VcpuLimit};
pub use ubc::{LimitEntry, LimitTable, MemoryRatio, UbcGroup, UbcResource};
pub use validation::{Numeric, ValidationError};

pub mod clock;
pub mod defaults;
pub mod logging;
pub mod ubc;

mod error;
mod generator;
mod render;
mod scaled;
mod sizing;
