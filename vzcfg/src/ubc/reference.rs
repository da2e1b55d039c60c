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

use super::{LimitEntry, UbcResource};

/// Placeholder limit for counters whose ceiling is derived per request.
pub const UNLIMITED: u64 = i64::MAX as u64;

const fn entry(resource: UbcResource, barrier: u64, limit: u64) -> LimitEntry {
    LimitEntry { resource, barrier, limit }
}

/// UBC settings for a container with [crate::defaults::REFERENCE_MEMORY_MB]
/// of memory, in [UbcResource::ALL] order.
pub const REFERENCE_LIMITS: [LimitEntry; UbcResource::COUNT] = [
    // Primary
    entry(UbcResource::NumProc, 240, 240),
    entry(UbcResource::AvNumProc, 180, 180),
    entry(UbcResource::NumTcpSock, 360, 360),
    entry(UbcResource::NumOtherSock, 360, 360),
    entry(UbcResource::VmGuarPages, 65536, UNLIMITED),
    // Secondary
    entry(UbcResource::KmemSize, 14372700, 14790164),
    entry(UbcResource::TcpSndBuf, 1720320, 2703360),
    entry(UbcResource::TcpRcvBuf, 1720320, 2703360),
    entry(UbcResource::OtherSockBuf, 1126080, 2097152),
    entry(UbcResource::DgramRcvBuf, 262144, 262144),
    entry(UbcResource::OomGuarPages, 50714, UNLIMITED),
    entry(UbcResource::PrivVmPages, 98304, 104448),
    // Other
    entry(UbcResource::LockedPages, 256, 256),
    entry(UbcResource::ShmPages, 21504, 21504),
    // accounting only, the kernel never enforces it
    entry(UbcResource::PhysPages, 0, UNLIMITED),
    entry(UbcResource::DcacheSize, 3409920, 3624960),
    entry(UbcResource::NumFile, 9312, 9312),
    entry(UbcResource::NumFlock, 188, 206),
    entry(UbcResource::NumPty, 16, 16),
    entry(UbcResource::NumSigInfo, 256, 256),
    entry(UbcResource::NumIptEnt, 128, 128),
];
