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

use std::fmt::{Display, Formatter};

/// Documentation group a UBC counter is listed under in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UbcGroup {
    Primary,
    Secondary,
    Other,
}

impl UbcGroup {
    pub const ALL: [UbcGroup; 3] =
        [Self::Primary, Self::Secondary, Self::Other];

    /// Comment line opening the group's block.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Primary => {
                "Primary UBC resource limits (in form of barrier:limit)"
            }
            Self::Secondary => "Secondary UBC resource limits",
            Self::Other => "Other UBC resource limits",
        }
    }
}

/// A named user beancounter.
///
/// Variants are declared in config file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UbcResource {
    NumProc,
    AvNumProc,
    NumTcpSock,
    NumOtherSock,
    VmGuarPages,
    KmemSize,
    TcpSndBuf,
    TcpRcvBuf,
    OtherSockBuf,
    DgramRcvBuf,
    OomGuarPages,
    PrivVmPages,
    LockedPages,
    ShmPages,
    PhysPages,
    DcacheSize,
    NumFile,
    NumFlock,
    NumPty,
    NumSigInfo,
    NumIptEnt,
}

impl UbcResource {
    pub const COUNT: usize = 21;

    pub const ALL: [UbcResource; Self::COUNT] = [
        Self::NumProc,
        Self::AvNumProc,
        Self::NumTcpSock,
        Self::NumOtherSock,
        Self::VmGuarPages,
        Self::KmemSize,
        Self::TcpSndBuf,
        Self::TcpRcvBuf,
        Self::OtherSockBuf,
        Self::DgramRcvBuf,
        Self::OomGuarPages,
        Self::PrivVmPages,
        Self::LockedPages,
        Self::ShmPages,
        Self::PhysPages,
        Self::DcacheSize,
        Self::NumFile,
        Self::NumFlock,
        Self::NumPty,
        Self::NumSigInfo,
        Self::NumIptEnt,
    ];

    /// Key used in the config file.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NumProc => "NUMPROC",
            Self::AvNumProc => "AVNUMPROC",
            Self::NumTcpSock => "NUMTCPSOCK",
            Self::NumOtherSock => "NUMOTHERSOCK",
            Self::VmGuarPages => "VMGUARPAGES",
            Self::KmemSize => "KMEMSIZE",
            Self::TcpSndBuf => "TCPSNDBUF",
            Self::TcpRcvBuf => "TCPRCVBUF",
            Self::OtherSockBuf => "OTHERSOCKBUF",
            Self::DgramRcvBuf => "DGRAMRCVBUF",
            Self::OomGuarPages => "OOMGUARPAGES",
            Self::PrivVmPages => "PRIVVMPAGES",
            Self::LockedPages => "LOCKEDPAGES",
            Self::ShmPages => "SHMPAGES",
            Self::PhysPages => "PHYSPAGES",
            Self::DcacheSize => "DCACHESIZE",
            Self::NumFile => "NUMFILE",
            Self::NumFlock => "NUMFLOCK",
            Self::NumPty => "NUMPTY",
            Self::NumSigInfo => "NUMSIGINFO",
            Self::NumIptEnt => "NUMIPTENT",
        }
    }

    pub fn group(&self) -> UbcGroup {
        match self {
            Self::NumProc
            | Self::AvNumProc
            | Self::NumTcpSock
            | Self::NumOtherSock
            | Self::VmGuarPages => UbcGroup::Primary,
            Self::KmemSize
            | Self::TcpSndBuf
            | Self::TcpRcvBuf
            | Self::OtherSockBuf
            | Self::DgramRcvBuf
            | Self::OomGuarPages
            | Self::PrivVmPages => UbcGroup::Secondary,
            Self::LockedPages
            | Self::ShmPages
            | Self::PhysPages
            | Self::DcacheSize
            | Self::NumFile
            | Self::NumFlock
            | Self::NumPty
            | Self::NumSigInfo
            | Self::NumIptEnt => UbcGroup::Other,
        }
    }

    /// Page budgets whose limit follows the container's memory grant.
    pub fn is_memory_scaled(&self) -> bool {
        matches!(
            self,
            Self::PhysPages | Self::OomGuarPages | Self::VmGuarPages
        )
    }
}

impl Display for UbcResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
