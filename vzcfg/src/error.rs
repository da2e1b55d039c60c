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

use std::path::PathBuf;
use thiserror::Error;
use validation::ValidationError;

pub type Result<T> = std::result::Result<T, VzcfgError>;

#[derive(Error, Debug)]
pub enum VzcfgError {
    #[error("invalid sizing input: {0}")]
    InvalidInput(#[from] ValidationError),
    #[error(
        "memory ratio {ratio} derived from {memory_mb}MB is not a positive finite number; requested memory must be greater than zero"
    )]
    DegenerateScale { memory_mb: f64, ratio: f64 },
    #[error("malformed sizing request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
    #[error("failed to read defaults from '{}': {source}", path.display())]
    ReadDefaults { path: PathBuf, source: std::io::Error },
    #[error("failed to parse defaults: {0}")]
    ParseDefaults(#[from] toml::de::Error),
}
