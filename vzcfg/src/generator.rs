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

use crate::clock::{Clock, SystemClock};
use crate::defaults::Defaults;
use crate::error::Result;
use crate::render::Document;
use crate::scaled::ScaledConfig;
use crate::sizing::SizingRequest;
use tracing::info;

/// Turns sizing requests into container config files.
///
/// Holds no state besides its [Defaults] and [Clock]; it can be shared and
/// called concurrently.
#[derive(Debug, Clone, Default)]
pub struct ConfigGenerator<C = SystemClock> {
    defaults: Defaults,
    clock: C,
}

impl ConfigGenerator<SystemClock> {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults, clock: SystemClock }
    }
}

impl<C: Clock> ConfigGenerator<C> {
    pub fn with_clock(defaults: Defaults, clock: C) -> Self {
        Self { defaults, clock }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Normalizes `request` and derives every limit the config file needs.
    pub fn derive(&self, request: &SizingRequest) -> Result<ScaledConfig> {
        let sizing = request.normalize(&self.defaults)?;
        ScaledConfig::derive(sizing, &self.defaults)
    }

    /// Like [Self::render], but keeps the sections apart.
    pub fn document(&self, request: &SizingRequest) -> Result<Document> {
        let scaled = self.derive(request)?;
        Ok(Document::new(&scaled, self.clock.now()))
    }

    #[tracing::instrument(skip(self))]
    pub fn render(&self, request: &SizingRequest) -> Result<String> {
        let document = self.document(request)?.to_string();
        info!(bytes = document.len(), "generated container config");
        Ok(document)
    }
}

/// Renders `request` with the built-in [Defaults], stamped with the current
/// local time.
pub fn render_config(request: &SizingRequest) -> Result<String> {
    ConfigGenerator::new(Defaults::default()).render(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::VzcfgError;
    use chrono::NaiveDate;

    fn generator() -> ConfigGenerator<FixedClock> {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        ConfigGenerator::with_clock(Defaults::default(), FixedClock(now))
    }

    #[test]
    fn render_is_deterministic_with_a_fixed_clock() {
        let request = SizingRequest::new().memory(2.0).disk(50i64);
        let generator = generator();
        assert_eq!(
            generator.render(&request).unwrap(),
            generator.render(&request).unwrap()
        );
    }

    #[test]
    fn render_is_the_concatenation_of_the_sections() {
        let generator = generator();
        let request = SizingRequest::new();
        let document = generator.document(&request).unwrap();
        let joined: String =
            document.sections().iter().map(|s| s.to_string()).collect();
        assert_eq!(generator.render(&request).unwrap(), joined);
    }

    #[test]
    fn configured_defaults_reach_the_output() {
        let defaults = Defaults {
            cpu_units: 2500,
            quota_time: 600,
            ..Defaults::default()
        };
        let generator =
            ConfigGenerator::with_clock(defaults, generator().clock);
        let document = generator.document(&SizingRequest::new()).unwrap();

        assert_eq!(document.cpu.setting("CPUUNITS"), Some("2500"));
        assert_eq!(document.disk.setting("QUOTATIME"), Some("600"));
    }

    #[test]
    fn render_config_uses_builtin_defaults() {
        let config = render_config(&SizingRequest::new()).unwrap();
        assert!(config.contains("\nDISKSPACE=10:11\n"));
        assert!(config.ends_with("CPUS=1\n"));
    }

    #[test]
    fn errors_surface_unchanged() {
        assert!(matches!(
            generator().render(&SizingRequest::new().vcpu("two")),
            Err(VzcfgError::InvalidInput(_))
        ));
        assert!(matches!(
            generator().render(&SizingRequest::new().memory(0.0)),
            Err(VzcfgError::DegenerateScale { .. })
        ));
    }
}
