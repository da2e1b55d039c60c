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

//! Config file rendering.
//!
//! Each section is built by a small function returning a [Section], a list of
//! structured [Line]s. [Document] concatenates the sections; nothing else
//! inserts separators, so every section carries its own trailing blank line
//! where the file format has one.

use crate::scaled::ScaledConfig;
use chrono::NaiveDateTime;
use std::fmt::{Display, Formatter};
use tracing::trace;

mod cpu;
mod disk;
mod header;
mod ubc;

/// Width of the header banner between its `|` borders.
const BANNER_WIDTH: usize = 62;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `# text`
    Comment(String),
    /// `#+-----+`, a banner border.
    Rule,
    /// `#| text   |`, a padded banner row.
    Row(String),
    /// `KEY=value`
    Setting { key: String, value: String },
    Blank,
}

impl Line {
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    pub fn row(text: impl Into<String>) -> Self {
        Self::Row(text.into())
    }

    pub fn setting(key: impl Into<String>, value: impl Display) -> Self {
        Self::Setting { key: key.into(), value: value.to_string() }
    }

    /// `KEY=min:max`
    pub fn pair(
        key: impl Into<String>,
        min: impl Display,
        max: impl Display,
    ) -> Self {
        Self::Setting { key: key.into(), value: format!("{min}:{max}") }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Comment(text) => write!(f, "# {text}"),
            Self::Rule => write!(f, "#+{}+", "-".repeat(BANNER_WIDTH)),
            Self::Row(text) => {
                write!(f, "#| {text:<width$}|", width = BANNER_WIDTH - 1)
            }
            Self::Setting { key, value } => write!(f, "{key}={value}"),
            Self::Blank => Ok(()),
        }
    }
}

/// An ordered run of lines; each renders followed by a newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    lines: Vec<Line>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Value of the first `key=` setting in the section.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Setting { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }
}

impl From<Vec<Line>> for Section {
    fn from(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// The complete config file: header, UBC, disk and cpu sections in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: Section,
    pub ubc: Section,
    pub disk: Section,
    pub cpu: Section,
}

impl Document {
    pub fn new(scaled: &ScaledConfig, generated: NaiveDateTime) -> Self {
        let header = header::section(&scaled.sizing, generated);
        trace!(lines = header.lines().len(), "rendered header section");
        let ubc = ubc::section(&scaled.ubc);
        trace!(lines = ubc.lines().len(), "rendered ubc section");
        let disk = disk::section(&scaled.disk);
        trace!(lines = disk.lines().len(), "rendered disk section");
        let cpu = cpu::section(&scaled.cpu);
        trace!(lines = cpu.lines().len(), "rendered cpu section");

        Self { header, ubc, disk, cpu }
    }

    pub fn sections(&self) -> [&Section; 4] {
        [&self.header, &self.ubc, &self.disk, &self.cpu]
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for section in self.sections() {
            section.fmt(f)?;
        }
        Ok(())
    }
}

/// Largest magnitude below which every whole `f64` is an exact `i64`.
const EXACT_WHOLE: f64 = 1e15;

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() < EXACT_WHOLE
}

/// A size or percentage. Whole values print without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Quantity(pub f64);

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if is_whole(self.0) {
            write!(f, "{}", self.0 as i64)
        } else {
            self.0.fmt(f)
        }
    }
}

/// A derived floating point value. Always prints a fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Decimal(pub f64);

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            self.0.fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case(20.0, "20"; "whole")]
    #[test_case(21.5, "21.5"; "fractional")]
    #[test_case(-4.0, "-4"; "negative")]
    #[test_case(1024.0, "1024"; "memory")]
    #[test]
    fn quantity_display(value: f64, expected: &str) {
        assert_eq!(Quantity(value).to_string(), expected);
    }

    #[test_case(4_000_000.0, "4000000.0"; "whole")]
    #[test_case(100.0, "100.0"; "cpu limit")]
    #[test_case(0.1 + 0.2, "0.30000000000000004"; "shortest round trip")]
    #[test_case(-7.25, "-7.25"; "negative")]
    #[test_case(1e15, "1000000000000000.0"; "at the exact whole bound")]
    #[test_case(2e17, "200000000000000000.0"; "beyond the exact whole bound")]
    #[test]
    fn decimal_display(value: f64, expected: &str) {
        assert_eq!(Decimal(value).to_string(), expected);
    }

    #[test]
    fn line_display() {
        assert_eq!(
            Line::comment("CPU resource limits").to_string(),
            "# CPU resource limits"
        );
        assert_eq!(Line::pair("NUMPTY", 16, 16).to_string(), "NUMPTY=16:16");
        assert_eq!(Line::setting("CPUS", 2).to_string(), "CPUS=2");
        assert_eq!(Line::Blank.to_string(), "");
    }

    #[test]
    fn banner_lines_share_a_width() {
        let rule = Line::Rule.to_string();
        let row = Line::row("DISK      : 10GB").to_string();
        assert_eq!(rule.len(), row.len());
        assert!(row.ends_with('|'));
        assert!(rule.starts_with("#+-") && rule.ends_with("-+"));
    }

    #[test]
    fn section_terminates_every_line() {
        let mut section = Section::new();
        section.push(Line::setting("A", 1));
        section.push(Line::Blank);
        assert_eq!(section.to_string(), "A=1\n\n");
        assert_eq!(section.setting("A"), Some("1"));
        assert_eq!(section.setting("B"), None);
    }
}
