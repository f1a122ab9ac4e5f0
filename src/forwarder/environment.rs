// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Target environments of the transfer API.

use std::str::FromStr;

use super::error::ForwarderError;

pub const DEVELOPMENT_URL: &str = "http://localhost:3000";
pub const STAGING_URL: &str = "https://dev-crypto-ops.vercel.app";
pub const PRODUCTION_URL: &str = "https://transfer.protocol.ai";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Dev,
    Staging,
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Dev => DEVELOPMENT_URL,
            Environment::Staging => STAGING_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ForwarderError;

    /// Names are matched exactly; `Staging` or `prod` are unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Environment::Dev),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(ForwarderError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
