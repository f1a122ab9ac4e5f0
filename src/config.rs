// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values, and the
//! typed configuration loaded from them. Configuration is read once at
//! startup and handed to components explicitly; nothing reads the
//! environment at request time.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `NODE_ADDRESS` | Full node RPC endpoint (`host:port` or `ws(s)://` URL) | Required |
//! | `NODE_AUTH` | Bearer token for the full node RPC | Required |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |
//! | `SCRIPT_TRANSACTIONS_AUTH_TOKEN` | Forwarder API token (CLI only) | Required |

use std::{net::SocketAddr, time::Duration};

/// Environment variable holding the full node RPC address.
pub const NODE_ADDRESS_ENV: &str = "NODE_ADDRESS";

/// Environment variable holding the full node bearer token.
pub const NODE_AUTH_ENV: &str = "NODE_AUTH";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Environment variable the forwarder reads its API token from.
pub const SCRIPT_TRANSACTIONS_AUTH_TOKEN_ENV: &str = "SCRIPT_TRANSACTIONS_AUTH_TOKEN";

/// Path of the full node's v0 JSON-RPC endpoint.
pub const NODE_RPC_PATH: &str = "/rpc/v0";

/// Overall timeout applied to every full node RPC request.
pub const NODE_RPC_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Connection parameters for the Filecoin full node.
#[derive(Clone)]
pub struct NodeConfig {
    /// WebSocket URL of the JSON-RPC endpoint.
    pub rpc_url: String,
    /// Bearer token sent in the `Authorization` header.
    pub auth_token: String,
    pub timeout: Duration,
}

// Keep the token out of logs.
impl std::fmt::Debug for NodeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeConfig")
            .field("rpc_url", &self.rpc_url)
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl NodeConfig {
    /// Build the config from a node address and token.
    ///
    /// A bare `host:port` is expanded to `ws://host:port/rpc/v0`; an address
    /// that already carries a `ws://` or `wss://` scheme is used as given.
    pub fn new(address: &str, auth_token: impl Into<String>) -> Result<Self, ConfigError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ConfigError::Missing(NODE_ADDRESS_ENV));
        }

        let rpc_url = if address.starts_with("ws://") || address.starts_with("wss://") {
            address.to_string()
        } else {
            format!("ws://{}{}", address.trim_end_matches('/'), NODE_RPC_PATH)
        };

        url::Url::parse(&rpc_url).map_err(|e| ConfigError::Invalid {
            name: NODE_ADDRESS_ENV,
            reason: e.to_string(),
        })?;

        Ok(Self {
            rpc_url,
            auth_token: auth_token.into(),
            timeout: NODE_RPC_TIMEOUT,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let address = env_required(NODE_ADDRESS_ENV)?;
        let auth_token = env_required(NODE_AUTH_ENV)?;
        Self::new(&address, auth_token)
    }
}

/// HTTP bind settings for the gateway.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_optional(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match env_optional(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let addr = format!("{host}:{port}")
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: HOST_ENV,
                reason: e.to_string(),
            })?;

        Ok(Self { addr })
    }
}

fn env_required(name: &'static str) -> Result<String, ConfigError> {
    env_optional(name).ok_or(ConfigError::Missing(name))
}

fn env_optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}
