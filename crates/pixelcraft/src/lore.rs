//! World name and lore, fetched from an external text service
//!
//! The fetch never blocks world generation: [`LoreRequest::spawn`] runs it on
//! a background thread and the session polls for the answer. Any failure is
//! logged and replaced with [`WorldInfo::fallback`].

use crate::config::LoreConfig;
use pixelcraft_core::WorldInfo;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;
use thiserror::Error;

const LORE_PROMPT: &str = "Generate a unique name and a short one-sentence atmospheric lore \
                           for a new 2D block-based sandbox world.";

#[derive(Debug, Error)]
pub enum LoreError {
    #[error("lore request failed: {0}")]
    Transport(String),
    #[error("lore response could not be decoded: {0}")]
    Decode(String),
    #[error("lore response had no world name")]
    Empty,
    #[error("lore service is disabled")]
    Disabled,
}

/// Anything that can produce a world name and lore
pub trait LoreSource: Send + 'static {
    fn fetch(&self) -> Result<WorldInfo, LoreError>;
}

/// POSTs a prompt to an HTTP endpoint answering `{"name": ..., "lore": ...}`
pub struct HttpLoreSource {
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpLoreSource {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            timeout,
        }
    }

    /// Build from configuration, reading the API key from the named variable
    pub fn from_config(config: &LoreConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            log::debug!("{} not set, calling lore service without a key", config.api_key_env);
        }
        Self::new(
            config.endpoint.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }
}

impl LoreSource for HttpLoreSource {
    fn fetch(&self) -> Result<WorldInfo, LoreError> {
        let mut request = ureq::post(&self.endpoint).timeout(self.timeout);
        if let Some(key) = &self.api_key {
            request = request.set("Authorization", &format!("Bearer {}", key));
        }

        let response = request
            .send_json(serde_json::json!({ "prompt": LORE_PROMPT }))
            .map_err(|e| LoreError::Transport(e.to_string()))?;
        let body: serde_json::Value = response
            .into_json()
            .map_err(|e| LoreError::Decode(e.to_string()))?;

        parse_lore(body)
    }
}

/// Stand-in source when the service is turned off
pub struct DisabledLoreSource;

impl LoreSource for DisabledLoreSource {
    fn fetch(&self) -> Result<WorldInfo, LoreError> {
        Err(LoreError::Disabled)
    }
}

/// Decode a `{"name", "lore"}` answer
pub fn parse_lore(body: serde_json::Value) -> Result<WorldInfo, LoreError> {
    let info: WorldInfo =
        serde_json::from_value(body).map_err(|e| LoreError::Decode(e.to_string()))?;
    let name = info.name.trim();
    if name.is_empty() {
        return Err(LoreError::Empty);
    }
    Ok(WorldInfo {
        name: name.to_string(),
        lore: info.lore.trim().to_string(),
    })
}

/// Fetch lore, swallowing any error into the fallback pair
pub fn fetch_or_fallback(source: &dyn LoreSource) -> WorldInfo {
    match source.fetch() {
        Ok(info) => info,
        Err(LoreError::Disabled) => WorldInfo::fallback(),
        Err(e) => {
            log::warn!("Lore service failed, using fallback: {}", e);
            WorldInfo::fallback()
        }
    }
}

/// A lore fetch running in the background
pub struct LoreRequest {
    receiver: Receiver<WorldInfo>,
    done: bool,
}

impl LoreRequest {
    pub fn spawn<S: LoreSource>(source: S) -> Self {
        let (sender, receiver) = mpsc::channel();
        let fallback_sender = sender.clone();

        let spawned = thread::Builder::new()
            .name("lore-fetch".to_string())
            .spawn(move || {
                // The receiver may be gone if the session ended first
                let _ = sender.send(fetch_or_fallback(&source));
            });
        if let Err(e) = spawned {
            log::warn!("Could not start lore thread: {}", e);
            let _ = fallback_sender.send(WorldInfo::fallback());
        }

        Self {
            receiver,
            done: false,
        }
    }

    /// Already answered (or failed)
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The answer, once, as soon as it is available
    pub fn try_take(&mut self) -> Option<WorldInfo> {
        if self.done {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(info) => {
                self.done = true;
                Some(info)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                Some(WorldInfo::fallback())
            }
        }
    }

    /// Block for up to `timeout`, then give up with the fallback
    pub fn wait(mut self, timeout: Duration) -> Option<WorldInfo> {
        if self.done {
            return None;
        }
        self.done = true;
        match self.receiver.recv_timeout(timeout) {
            Ok(info) => Some(info),
            Err(RecvTimeoutError::Timeout) => {
                log::warn!("Lore service timed out after {:?}", timeout);
                Some(WorldInfo::fallback())
            }
            Err(RecvTimeoutError::Disconnected) => Some(WorldInfo::fallback()),
        }
    }
}
