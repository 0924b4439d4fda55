use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::error::RelayError;
use super::interface::Romanizer;

/// Lifecycle of the shared romanization engine.
#[derive(Clone)]
pub enum EngineState {
    Initializing,
    Ready(Arc<dyn Romanizer>),
    Failed(String),
}

impl EngineState {
    pub fn label(&self) -> &'static str {
        match self {
            EngineState::Initializing => "initializing",
            EngineState::Ready(_) => "ready",
            EngineState::Failed(_) => "failed",
        }
    }
}

/// Process-wide readiness gate in front of the romanization engine.
///
/// Starts in `Initializing` and leaves it exactly once, to either `Ready`
/// or `Failed`. Callers never wait: an engine that is not ready is a 503.
#[derive(Clone)]
pub struct EngineGate {
    state: Arc<RwLock<EngineState>>,
}

impl Default for EngineGate {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineGate {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(EngineState::Initializing)),
        }
    }

    /// A gate that is already open, for callers that built the engine themselves.
    pub fn ready(engine: Arc<dyn Romanizer>) -> Self {
        Self {
            state: Arc::new(RwLock::new(EngineState::Ready(engine))),
        }
    }

    pub async fn state(&self) -> EngineState {
        self.state.read().await.clone()
    }

    pub async fn engine(&self) -> Result<Arc<dyn Romanizer>, RelayError> {
        match &*self.state.read().await {
            EngineState::Ready(engine) => Ok(Arc::clone(engine)),
            EngineState::Initializing => Err(RelayError::EngineNotReady(None)),
            EngineState::Failed(reason) => Err(RelayError::EngineNotReady(Some(reason.clone()))),
        }
    }

    /// Record the outcome of initialization. Returns `false` if the gate had
    /// already settled, in which case nothing changes.
    pub async fn settle(&self, outcome: anyhow::Result<Arc<dyn Romanizer>>) -> bool {
        let mut state = self.state.write().await;
        if !matches!(*state, EngineState::Initializing) {
            warn!("Romanization engine already settled, ignoring second outcome");
            return false;
        }
        *state = match outcome {
            Ok(engine) => {
                info!("Romanization engine ready ({})", engine.name());
                EngineState::Ready(engine)
            }
            Err(e) => {
                error!("Romanization engine failed to initialize: {:#}", e);
                EngineState::Failed(e.to_string())
            }
        };
        true
    }

    /// Run `loader` on the blocking pool and settle the gate with its result.
    pub fn spawn_init<F>(&self, loader: F) -> JoinHandle<()>
    where
        F: FnOnce() -> anyhow::Result<Arc<dyn Romanizer>> + Send + 'static,
    {
        let gate = self.clone();
        tokio::spawn(async move {
            let outcome = match tokio::task::spawn_blocking(loader).await {
                Ok(result) => result,
                Err(e) => Err(anyhow::anyhow!("Engine loader panicked: {}", e)),
            };
            gate.settle(outcome).await;
        })
    }
}
