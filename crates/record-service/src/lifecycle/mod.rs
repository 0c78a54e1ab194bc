//! # System Lifecycle & Orchestration
//!
//! This module is the composition root: it creates the store tasks, hands
//! their clients out, and coordinates a clean shutdown.
//!
//! **Key Responsibilities:**
//! 1. **Store Creation** - Instantiate both store tasks and their clients
//! 2. **Lifecycle Management** - Spawn each store on the runtime
//! 3. **Graceful Shutdown** - Drop clients and join the store tasks
//!
//! There is deliberately no ambient global map anywhere in the system: the
//! [`RecordSystem`] owns the clients, and collaborators receive clones of
//! them by reference from here.

use crate::clients::{MessageClient, UserClient};
use tracing::{error, info};

/// The runtime orchestrator for the record stores.
///
/// # Architecture
///
/// The system consists of two independent store tasks:
/// - **Message store**: generated ids, text patching
/// - **User store**: caller-supplied ids, name/age profile merge
///
/// They share nothing and never contend with each other.
///
/// # Example
///
/// ```ignore
/// let system = RecordSystem::new();
///
/// let msg = system.message_client.create(Message::new("hi")).await?;
/// let all = system.message_client.list().await?;
///
/// system.shutdown().await?;
/// ```
pub struct RecordSystem {
    /// Client for the message store.
    pub message_client: MessageClient,

    /// Client for the user store.
    pub user_client: UserClient,

    /// Task handles for the running stores (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RecordSystem {
    /// Creates and starts both stores.
    ///
    /// Each store task is spawned immediately and is ready to accept
    /// requests through its client when this returns.
    pub fn new() -> Self {
        let (message_store, message_client) = crate::message_store::new();
        let (user_store, user_client) = crate::user_store::new();

        let message_handle = tokio::spawn(message_store.run());
        let user_handle = tokio::spawn(user_store.run());

        Self {
            message_client,
            user_client,
            handles: vec![message_handle, user_handle],
        }
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping the clients closes the request channels; each store task
    /// detects the closed channel, logs its final size, and exits its event
    /// loop. Any panic inside a store task is surfaced as an error here.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.message_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RecordSystem {
    fn default() -> Self {
        Self::new()
    }
}
