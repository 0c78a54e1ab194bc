//! Demo binary: drives both stores through a complete scenario with tracing
//! enabled.
//!
//! ```bash
//! RUST_LOG=info cargo run -p record-service
//! ```

use entity_store::tracing::setup_tracing;
use entity_store::EntityClient;
use record_service::lifecycle::RecordSystem;
use record_service::model::{Message, User, UserPatch};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting record service demo");

    let system = RecordSystem::new();

    let span = tracing::info_span!("message_flow");
    async {
        let first = system
            .message_client
            .create(Message::new("hi"))
            .await
            .map_err(|e| e.to_string())?;
        info!(id = ?first.id, "First message stored");

        let second = system
            .message_client
            .create(Message::new("yo").with_summary("greeting"))
            .await
            .map_err(|e| e.to_string())?;
        info!(id = ?second.id, "Second message stored");

        let all = system
            .message_client
            .list()
            .await
            .map_err(|e| e.to_string())?;
        info!(count = all.len(), "Current messages");

        let patched = system
            .message_client
            .update_text(first.id.unwrap(), "bye")
            .await
            .map_err(|e| e.to_string())?;
        info!(id = ?patched.id, text = %patched.text, "Message text updated");

        system
            .message_client
            .delete(second.id.unwrap())
            .await
            .map_err(|e| e.to_string())?;

        let remaining = system
            .message_client
            .list()
            .await
            .map_err(|e| e.to_string())?;
        info!(count = remaining.len(), "Messages after delete");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("user_flow");
    async {
        let alice = User::new(100, "Alice", 30).with_ip_address("10.0.0.1");
        system
            .user_client
            .register(alice)
            .await
            .map_err(|e| e.to_string())?;
        info!("User registered");

        let updated = system
            .user_client
            .update_profile(
                100,
                UserPatch {
                    name: Some("Alice B.".to_string()),
                    age: Some(31),
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(name = %updated.name, age = updated.age, "User profile updated");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
