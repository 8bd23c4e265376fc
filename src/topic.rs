use tracing::{error, info};

/// Client for the notification topic, addressed by its HTTPS publish
/// endpoint. Fan-out to subscribers is the provider's job.
#[derive(Debug, Clone)]
pub struct Topic {
    topic_url: String,
}

impl Topic {
    pub fn new(topic_url: String) -> Self {
        Self { topic_url }
    }

    /// Publish one message to the topic. A single attempt: any error is
    /// logged and reported as Err, with no retry or delivery confirmation.
    pub fn publish(&self, subject: &str, body: &str) -> Result<(), String> {
        let payload = serde_json::json!({ "subject": subject, "message": body });
        match ureq::post(&self.topic_url).send_json(payload) {
            Ok(resp) => {
                info!(status = resp.status().as_u16(), subject = %subject, "Published message to topic");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to publish to topic");
                Err(format!("Failed to publish to topic: {}", e))
            }
        }
    }
}
