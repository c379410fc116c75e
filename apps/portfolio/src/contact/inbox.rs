use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::contact::form::ContactForm;

pub const INBOX_CAPACITY: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct ReceivedMessage {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub form: ContactForm,
}

/// Messages received since the process started. Bounded; the oldest entry is
/// dropped once the capacity is reached.
#[derive(Debug, Clone)]
pub struct ContactInbox {
    messages: Arc<RwLock<VecDeque<ReceivedMessage>>>,
    capacity: usize,
}

impl Default for ContactInbox {
    fn default() -> Self {
        Self::with_capacity(INBOX_CAPACITY)
    }
}

impl ContactInbox {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub async fn push(&self, form: ContactForm) -> ReceivedMessage {
        let message = ReceivedMessage {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            form,
        };
        let mut messages = self.messages.write().await;
        if messages.len() == self.capacity {
            messages.pop_front();
        }
        messages.push_back(message.clone());
        message
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }

    /// Newest first.
    pub async fn recent(&self) -> Vec<ReceivedMessage> {
        self.messages.read().await.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(subject: &str) -> ContactForm {
        ContactForm {
            subject: subject.to_string(),
            ..ContactForm::default()
        }
    }

    #[tokio::test]
    async fn test_drops_oldest_when_full() {
        let inbox = ContactInbox::with_capacity(2);
        inbox.push(form("one")).await;
        inbox.push(form("two")).await;
        inbox.push(form("three")).await;

        assert_eq!(inbox.len().await, 2);
        let subjects: Vec<_> = inbox
            .recent()
            .await
            .into_iter()
            .map(|m| m.form.subject)
            .collect();
        assert_eq!(subjects, vec!["three", "two"]);
    }
}
