use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::entry::MoodEntry;

/// The in-process mood diary. One shared append-only list per server; CSV
/// import swaps the whole list, form submissions push onto the end. Arrival
/// order is the only identity entries have.
#[derive(Clone, Default)]
pub struct DiaryStore {
    entries: Arc<RwLock<Vec<MoodEntry>>>,
}

impl DiaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, entry: MoodEntry) {
        self.entries.write().await.push(entry);
    }

    /// Replace the whole diary, returning the new entry count.
    pub async fn replace(&self, entries: Vec<MoodEntry>) -> usize {
        let count = entries.len();
        *self.entries.write().await = entries;
        count
    }

    pub async fn snapshot(&self) -> Vec<MoodEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
