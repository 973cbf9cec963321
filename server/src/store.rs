use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use sapper_core::{GameField, GameStatus, Result, Size, Snapshot, Turn, decode_field, encode_field};

/// A stored checkpoint: the turn it belongs to (`None` for the initial one)
/// and the field encoded as the opaque snapshot blob.
#[derive(Clone, Debug)]
pub struct SnapshotRecord {
    pub turn_number: Option<u16>,
    pub field: Vec<u8>,
}

/// One game session as kept by the store. The session owns its turns and
/// snapshots.
#[derive(Clone, Debug)]
pub struct SessionRecord {
    pub id: Uuid,
    pub field_size: Size,
    pub mines_count: u16,
    pub status: GameStatus,
    pub turns: Vec<Turn>,
    pub snapshots: Vec<SnapshotRecord>,
}

impl SessionRecord {
    /// A fresh session: no turns, one initial snapshot of the generated field.
    pub fn new(id: Uuid, mines_count: u16, field: &GameField) -> SessionRecord {
        SessionRecord {
            id,
            field_size: field.size(),
            mines_count,
            status: GameStatus::NotCompleted,
            turns: Vec::new(),
            snapshots: vec![SnapshotRecord {
                turn_number: None,
                field: encode_field(field),
            }],
        }
    }

    /// Turn numbers start at one and increase without gaps.
    pub fn next_turn_number(&self) -> u16 {
        self.turns.last().map_or(0, |turn| turn.number) + 1
    }

    /// Decodes the latest checkpoint. `Option<u16>` ordering puts the initial
    /// snapshot before any numbered one.
    pub fn latest_snapshot(&self) -> Result<Snapshot> {
        let record = self
            .snapshots
            .iter()
            .max_by_key(|snapshot| snapshot.turn_number)
            .expect("sessions always hold the initial snapshot");
        let field = decode_field(&record.field)?;
        Ok(match record.turn_number {
            Some(number) => Snapshot::new(number, field),
            None => Snapshot::initial(field),
        })
    }

    /// Turns made after the given checkpoint, ascending.
    pub fn turns_after(&self, turn_number: Option<u16>) -> Vec<Turn> {
        let after = turn_number.unwrap_or(0);
        self.turns
            .iter()
            .copied()
            .filter(|turn| turn.number > after)
            .collect()
    }

    /// Appends a checkpoint for `turn_number`; at most one snapshot may exist
    /// per turn number.
    pub fn push_snapshot(&mut self, turn_number: u16, field: &GameField) {
        debug_assert!(
            self.snapshots
                .iter()
                .all(|existing| existing.turn_number != Some(turn_number)),
            "snapshot for turn {turn_number} already exists"
        );
        self.snapshots.push(SnapshotRecord {
            turn_number: Some(turn_number),
            field: encode_field(field),
        });
    }
}

/// In-memory session store. Each session sits behind its own mutex, which is
/// what serializes turn processing per session; the outer lock only resolves
/// the entry.
#[derive(Clone, Default)]
pub struct InMemorySessions {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Mutex<SessionRecord>>>>>,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: SessionRecord) {
        let id = record.id;
        let entry = Arc::new(Mutex::new(record));
        self.inner.write().await.insert(id, entry);
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<SessionRecord>>> {
        self.inner.read().await.get(&id).cloned()
    }
}
