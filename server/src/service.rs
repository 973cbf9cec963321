use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use sapper_core::{
    FieldGenerator, GameField, GameStatus, Point, RandomFieldGenerator, Size, SnapshotSavePolicy,
    Turn, TurnProcessor,
};
use sapper_protocol::{GameStateBody, NewGameParams, NewTurnParams, render_field};

use crate::error::{AppError, AppResult};
use crate::store::{InMemorySessions, SessionRecord};
use crate::validate;

/// Application service wiring the engine to the session store; one instance
/// serves every request.
#[derive(Clone)]
pub struct GameService {
    sessions: InMemorySessions,
    save_policy: Arc<dyn SnapshotSavePolicy + Send + Sync>,
    processor: TurnProcessor,
}

impl GameService {
    pub fn new(save_policy: impl SnapshotSavePolicy + Send + Sync + 'static) -> Self {
        Self {
            sessions: InMemorySessions::new(),
            save_policy: Arc::new(save_policy),
            processor: TurnProcessor::new(),
        }
    }

    pub async fn create_game(&self, params: NewGameParams) -> AppResult<GameStateBody> {
        validate::new_game(&params)?;

        let mut field = GameField::new(Size::new(params.width, params.height))?;
        let seed: u64 = rand::rng().random();
        RandomFieldGenerator::from_seed(seed).generate(&mut field, params.mines_count)?;

        let id = Uuid::new_v4();
        tracing::info!(game_id = %id, seed, "created game");

        self.sessions
            .insert(SessionRecord::new(id, params.mines_count, &field))
            .await;

        Ok(GameStateBody {
            game_id: id,
            width: params.width,
            height: params.height,
            mines_count: params.mines_count,
            completed: false,
            field: render_field(&field, GameStatus::NotCompleted),
        })
    }

    pub async fn make_turn(&self, params: NewTurnParams) -> AppResult<GameStateBody> {
        validate::new_turn(&params)?;

        let entry = self
            .sessions
            .get(params.game_id)
            .await
            .ok_or(AppError::NotFound(params.game_id))?;

        // the session mutex serializes turn processing per session; the whole
        // load-replay-commit unit of work runs under it
        let mut record = entry.lock().await;

        if record.status.is_completed() {
            return Err(AppError::GameAlreadyCompleted(record.id));
        }

        let turn = Turn::new(
            record.next_turn_number(),
            Point::new(params.col, params.row),
        );
        let snapshot = record.latest_snapshot()?;
        let mut pending = record.turns_after(snapshot.turn_number());
        pending.push(turn);

        let replay = self.processor.process(&pending, &snapshot)?;

        record.turns.push(turn);
        let status = GameStatus::from_outcome(replay.outcome);
        record.status = status;
        if self
            .save_policy
            .is_save_needed(replay.outcome, replay.processed_cells)
        {
            record.push_snapshot(turn.number, &replay.field);
        }
        tracing::debug!(
            game_id = %record.id,
            turn = turn.number,
            outcome = ?replay.outcome,
            opened = replay.processed_cells,
            "turn resolved"
        );

        Ok(GameStateBody {
            game_id: record.id,
            width: record.field_size.width,
            height: record.field_size.height,
            mines_count: record.mines_count,
            completed: status.is_completed(),
            field: render_field(&replay.field, status),
        })
    }
}
