use sapper_protocol::{NewGameParams, NewTurnParams};

use crate::error::{AppError, AppResult};

/// Documented maximum for field width and height.
pub const MAX_FIELD_SIDE: u16 = 30;

pub fn new_game(params: &NewGameParams) -> AppResult<()> {
    let mut problems = Vec::new();
    if params.width == 0 || params.width > MAX_FIELD_SIDE {
        problems.push(format!("width must be between 1 and {MAX_FIELD_SIDE}"));
    }
    if params.height == 0 || params.height > MAX_FIELD_SIDE {
        problems.push(format!("height must be between 1 and {MAX_FIELD_SIDE}"));
    }
    let area = u32::from(params.width) * u32::from(params.height);
    if u32::from(params.mines_count) >= area {
        problems.push("mines_count must be less than the field area".to_owned());
    }
    ok_or_report(problems)
}

pub fn new_turn(params: &NewTurnParams) -> AppResult<()> {
    let mut problems = Vec::new();
    let allowed = 0..MAX_FIELD_SIDE as i16;
    if !allowed.contains(&params.col) {
        problems.push(format!("col must be between 0 and {}", MAX_FIELD_SIDE - 1));
    }
    if !allowed.contains(&params.row) {
        problems.push(format!("row must be between 0 and {}", MAX_FIELD_SIDE - 1));
    }
    ok_or_report(problems)
}

fn ok_or_report(problems: Vec<String>) -> AppResult<()> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems))
    }
}
