//! Level loading.
//!
//! Levels are a flat byte stream: `width`, `height`, then `width * height`
//! noun ids in row-major order. Id 0 encodes an empty cell. Unknown ids are
//! skipped with a warning so hand-edited levels degrade instead of failing.

use thiserror::Error;

use crate::board::Board;
use crate::core::{NounKind, Position};

/// Errors produced while decoding level data.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level data truncated: need a 2-byte header, got {0} bytes")]
    TruncatedHeader(usize),

    #[error("level data size mismatch: {width}x{height} needs {expected} cells, got {actual}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// Decode a level byte stream into a board.
pub fn load(bytes: &[u8]) -> Result<Board, LevelError> {
    if bytes.len() < 2 {
        return Err(LevelError::TruncatedHeader(bytes.len()));
    }

    let width = bytes[0] as usize;
    let height = bytes[1] as usize;
    let body = &bytes[2..];
    if body.len() != width * height {
        return Err(LevelError::SizeMismatch {
            width,
            height,
            expected: width * height,
            actual: body.len(),
        });
    }

    let mut board = Board::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let id = body[y * width + x];
            if id == 0 {
                continue;
            }

            match NounKind::from_id(id) {
                Some(noun) => {
                    board.place(Position::new(x as i32, y as i32), noun);
                }
                None => {
                    tracing::warn!(id, x, y, "unknown noun id in level data, leaving cell empty");
                }
            }
        }
    }

    Ok(board)
}
