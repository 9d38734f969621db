use serde::{Deserialize, Serialize};

use crate::core::Point;

/// One drawing instruction of a vector path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Closes the current sub-path back to its last `MoveTo` point.
    Close,
}

/// Backend-agnostic vector path in device space.
///
/// Paths are plain command lists so the same geometry can be asserted in
/// tests and executed by any renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Vertices in drawing order; `Close` contributes none.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
                PathCommand::Close => None,
            })
            .collect()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
            PathCommand::Close => true,
        })
    }
}
