// src/database/migration/runner.rs

use rusqlite::Connection;
use std::fmt;
use tracing::{error, info};

use super::super::error::DbResult;

/// What a step did to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Nothing to do, the schema already has the target shape.
    AlreadySatisfied,
    Applied { rows_copied: usize },
}

impl fmt::Display for MigrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationOutcome::AlreadySatisfied => write!(f, "already satisfied"),
            MigrationOutcome::Applied { rows_copied } => {
                write!(f, "applied ({} rows preserved)", rows_copied)
            }
        }
    }
}

/// One schema evolution step.
///
/// Steps decide for themselves whether they still need to run by looking at
/// the schema, so running one twice is safe. Nothing is recorded about past
/// runs.
pub trait SchemaStep {
    /// A unique identifier for this step
    fn id(&self) -> &str;

    fn description(&self) -> &str;

    fn apply(&self, conn: &mut Connection) -> DbResult<MigrationOutcome>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub outcomes: Vec<(String, MigrationOutcome)>,
}

impl MigrationReport {
    pub fn applied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, MigrationOutcome::Applied { .. }))
            .count()
    }
}

/// Runs registered steps in order, once per process start.
pub struct MigrationRunner {
    steps: Vec<Box<dyn SchemaStep>>,
}

impl MigrationRunner {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn register_step(&mut self, step: Box<dyn SchemaStep>) {
        self.steps.push(step);
    }

    /// Applies every step. The first failure stops the run and is returned,
    /// so callers can refuse to start against a stale schema.
    pub fn run_all(&self, conn: &mut Connection) -> DbResult<MigrationReport> {
        let mut report = MigrationReport::default();

        for step in &self.steps {
            info!("Running migration step: {} - {}", step.id(), step.description());

            match step.apply(conn) {
                Ok(outcome) => {
                    info!("Migration step {}: {}", step.id(), outcome);
                    report.outcomes.push((step.id().to_string(), outcome));
                }
                Err(e) => {
                    error!("Migration step {} failed: {}", step.id(), e);
                    return Err(e);
                }
            }
        }

        Ok(report)
    }

    /// (id, description) of every registered step
    pub fn list_steps(&self) -> Vec<(String, String)> {
        self.steps
            .iter()
            .map(|s| (s.id().to_string(), s.description().to_string()))
            .collect()
    }
}

impl Default for MigrationRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::error::DbError;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FixedStep {
        id: &'static str,
        result: fn() -> DbResult<MigrationOutcome>,
        calls: Rc<Cell<u32>>,
    }

    impl SchemaStep for FixedStep {
        fn id(&self) -> &str {
            self.id
        }

        fn description(&self) -> &str {
            "test step"
        }

        fn apply(&self, _conn: &mut Connection) -> DbResult<MigrationOutcome> {
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }
    }

    fn step(
        id: &'static str,
        result: fn() -> DbResult<MigrationOutcome>,
    ) -> (Box<dyn SchemaStep>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let step = FixedStep {
            id,
            result,
            calls: calls.clone(),
        };
        (Box::new(step), calls)
    }

    #[test]
    fn test_runs_steps_in_order() {
        let mut conn = Connection::open_in_memory().unwrap();
        let mut runner = MigrationRunner::new();
        let (a, _) = step("a", || Ok(MigrationOutcome::AlreadySatisfied));
        let (b, _) = step("b", || Ok(MigrationOutcome::Applied { rows_copied: 3 }));
        runner.register_step(a);
        runner.register_step(b);

        let report = runner.run_all(&mut conn).unwrap();
        assert_eq!(
            report.outcomes,
            vec![
                ("a".to_string(), MigrationOutcome::AlreadySatisfied),
                ("b".to_string(), MigrationOutcome::Applied { rows_copied: 3 }),
            ]
        );
        assert_eq!(report.applied_count(), 1);
        assert_eq!(
            runner.list_steps(),
            vec![
                ("a".to_string(), "test step".to_string()),
                ("b".to_string(), "test step".to_string()),
            ]
        );
    }

    #[test]
    fn test_stops_at_first_failure() {
        let mut conn = Connection::open_in_memory().unwrap();
        let mut runner = MigrationRunner::new();
        let (a, a_calls) = step("a", || Err(DbError::MigrationFailed("boom".into())));
        let (b, b_calls) = step("b", || Ok(MigrationOutcome::AlreadySatisfied));
        runner.register_step(a);
        runner.register_step(b);

        let err = runner.run_all(&mut conn).unwrap_err();
        assert!(matches!(err, DbError::MigrationFailed(_)));
        assert_eq!(a_calls.get(), 1);
        assert_eq!(b_calls.get(), 0);
    }
}
