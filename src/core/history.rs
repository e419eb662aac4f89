//! Transition history.
//!
//! Every successful state change is kept as a timestamped record so a
//! caller can reconstruct the path a machine took.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Record a transition happening now.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// `record` returns a new history and leaves the receiver untouched. An
/// owner that keeps its history across many transitions appends in place
/// with `push`.
///
/// # Example
///
/// ```rust
/// use patterncraft::connection::ConnectionState;
/// use patterncraft::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(ConnectionState::Closed, ConnectionState::Open))
///     .record(StateTransition::now(ConnectionState::Open, ConnectionState::Closed));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[1], &ConnectionState::Open);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed in order: the first source, then every target.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Phase {
        Draft,
        Review,
        Published,
    }

    impl State for Phase {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::Review => "Review",
                Self::Published => "Published",
            }
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(StateTransition::now(Phase::Draft, Phase::Review));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(StateTransition::now(Phase::Draft, Phase::Review))
            .record(StateTransition::now(Phase::Review, Phase::Published));

        let path = history.get_path();
        assert_eq!(path, vec![&Phase::Draft, &Phase::Review, &Phase::Published]);
        assert_eq!(history.last().unwrap().to, Phase::Published);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = StateHistory::new();
        history.push(StateTransition::now(Phase::Draft, Phase::Review));
        history.push(StateTransition::now(Phase::Review, Phase::Published));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![&Phase::Draft, &Phase::Review, &Phase::Published]
        );
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(StateTransition::now(Phase::Draft, Phase::Review));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.get_path(), history.get_path());
    }
}
