//! Exclusive-access session handle for concurrent hosts.

use std::sync::Arc;

use parking_lot::Mutex;

use super::GameSession;

/// A cloneable handle serializing all access to one `GameSession`.
///
/// The session's generate/execute handshake relies on transient selection
/// state, so callers must not interleave calls from different logical turn
/// sequences; this handle enforces one session-wide lock and exposes the
/// session only through a closure holding it.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    /// Wrap a fresh game.
    #[must_use]
    pub fn new() -> Self {
        Self::from_session(GameSession::new())
    }

    /// Wrap an existing session.
    #[must_use]
    pub fn from_session(session: GameSession) -> Self {
        SharedSession {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        let mut session = self.inner.lock();
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Square};
    use crate::session::MoveOutcome;

    #[test]
    fn test_shared_handshake_is_atomic_per_closure() {
        let shared = SharedSession::new();

        let outcome = shared.with(|session| {
            let moves = session.generate_moves(Square(6, 4));
            assert!(!moves.is_empty());
            session.execute_move(Square(4, 4))
        });

        assert!(matches!(outcome, Ok(MoveOutcome::Played(_))));
        assert_eq!(shared.with(|s| s.active_player()), Color::Black);
    }

    #[test]
    fn test_clones_share_one_game() {
        let shared = SharedSession::new();
        let other = shared.clone();

        shared.with(|session| {
            session.generate_moves(Square(6, 0));
            session.execute_move(Square(5, 0)).unwrap();
        });

        assert_eq!(other.with(|s| s.active_player()), Color::Black);
    }
}
