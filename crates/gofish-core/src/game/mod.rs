pub mod engine;
pub mod event;
pub mod policy;

pub use engine::Game;
pub use event::{GameEvent, GameObserver, NullObserver, PlayerSnapshot};
pub use policy::{DecisionPolicy, OpponentView, TurnView, ask_candidates, needed_suits};
