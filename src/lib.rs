pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod game;
pub mod uci;

pub use config::{EvalTerms, SearchConfig, StalemateAdjust};
pub use engine::eval::evaluate;
pub use engine::search::{SearchOutcome, Searcher};
pub use error::{ConfigError, GameError, SearchError};
pub use game::{ChessGame, GameEngine};
pub use shakmaty;
pub use uci::UCI;
