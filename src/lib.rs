pub mod board;
pub mod evaluate;
pub mod game;
pub mod geometry;
pub mod move_orderer;
pub mod moves;
pub mod searcher;
pub mod suggest;

pub use geometry::is_win;
pub use searcher::search;
pub use suggest::suggest_moves as suggest;
