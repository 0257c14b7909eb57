pub mod games;

pub use games::{ActiveGames, GameService};
