pub mod db;
pub mod wordle;

pub use db::{DbKind, DbProfile};
pub use wordle::WordleConfig;
