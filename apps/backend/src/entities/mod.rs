pub mod games;
pub mod guesses;
pub mod secret_words;
pub mod valid_words;

pub use games::Entity as Games;
pub use games::Model as Game;
pub use guesses::Entity as Guesses;
pub use guesses::Model as Guess;
pub use secret_words::Entity as SecretWords;
pub use secret_words::Model as SecretWord;
pub use valid_words::Entity as ValidWords;
pub use valid_words::Model as ValidWord;
