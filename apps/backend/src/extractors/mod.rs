pub mod current_user;
pub mod game_id;
pub mod validated_json;

pub use current_user::CurrentUser;
pub use game_id::GameId;
pub use validated_json::ValidatedJson;
