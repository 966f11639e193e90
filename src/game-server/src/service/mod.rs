pub mod game_session;
pub mod game_socket;
