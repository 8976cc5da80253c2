mod matrix;
mod player;

pub use self::matrix::MatrixGame;
pub use self::player::Player;
