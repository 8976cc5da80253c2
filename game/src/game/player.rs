use std::ops::Neg;

/// The row player picks a row and maximizes the payoff; the column player
/// picks a column and minimizes it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Player {
    Row,
    Column,
}

impl Neg for Player {
    type Output = Player;
    fn neg(self) -> Self::Output {
        match self {
            Player::Row => Player::Column,
            Player::Column => Player::Row,
        }
    }
}
