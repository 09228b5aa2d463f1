#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// B3/S23: survive on 2 or 3 live neighbors, birth on exactly 3.
    #[must_use]
    pub fn next_state(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Alive => '0',
            Cell::Dead => ' ',
        }
    }
}
