use tic_tac_toe::{
    Board,
    Marker,
    SIZE,
};

const ROW_LABELS: [&str; 3] = ["0", "1", "2"];

/// An ascii table
#[derive(Debug)]
pub struct AsciiTable<'a> {
    data: Vec<Vec<&'a str>>,

    max_cell_widths: Vec<usize>,
}

impl<'a> AsciiTable<'a> {
    /// Make a new table
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![vec![""; width]; height],
            max_cell_widths: vec![0; width],
        }
    }

    /// Set the value of the given cell.
    ///
    /// Indexing starts at 0. It starts at the top left corner and ends at the bottom right.
    pub fn set_cell(&mut self, x: usize, y: usize, data: &'a str) {
        self.data[y][x] = data;
        self.max_cell_widths[x] = std::cmp::max(self.max_cell_widths[x], data.len());
    }

    fn fmt_row_border(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+")?;
        for max_cell_width in self.max_cell_widths.iter() {
            for _ in 0..*max_cell_width {
                write!(f, "-")?;
            }
            write!(f, "+")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl AsciiTable<'static> {
    /// Make a table of a board, with row and column numbers along the edges.
    pub fn from_board(board: Board) -> Self {
        let size = usize::from(SIZE);
        let mut table = Self::new(size + 1, size + 1);
        for (i, label) in ROW_LABELS.into_iter().enumerate() {
            table.set_cell(i + 1, 0, label);
            table.set_cell(0, i + 1, label);
        }

        for (mv, marker) in board.iter() {
            let tile = match marker {
                Some(Marker::Player) => " X ",
                Some(Marker::Ai) => " O ",
                None => "   ",
            };
            table.set_cell(usize::from(mv.col()) + 1, usize::from(mv.row()) + 1, tile);
        }

        table
    }
}

impl std::fmt::Display for AsciiTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.data.iter() {
            self.fmt_row_border(f)?;

            for (cell, max_cell_width) in row.iter().zip(self.max_cell_widths.iter()) {
                let padding = max_cell_width.saturating_sub(cell.len());

                write!(f, "|")?;

                for _ in 0..padding / 2 {
                    write!(f, " ")?;
                }

                write!(f, "{}", cell)?;

                for _ in 0..((padding / 2) + padding % 2) {
                    write!(f, " ")?;
                }
            }
            writeln!(f, "|")?;
        }
        self.fmt_row_border(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn board_table() {
        let board: Board = "X--/-O-/--X".parse().expect("invalid board");
        let expected = "\
+-+---+---+---+
| | 0 | 1 | 2 |
+-+---+---+---+
|0| X |   |   |
+-+---+---+---+
|1|   | O |   |
+-+---+---+---+
|2|   |   | X |
+-+---+---+---+
";
        assert_eq!(AsciiTable::from_board(board).to_string(), expected);
    }

    #[test]
    fn pads_to_widest_cell() {
        let mut table = AsciiTable::new(2, 1);
        table.set_cell(0, 0, "a");
        table.set_cell(1, 0, "bcd");
        assert_eq!(table.to_string(), "+-+---+\n|a|bcd|\n+-+---+\n");

        table.set_cell(0, 0, "");
        assert_eq!(table.to_string(), "+-+---+\n| |bcd|\n+-+---+\n");
    }
}
