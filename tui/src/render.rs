use crossterm::style::Color;

use snake_engine::Cell;

/// One screen cell ready for the terminal: a character plus an optional
/// background color. All color decisions live here; the engine only ever
/// hands out abstract cell states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub ch: char,
    pub bg: Option<Color>,
}

fn plain(ch: char) -> Token {
    Token { ch, bg: None }
}

fn colored(ch: char, bg: Color) -> Token {
    Token { ch, bg: Some(bg) }
}

pub fn token_for(cell: Cell, game_over: bool) -> Token {
    let snake_bg = if game_over {
        Color::DarkRed
    } else {
        Color::DarkGreen
    };

    match cell {
        Cell::Empty => plain(' '),
        Cell::Obstacle => plain('O'),
        Cell::WallHorizontal => plain('-'),
        Cell::WallVertical => plain('|'),
        Cell::Food(1) => colored('@', Color::DarkBlue),
        Cell::Food(2) => colored('@', Color::DarkMagenta),
        Cell::Food(_) => colored('@', Color::DarkYellow),
        Cell::SnakeHead => colored('#', snake_bg),
        Cell::SnakeBody => colored('*', snake_bg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_values_have_distinct_colors() {
        let one = token_for(Cell::Food(1), false);
        let two = token_for(Cell::Food(2), false);
        let three = token_for(Cell::Food(3), false);
        assert_eq!(one.ch, '@');
        assert_ne!(one.bg, two.bg);
        assert_ne!(two.bg, three.bg);
        assert_ne!(one.bg, three.bg);
    }

    #[test]
    fn test_snake_turns_red_on_game_over() {
        assert_eq!(token_for(Cell::SnakeHead, false).bg, Some(Color::DarkGreen));
        assert_eq!(token_for(Cell::SnakeHead, true).bg, Some(Color::DarkRed));
        assert_eq!(token_for(Cell::SnakeBody, true).bg, Some(Color::DarkRed));
    }

    #[test]
    fn test_structure_cells_are_uncolored() {
        assert_eq!(token_for(Cell::Empty, false), Token { ch: ' ', bg: None });
        assert_eq!(token_for(Cell::WallVertical, true).bg, None);
        assert_eq!(token_for(Cell::Obstacle, false).ch, 'O');
    }
}
