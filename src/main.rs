use std::io;
use xiangqi::display_format::DisplayFormat;
use xiangqi::game::Game;
use xiangqi::location::Move;

fn main() {
    let mut game = Game::opening();
    let format = DisplayFormat::pretty();

    loop {
        println!("{}", game.display(format));

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return;
        }
        let input = input.trim().to_ascii_lowercase();

        match input.as_str() {
            "" => continue,
            "quit" => return,
            "reset" => {
                game = Game::opening();
                continue;
            }
            _ => {}
        }

        let Ok(mv) = input.parse::<Move>() else {
            println!("expected a move like '1,5 1,4', or 'reset' or 'quit'");
            continue;
        };

        let result = game.make_move(mv.from, mv.to);
        if !result.legal {
            println!("illegal move {mv}");
            continue;
        }

        if result.game_ended
            && let Some(winner) = result.winner
        {
            println!("{}", game.display(format));
            println!("{winner} won by capturing the general");
            return;
        }
    }
}
