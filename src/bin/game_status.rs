use std::env;
use std::process::ExitCode;

use chess_rules::board::{parse_move_request, GameSession};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = GameSession::new();
    for text in args.iter().skip(1) {
        let played = parse_move_request(text)
            .map_err(|e| e.to_string())
            .and_then(|(from, to)| game.request_move(from, to).map_err(|e| e.to_string()));
        if let Err(e) = played {
            eprintln!("{text}: {e}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.legal_moves();
    println!("side_to_move: {}", game.side_to_move());
    println!("status: {}", game.status());
    println!("legal_moves: {}", legal_moves.len());
    println!("notation: {}", game.notation().join(" "));
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
