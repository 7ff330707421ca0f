use std::env;
use std::process::ExitCode;

use chess_rules::board::{PieceKind, Square};
use chess_rules::game::{Game, PlayOutcome};

/// Split a coordinate move such as `e2e4` or `e7e8q`.
fn parse_move(text: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    let from = text.get(0..2)?.parse().ok()?;
    let to = text.get(2..4)?.parse().ok()?;
    let promotion = match text.get(4..) {
        None | Some("") => None,
        Some(rest) => {
            let mut chars = rest.chars();
            let kind = PieceKind::from_char(chars.next()?)?;
            if chars.next().is_some() {
                return None;
            }
            Some(kind)
        }
    };
    Some((from, to, promotion))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        let Some((from, to, promotion)) = parse_move(text) else {
            eprintln!("malformed move: {text}");
            return ExitCode::FAILURE;
        };
        let result = game.play(from, to).and_then(|outcome| match outcome {
            PlayOutcome::PromotionRequired(_) => {
                game.promote(promotion.unwrap_or(PieceKind::Queen))
            }
            moved => Ok(moved),
        });
        if let Err(err) = result {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let status = match game.status() {
        Ok(status) => status,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let legal_moves = game
        .board()
        .all_legal_moves(game.side_to_move(), game.last_move());

    println!("{}", game.board());
    println!("side_to_move: {}", game.side_to_move());
    println!("status: {status}");
    println!(
        "legal_moves: {}",
        legal_moves.iter().map(|(_, to)| to.len()).sum::<usize>()
    );
    for (from, targets) in legal_moves {
        for to in targets {
            println!("{from}{to}");
        }
    }
    ExitCode::SUCCESS
}
