use std::io::{self, BufRead};
use std::time::Duration;

use crate::board::cozy::Position;
use crate::search::driver::{best_move, DEFAULT_MOVETIME};
use crate::search::minimax::{Searcher, DEFAULT_DEPTH};

pub struct UciEngine {
    pos: Position,
    depth: u32,
    movetime: Duration,
}

impl Default for UciEngine {
    fn default() -> Self {
        Self { pos: Position::startpos(), depth: DEFAULT_DEPTH, movetime: DEFAULT_MOVETIME }
    }
}

impl UciEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(depth: u32, movetime: Duration) -> Self {
        Self { pos: Position::startpos(), depth, movetime }
    }

    fn cmd_uci(&self) {
        println!("id name Quasar");
        println!("id author Quasar team");
        println!("uciok");
    }

    fn cmd_isready(&self) {
        println!("readyok");
    }

    fn cmd_ucinewgame(&mut self) {
        self.pos = Position::startpos();
    }

    fn cmd_position(&mut self, args: &str) {
        // Supports: 'position startpos [moves ...]' and 'position fen <fen> [moves ...]'
        let mut tokens = args.split_whitespace();
        let tail = match tokens.next() {
            Some("startpos") => {
                self.pos = Position::startpos();
                tokens.next()
            }
            Some("fen") => {
                let fen_fields: Vec<&str> = tokens.by_ref().take(6).collect();
                let fen = fen_fields.join(" ");
                match Position::from_fen(&fen) {
                    Ok(p) => self.pos = p,
                    Err(e) => {
                        log::warn!("position rejected: {e}");
                        return;
                    }
                }
                tokens.next()
            }
            _ => return,
        };
        if tail == Some("moves") {
            for mv in tokens {
                if let Err(e) = self.pos.make_move_uci(mv) {
                    log::warn!("move rejected: {e}");
                    break;
                }
            }
        }
    }

    fn cmd_go(&mut self, args: &str) {
        let mut movetime = self.movetime;
        let mut depth: Option<u32> = None;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            match tok {
                "movetime" => {
                    if let Some(t) = tokens.next().and_then(|s| s.parse::<u64>().ok()) {
                        movetime = Duration::from_millis(t);
                    }
                }
                "depth" => {
                    let d = tokens.next().and_then(|s| s.parse::<u32>().ok());
                    depth = Some(d.unwrap_or(self.depth));
                }
                _ => {}
            }
        }
        let res = match depth {
            Some(d) => {
                let mut searcher = Searcher::default();
                searcher.search_root(self.pos.board(), d.max(1))
            }
            None => best_move(self.pos.board(), movetime),
        };
        match res.bestmove {
            Some(m) => println!("bestmove {}", m),
            None => println!("bestmove 0000"),
        }
    }

    pub fn run_loop(&mut self) {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(s) => s.trim().to_string(),
                Err(_) => break,
            };
            if line.is_empty() { continue; }
            if line == "uci" { self.cmd_uci(); continue; }
            if line == "isready" { self.cmd_isready(); continue; }
            if line == "ucinewgame" { self.cmd_ucinewgame(); continue; }
            if line == "quit" { break; }
            if let Some(rest) = line.strip_prefix("position ") { self.cmd_position(rest); continue; }
            if line == "go" { self.cmd_go(""); continue; }
            if let Some(rest) = line.strip_prefix("go ") { self.cmd_go(rest); continue; }
        }
    }
}
