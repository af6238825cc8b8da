use std::io::{self, BufRead, Write};

use shakmaty::Position;
use tracing::{info, warn};
use vampirc_uci::{parser, UciMessage};

use crate::config::{EvalTerms, SearchConfig, StalemateAdjust};
use crate::engine::eval::evaluate;
use crate::engine::search::Searcher;
use crate::error::SearchError;
use crate::game::{BoardMove, ChessGame, GameEngine};

pub struct UCI {
    pub game: ChessGame,
    searcher: Searcher,
}

impl UCI {
    pub fn new(config: SearchConfig) -> Self {
        UCI {
            game: ChessGame::new(),
            searcher: Searcher::new(config),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if !self.handle_line(&line, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Handle one command line. Returns `false` on `quit`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, value } => {
                self.apply_setoption(name.trim(), value.as_deref());
            }
            UciMessage::UciNewGame => self.cmd_ucinewgame(),
            UciMessage::Position { startpos, fen, moves } => {
                let fen_str = fen.as_ref().map(|f| f.as_str());
                let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                self.apply_position(startpos, fen_str, &refs);
            }
            UciMessage::Go { search_control, .. } => {
                let depth = search_control
                    .as_ref()
                    .and_then(|sc| sc.depth)
                    .filter(|&d| d > 0);
                self.do_go(depth, out)?;
            }
            UciMessage::Stop => {}
            UciMessage::Quit => return Ok(false),
            UciMessage::Unknown(ref s, _) => match s.split_whitespace().next() {
                Some("d") | Some("display") => self.cmd_display(out)?,
                Some("eval") => self.cmd_eval(out)?,
                _ => warn!(command = %s, "unknown command"),
            },
            _ => {}
        }
        out.flush()?;
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let config = self.searcher.config();
        writeln!(out, "id name {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author {}", env!("CARGO_PKG_NAME"))?;
        writeln!(out)?;
        writeln!(out, "option name Depth type spin default {} min 1 max 10", config.depth)?;
        writeln!(
            out,
            "option name Eval type combo default {} var Material var MaterialAndPosition",
            eval_name(config.eval)
        )?;
        writeln!(
            out,
            "option name RepetitionEval type combo default {} var Material var MaterialAndPosition",
            eval_name(config.repetition_eval)
        )?;
        writeln!(out, "option name MateBonus type spin default {} min 0 max 100000", config.mate_bonus)?;
        writeln!(out, "option name DrawBias type spin default {} min 0 max 10000", config.draw_bias)?;
        writeln!(
            out,
            "option name Stalemate type combo default {} var Off var Bias var Damp",
            stalemate_name(config.stalemate)
        )?;
        writeln!(out, "option name DetectRepetition type check default {}", config.detect_repetition)?;
        writeln!(out, "option name OrderMoves type check default {}", config.order_moves)?;
        writeln!(out, "option name OrderAllNodes type check default {}", config.order_all_nodes)?;
        writeln!(out, "option name MateShortCircuit type check default {}", config.mate_short_circuit)?;
        writeln!(out, "uciok")?;
        Ok(())
    }

    /// Apply `setoption`. Unknown names and unparsable values are ignored.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        let config = self.searcher.config_mut();
        let applied = match opt.as_str() {
            "depth" => match value.parse::<u8>() {
                Ok(d) if d > 0 => {
                    config.depth = d;
                    true
                }
                _ => false,
            },
            "matebonus" => match value.parse::<i32>() {
                Ok(b) if b >= 0 => {
                    config.mate_bonus = b;
                    true
                }
                _ => false,
            },
            "drawbias" => match value.parse::<i32>() {
                Ok(b) if b >= 0 => {
                    config.draw_bias = b;
                    true
                }
                _ => false,
            },
            "eval" => set_if_some(&mut config.eval, parse_eval(value)),
            "repetitioneval" => set_if_some(&mut config.repetition_eval, parse_eval(value)),
            "stalemate" => set_if_some(&mut config.stalemate, parse_stalemate(value)),
            "detectrepetition" => set_if_some(&mut config.detect_repetition, parse_check(value)),
            "ordermoves" => set_if_some(&mut config.order_moves, parse_check(value)),
            "orderallnodes" => set_if_some(&mut config.order_all_nodes, parse_check(value)),
            "mateshortcircuit" => set_if_some(&mut config.mate_short_circuit, parse_check(value)),
            _ => false,
        };
        if !applied {
            warn!(option = %name, value = %value, "ignoring setoption");
        }
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.game = ChessGame::new();
    }

    /// Set up the game from `startpos` or a FEN, then play `move_strs`.
    /// An invalid FEN keeps the current game; an illegal move stops there.
    pub fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[&str]) {
        if startpos {
            self.game = ChessGame::new();
        } else if let Some(fen_str) = fen {
            match ChessGame::from_fen(fen_str) {
                Ok(game) => self.game = game,
                Err(e) => {
                    warn!(error = %e, "rejecting position");
                    return;
                }
            }
        }

        for &s in move_strs {
            if let Err(e) = self.game.play_uci(s) {
                warn!(error = %e, "stopping at illegal move");
                break;
            }
        }
    }

    /// Search the current game and print `info` and `bestmove`.
    fn do_go<W: Write>(&mut self, depth: Option<u8>, out: &mut W) -> io::Result<()> {
        let depth = depth.unwrap_or(self.searcher.config().depth);
        match self.searcher.select_move_to_depth(&mut self.game, depth) {
            Ok(outcome) => {
                // UCI scores are from the side to move's point of view
                let cp = self.game.side_to_move().sign() * outcome.score;
                writeln!(
                    out,
                    "info depth {} score cp {} nodes {} time {}",
                    outcome.depth,
                    cp,
                    outcome.stats.nodes,
                    outcome.stats.elapsed.as_millis()
                )?;
                writeln!(out, "bestmove {}", outcome.best_move.to_uci_string())?;
            }
            Err(SearchError::NoLegalMoves) => {
                info!("no legal moves, game is over");
                writeln!(out, "bestmove 0000")?;
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                writeln!(out, "bestmove 0000")?;
            }
        }
        Ok(())
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{:?}", self.game.position().board())?;
        writeln!(out, "Side to move: {}", self.game.side_to_move())?;
        writeln!(out, "Hash: {:016x}", self.game.hash())
    }

    fn cmd_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let config = self.searcher.config();
        let score = evaluate(&self.game, config.eval);
        writeln!(out, "Evaluation: {} cp", score)?;
        writeln!(out, "(Positive = White advantage)")
    }
}

fn set_if_some<T>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}

fn eval_name(terms: EvalTerms) -> &'static str {
    match terms {
        EvalTerms::Material => "Material",
        EvalTerms::MaterialAndPosition => "MaterialAndPosition",
    }
}

fn stalemate_name(adjust: StalemateAdjust) -> &'static str {
    match adjust {
        StalemateAdjust::Off => "Off",
        StalemateAdjust::Bias => "Bias",
        StalemateAdjust::Damp => "Damp",
    }
}

fn parse_eval(value: &str) -> Option<EvalTerms> {
    match value.to_lowercase().replace([' ', '_'], "").as_str() {
        "material" => Some(EvalTerms::Material),
        "materialandposition" => Some(EvalTerms::MaterialAndPosition),
        _ => None,
    }
}

fn parse_stalemate(value: &str) -> Option<StalemateAdjust> {
    match value.to_lowercase().as_str() {
        "off" => Some(StalemateAdjust::Off),
        "bias" => Some(StalemateAdjust::Bias),
        "damp" => Some(StalemateAdjust::Damp),
        _ => None,
    }
}

fn parse_check(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

impl Default for UCI {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
