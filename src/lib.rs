//! Crate root module declarations for the MiniChess rules engine.
//!
//! Exposes the game state model, per-piece geometry, move generation and
//! legality checks, simple move-choosing engines and snapshot utilities so
//! binaries, tests and collaborating tools can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
    pub mod game_status;
    pub mod move_history;
}

pub mod moves {
    pub mod king_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod grid_generator;
    pub mod grid_parser;
    pub mod render_game_state;
    pub mod state_key;
}
