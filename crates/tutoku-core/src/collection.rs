//! Built-in puzzle library.
//!
//! A small curated set of puzzles spanning the four difficulty tiers, each
//! in the nine-line text format accepted by [`Board`](crate::Board). The
//! advertised tier is the tier the puzzle was curated for; the solver's
//! rater is the authority.

/// A named puzzle with its curated difficulty tier.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleEntry {
    /// Human-readable name.
    pub name: &'static str,
    /// Curated difficulty tier, 1-4.
    pub tier: u8,
    /// Puzzle text: nine lines of nine digits, `0` for empty.
    pub grid: &'static str,
}

/// The built-in puzzles, ordered by tier.
pub const PUZZLES: &[PuzzleEntry] = &[
    PuzzleEntry {
        name: "Classic Easy",
        tier: 1,
        grid: "003020600\n900305001\n001806400\n008102900\n700000008\n\
               006708200\n002609500\n800203009\n005010300",
    },
    PuzzleEntry {
        name: "Easy Beginner",
        tier: 1,
        grid: "200080300\n060070084\n030500209\n000105408\n000000000\n\
               402706000\n301007040\n720040060\n004010003",
    },
    PuzzleEntry {
        name: "Pointing Pairs",
        tier: 2,
        grid: "000030086\n000020040\n340000900\n700600000\n060080030\n\
               000003007\n003000024\n010060000\n850090000",
    },
    PuzzleEntry {
        name: "Naked Pairs",
        tier: 2,
        grid: "100489006\n720000080\n080700025\n000200030\n940030058\n\
               050004000\n360008090\n010000037\n200794001",
    },
    PuzzleEntry {
        name: "X-Wing",
        tier: 3,
        grid: "000600400\n700003600\n000091080\n000000060\n025010340\n\
               000000010\n900007000\n008539070\n042000100",
    },
    PuzzleEntry {
        name: "Y-Wing",
        tier: 3,
        grid: "100007090\n030020008\n009600500\n005300900\n010080002\n\
               600004000\n300000010\n040000007\n007000300",
    },
    PuzzleEntry {
        name: "Skyscraper",
        tier: 4,
        grid: "400000805\n030000000\n000700000\n020000060\n000080400\n\
               000010000\n000603070\n500200000\n104000000",
    },
    PuzzleEntry {
        name: "Arto Inkala 2006",
        tier: 4,
        grid: "003008000\n010030000\n000004700\n070060008\n000000023\n\
               000900600\n500300000\n000080091\n000700040",
    },
];
