use core::fmt;

use crate::error::MatchError;

///
/// One key of a DTMF keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    Pound,
    Star,
    A,
    B,
    C,
    D,
}

impl Symbol {
    ///
    /// The whole alphabet, in canonical order `0-9 # * A B C D`
    pub const ALL: [Symbol; 16] = [
        Symbol::D0,
        Symbol::D1,
        Symbol::D2,
        Symbol::D3,
        Symbol::D4,
        Symbol::D5,
        Symbol::D6,
        Symbol::D7,
        Symbol::D8,
        Symbol::D9,
        Symbol::Pound,
        Symbol::Star,
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
    ];

    pub fn as_char(self) -> char {
        match self {
            Symbol::D0 => '0',
            Symbol::D1 => '1',
            Symbol::D2 => '2',
            Symbol::D3 => '3',
            Symbol::D4 => '4',
            Symbol::D5 => '5',
            Symbol::D6 => '6',
            Symbol::D7 => '7',
            Symbol::D8 => '8',
            Symbol::D9 => '9',
            Symbol::Pound => '#',
            Symbol::Star => '*',
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::C => 'C',
            Symbol::D => 'D',
        }
    }

    ///
    /// The byte fed to the pattern engine (every symbol is ASCII)
    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    pub fn from_char(c: char) -> Option<Self> {
        let symbol = match c {
            '0' => Symbol::D0,
            '1' => Symbol::D1,
            '2' => Symbol::D2,
            '3' => Symbol::D3,
            '4' => Symbol::D4,
            '5' => Symbol::D5,
            '6' => Symbol::D6,
            '7' => Symbol::D7,
            '8' => Symbol::D8,
            '9' => Symbol::D9,
            '#' => Symbol::Pound,
            '*' => Symbol::Star,
            'A' => Symbol::A,
            'B' => Symbol::B,
            'C' => Symbol::C,
            'D' => Symbol::D,
            _ => return None,
        };
        Some(symbol)
    }

    ///
    /// Position of the symbol in `Symbol::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    ///
    /// Name used in an utterance interpretation : `star` and `pound` are spelled out
    pub fn dtmf_name(self) -> &'static str {
        match self {
            Symbol::Star => "star",
            Symbol::Pound => "pound",
            Symbol::D0 => "0",
            Symbol::D1 => "1",
            Symbol::D2 => "2",
            Symbol::D3 => "3",
            Symbol::D4 => "4",
            Symbol::D5 => "5",
            Symbol::D6 => "6",
            Symbol::D7 => "7",
            Symbol::D8 => "8",
            Symbol::D9 => "9",
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
        }
    }

    ///
    /// Every symbol exactly once, starting with the one following `last` and wrapping around.
    /// Without `last` the scan starts at the beginning of the alphabet.
    pub fn cycle_after(last: Option<Symbol>) -> impl Iterator<Item = Symbol> {
        let start = last.map_or(0, |s| s.index() + 1);
        (0..Self::ALL.len()).map(move |i| Self::ALL[(start + i) % Self::ALL.len()])
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

///
/// Parse a buffer such as `"1234#"` into symbols
pub fn parse_buffer(text: &str) -> Result<Vec<Symbol>, MatchError> {
    text.chars()
        .enumerate()
        .map(|(offset, c)| Symbol::from_char(c).ok_or(MatchError::InvalidSymbol { found: c, offset }))
        .collect()
}

///
/// Bytes handed to the pattern engine for a buffer
pub fn to_bytes(buffer: &[Symbol]) -> Vec<u8> {
    buffer.iter().map(|s| s.as_byte()).collect()
}

///
/// Render a buffer back to its textual form
pub fn to_text(buffer: &[Symbol]) -> String {
    buffer.iter().map(|s| s.as_char()).collect()
}

///
/// Default interpretation of an utterance : `"*9"` gives `"dtmf-star dtmf-9"`
pub fn interpret(buffer: &[Symbol]) -> String {
    buffer
        .iter()
        .map(|s| format!("dtmf-{}", s.dtmf_name()))
        .collect::<Vec<_>>()
        .join(" ")
}
