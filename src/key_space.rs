//! Character classes and the rules for turning them into a key space.

pub const DIGITS: &str = "0123456789";
pub const LOWER_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The printable ASCII punctuation, used as the symbol class unless replaced.
pub const DEFAULT_SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easily mistaken for one another (`0`/`O`, `1`/`l`, `9`/`q`, ...).
pub const SIMILAR_LOOKING: &[char] = &['0', 'o', 'O', '1', 'I', 'l', '6', 'b', '9', 'g', 'q'];

/// Punctuation that is hard to tell apart, or awkward to read back aloud.
pub const AMBIGUOUS_SYMBOLS: &[char] = &[
    '"', '\'', '(', ')', ',', '.', ':', ';', '[', ']', '{', '}', '`', '|',
];

/// Which character classes make it into the key space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classes {
    pub numeric: bool,
    pub lower_alphabet: bool,
    pub upper_alphabet: bool,
    pub symbols: bool,
    pub trim_similar_looking: bool,
}

impl Default for Classes {
    fn default() -> Classes {
        Classes {
            numeric: true,
            lower_alphabet: true,
            upper_alphabet: true,
            symbols: true,
            trim_similar_looking: false,
        }
    }
}

/// Turn arbitrary user input into a symbol set.
///
/// Characters are deduplicated, keeping the first occurrence, and anything in `0-9`, `A-Z` or
/// `a-z` is dropped: those belong to the dedicated classes and must not sneak in through the
/// symbol set. Everything else, including non-ASCII characters, is kept as-is.
pub fn sanitize_symbols(input: &str) -> Vec<char> {
    let mut symbols: Vec<char> = Vec::new();
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || symbols.contains(&ch) {
            continue;
        }
        symbols.push(ch);
    }
    symbols
}

/// Build the key space for the given classes.
///
/// The classes are concatenated in a fixed order (digits, lowercase, uppercase, symbols). When
/// trimming is requested, every similar-looking or ambiguous character is removed afterwards,
/// regardless of which class it came from.
pub fn derive(classes: &Classes, symbols: &[char]) -> Vec<char> {
    let mut key_space = Vec::new();
    if classes.numeric {
        key_space.extend(DIGITS.chars());
    }
    if classes.lower_alphabet {
        key_space.extend(LOWER_ALPHABET.chars());
    }
    if classes.upper_alphabet {
        key_space.extend(UPPER_ALPHABET.chars());
    }
    if classes.symbols {
        key_space.extend_from_slice(symbols);
    }

    if classes.trim_similar_looking {
        key_space.retain(|ch| !is_similar_looking(*ch));
    }
    key_space
}

fn is_similar_looking(ch: char) -> bool {
    SIMILAR_LOOKING.contains(&ch) || AMBIGUOUS_SYMBOLS.contains(&ch)
}
