//! Built-in fallback corpus
//!
//! Used when a corpus file cannot be read. Short words are kept here as they were
//! collected; the dictionary drops anything under four letters on load.

/// Minimal word list for offline use
pub const FALLBACK_WORDS: &[&str] = &[
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR",
    "OUT", "DAY", "GET", "HAS", "HIM", "HIS", "HOW", "MAN", "NEW", "NOW", "OLD", "SEE", "TWO",
    "WAY", "WHO", "BOY", "DID", "ITS", "LET", "PUT", "SAY", "SHE", "TOO", "USE", "ABOUT",
    "AFTER", "AGAIN", "AGAINST", "ALONG", "AMONG", "ANOTHER", "ANSWER", "AROUND", "BEFORE",
    "BEHIND", "BETWEEN", "BETTER", "BRING", "BUILD", "CALLED", "CAME", "CARRY", "CHANGE",
    "COME", "COULD", "EACH", "EVEN", "EVERY", "FIND", "FIRST", "FOUND", "FROM", "GIVE", "GOES",
    "GOOD", "GREAT", "HAD", "HAVE", "HERE", "HIGH", "INTO", "JUST", "KNOW", "LARGE", "LITTLE",
    "LONG", "LOOK", "MADE", "MAKE", "MANY", "MIGHT", "MORE", "MOST", "MOVE", "MUCH", "MUST",
    "NAME", "NEAR", "NEVER", "NEXT", "ONLY", "OVER", "PART", "PEOPLE", "PLACE", "RIGHT", "SAID",
    "SAME", "SEEM", "SHOULD", "SMALL", "SOUND", "STILL", "SUCH", "TAKE", "TELL", "THAN", "THAT",
    "THEIR", "THEM", "THEN", "THERE", "THEY", "THING", "THINK", "THIS", "THOSE", "THROUGH",
    "TIME", "UNDER", "VERY", "WANT", "WELL", "WENT", "WERE", "WHAT", "WHEN", "WHERE", "WHICH",
    "WHILE", "WILL", "WITH", "WORD", "WORK", "WORLD", "WOULD", "YEAR", "YOUR", "ALIEN", "ALINE",
    "ALOIN", "ANILE", "ANOLE", "ANTLE", "ELAIN", "ELOIN", "ENTIA", "INLET", "LATEN", "LEANT",
    "LENTO", "LIANE", "LIENT", "LINEN", "LITEN", "LOAN", "NAIL", "NEAT", "NITE", "NOEL", "NOIL",
    "OLEIN", "TALON", "TINE", "TOIL", "TONE",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_words_are_uppercase() {
        for &word in FALLBACK_WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn fallback_has_puzzle_words() {
        assert!(FALLBACK_WORDS.contains(&"INLET"));
        assert!(FALLBACK_WORDS.contains(&"TONE"));
    }
}
