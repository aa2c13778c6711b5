//! Line tokenizer.

/// Splits `line` on any of `delimiters`.
///
/// Runs of delimiters collapse, so no empty token is ever produced.
pub fn split<'a>(line: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    line.split(|c| delimiters.contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Splits `line` on whitespace, the delimiter of DIMACS files.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("a 1 2 3", &[' ']), ["a", "1", "2", "3"]);
        assert_eq!(split("  a   1  ", &[' ']), ["a", "1"]);
        assert_eq!(split("a,1;;2", &[',', ';']), ["a", "1", "2"]);
        assert!(split("", &[' ']).is_empty());
        assert!(split("   ", &[' ']).is_empty());
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("p DIMACS 3 2"), ["p", "DIMACS", "3", "2"]);
        assert_eq!(tokenize("a\t1 \t 2   5\r"), ["a", "1", "2", "5"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t ").is_empty());
    }
}
