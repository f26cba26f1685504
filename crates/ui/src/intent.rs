/// A user command typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Start,
    /// 1-based option number.
    Select(usize),
    Next,
    Restart,
    Quit,
    Help,
}

impl Intent {
    /// Parse one input line. Blank or unknown input yields `None`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let input = line.trim().to_lowercase();
        match input.as_str() {
            "s" | "start" => Some(Self::Start),
            "n" | "next" => Some(Self::Next),
            "r" | "restart" | "play again" => Some(Self::Restart),
            "q" | "quit" | "exit" => Some(Self::Quit),
            "h" | "help" | "?" => Some(Self::Help),
            other => other
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Self::Select),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_case_insensitively() {
        assert_eq!(Intent::parse("S"), Some(Intent::Start));
        assert_eq!(Intent::parse(" next "), Some(Intent::Next));
        assert_eq!(Intent::parse("Play Again"), Some(Intent::Restart));
        assert_eq!(Intent::parse("q"), Some(Intent::Quit));
        assert_eq!(Intent::parse("?"), Some(Intent::Help));
    }

    #[test]
    fn numbers_select_options() {
        assert_eq!(Intent::parse("3"), Some(Intent::Select(3)));
        assert_eq!(Intent::parse("0"), None);
        assert_eq!(Intent::parse("-1"), None);
    }

    #[test]
    fn blank_and_unknown_are_none() {
        assert_eq!(Intent::parse(""), None);
        assert_eq!(Intent::parse("maybe"), None);
    }
}
