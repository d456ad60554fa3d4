//! Theme classification
//!
//! Maps game idea text to a fixed record of theme flags. A theme is detected
//! when the lower-cased text contains any of its keywords as a substring, so
//! "nightmares" counts as horror and "season" counts as ocean.
//!
//! ```text
//! "A horror game where you can control time and solve puzzles in dreams"
//!   horror ✓  fantasy ·  sci-fi ·  dream ✓  time ✓  puzzle ✓  ocean ·
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A recognized theme category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Horror,
    Fantasy,
    SciFi,
    Dream,
    Time,
    Puzzle,
    Ocean,
}

impl Theme {
    /// All themes, in classification order
    pub const ALL: [Theme; 7] = [
        Theme::Horror,
        Theme::Fantasy,
        Theme::SciFi,
        Theme::Dream,
        Theme::Time,
        Theme::Puzzle,
        Theme::Ocean,
    ];

    /// Keywords that switch this theme on
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Theme::Horror => &["horror", "scary", "nightmare"],
            Theme::Fantasy => &["fantasy", "magic", "medieval"],
            Theme::SciFi => &["sci-fi", "space", "futuristic"],
            Theme::Dream => &["dream", "surreal", "lucid"],
            Theme::Time => &["time", "temporal", "rewind"],
            Theme::Puzzle => &["puzzle", "solve", "challenge"],
            Theme::Ocean => &["ocean", "underwater", "sea"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Horror => "horror",
            Theme::Fantasy => "fantasy",
            Theme::SciFi => "sci-fi",
            Theme::Dream => "dream",
            Theme::Time => "time",
            Theme::Puzzle => "puzzle",
            Theme::Ocean => "ocean",
        }
    }

    /// Check a lower-cased text against this theme's keywords
    fn matches(self, lowered: &str) -> bool {
        self.keywords().iter().any(|kw| lowered.contains(kw))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Which themes were detected in a game idea
///
/// Flags are independent: any combination may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeFlags {
    pub horror: bool,
    pub fantasy: bool,
    pub sci_fi: bool,
    pub dream: bool,
    pub time: bool,
    pub puzzle: bool,
    pub ocean: bool,
}

impl ThemeFlags {
    /// Read the flag for a theme
    pub fn get(&self, theme: Theme) -> bool {
        match theme {
            Theme::Horror => self.horror,
            Theme::Fantasy => self.fantasy,
            Theme::SciFi => self.sci_fi,
            Theme::Dream => self.dream,
            Theme::Time => self.time,
            Theme::Puzzle => self.puzzle,
            Theme::Ocean => self.ocean,
        }
    }

    fn set(&mut self, theme: Theme, value: bool) {
        let slot = match theme {
            Theme::Horror => &mut self.horror,
            Theme::Fantasy => &mut self.fantasy,
            Theme::SciFi => &mut self.sci_fi,
            Theme::Dream => &mut self.dream,
            Theme::Time => &mut self.time,
            Theme::Puzzle => &mut self.puzzle,
            Theme::Ocean => &mut self.ocean,
        };
        *slot = value;
    }

    /// Detected themes in classification order
    pub fn detected(&self) -> Vec<Theme> {
        Theme::ALL.into_iter().filter(|t| self.get(*t)).collect()
    }

    /// True when no theme was detected
    pub fn none(&self) -> bool {
        !Theme::ALL.iter().any(|t| self.get(*t))
    }
}

/// Classify game idea text into theme flags.
///
/// Pure: the same text always yields the same flags.
pub fn classify(text: &str) -> ThemeFlags {
    let lowered = text.to_lowercase();
    let mut flags = ThemeFlags::default();
    for theme in Theme::ALL {
        flags.set(theme, theme.matches(&lowered));
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mixed_idea() {
        let flags = classify("A horror game where you can control time and solve puzzles in dreams");
        assert!(flags.horror);
        assert!(flags.time);
        assert!(flags.puzzle);
        assert!(flags.dream);
        assert!(!flags.fantasy);
        assert!(!flags.sci_fi);
        assert!(!flags.ocean);
    }

    #[test]
    fn test_classify_fantasy_only() {
        let flags = classify("An epic fantasy adventure with magic and dragons");
        assert_eq!(flags.detected(), vec![Theme::Fantasy]);
    }

    #[test]
    fn test_classify_no_keywords() {
        let flags = classify("a quiet walk in the park");
        assert!(flags.none());
        assert_eq!(flags, ThemeFlags::default());
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert!(classify("NIGHTMARE Fuel").horror);
        assert!(classify("Sci-Fi shooter").sci_fi);
        assert!(classify("MeDiEvAl siege").fantasy);
    }

    #[test]
    fn test_substring_matching() {
        // Keywords match inside longer words
        assert!(classify("a research station").ocean);
        assert!(classify("sometimes").time);
        assert!(classify("nightmares").horror);
    }

    #[test]
    fn test_every_keyword_sets_its_flag() {
        for theme in Theme::ALL {
            for kw in theme.keywords() {
                let flags = classify(kw);
                assert!(flags.get(theme), "{} should set {}", kw, theme);
            }
        }
    }

    #[test]
    fn test_empty_text() {
        assert!(classify("").none());
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::SciFi.to_string(), "sci-fi");
        assert_eq!(Theme::Ocean.to_string(), "ocean");
        assert_eq!(format!("{:<7}|", Theme::Time), "time   |");
    }
}
