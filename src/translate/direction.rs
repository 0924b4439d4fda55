use super::interface::Direction;

/// Caller-supplied hint about what script the text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Japanese,
    /// Latin input the front end already converted to kana
    Romanji,
    English,
    /// Absent or unrecognized hint
    Auto,
}

impl InputType {
    /// Exact, case-sensitive match on the query value.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("japanese") => InputType::Japanese,
            Some("romanji") => InputType::Romanji,
            Some("english") => InputType::English,
            _ => InputType::Auto,
        }
    }
}

/// Hiragana, Katakana and CJK Unified Ideographs.
pub fn contains_japanese_script(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{3040}'..='\u{309F}'
            | '\u{30A0}'..='\u{30FF}'
            | '\u{4E00}'..='\u{9FFF}')
    })
}

pub fn resolve_direction(input_type: InputType, text: &str) -> Direction {
    match input_type {
        InputType::Japanese | InputType::Romanji => Direction::JA_TO_EN,
        InputType::English => Direction::EN_TO_JA,
        InputType::Auto if contains_japanese_script(text) => Direction::JA_TO_EN,
        InputType::Auto => Direction::EN_TO_JA,
    }
}

/// What, if anything, gets romanized once the translation is back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomanizeTarget {
    Input,
    Translated,
    Nothing,
}

/// Only explicit hints romanize; auto-detected Japanese is left alone.
pub fn romanize_target(input_type: InputType, direction: Direction) -> RomanizeTarget {
    match input_type {
        InputType::Japanese if direction.from == super::Lang::Ja => RomanizeTarget::Input,
        InputType::English if direction.to == super::Lang::Ja => RomanizeTarget::Translated,
        _ => RomanizeTarget::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_script_range() {
        assert!(contains_japanese_script("こんにちは"));
        assert!(contains_japanese_script("カタカナ"));
        assert!(contains_japanese_script("漢字"));
        assert!(contains_japanese_script("hello 世界"));
        assert!(!contains_japanese_script("hello world"));
        assert!(!contains_japanese_script(""));
        // Hangul is outside every range
        assert!(!contains_japanese_script("안녕하세요"));
    }

    #[test]
    fn range_edges_are_inclusive() {
        assert!(contains_japanese_script("\u{3040}"));
        assert!(contains_japanese_script("\u{30FF}"));
        assert!(contains_japanese_script("\u{9FFF}"));
        assert!(!contains_japanese_script("\u{303F}"));
        assert!(!contains_japanese_script("\u{A000}"));
    }

    #[test]
    fn explicit_hints_win_over_detection() {
        assert_eq!(resolve_direction(InputType::Japanese, "hello"), Direction::JA_TO_EN);
        assert_eq!(resolve_direction(InputType::Romanji, "konnichiha"), Direction::JA_TO_EN);
        assert_eq!(resolve_direction(InputType::English, "こんにちは"), Direction::EN_TO_JA);
    }

    #[test]
    fn auto_detects_direction() {
        assert_eq!(resolve_direction(InputType::Auto, "good morning"), Direction::EN_TO_JA);
        assert_eq!(resolve_direction(InputType::Auto, "おはよう"), Direction::JA_TO_EN);
    }

    #[test]
    fn hint_parsing_is_case_sensitive() {
        assert_eq!(InputType::from_param(Some("japanese")), InputType::Japanese);
        assert_eq!(InputType::from_param(Some("Japanese")), InputType::Auto);
        assert_eq!(InputType::from_param(Some("romaji")), InputType::Auto);
        assert_eq!(InputType::from_param(None), InputType::Auto);
    }

    #[test]
    fn romanization_only_for_explicit_hints() {
        assert_eq!(romanize_target(InputType::Japanese, Direction::JA_TO_EN), RomanizeTarget::Input);
        assert_eq!(romanize_target(InputType::English, Direction::EN_TO_JA), RomanizeTarget::Translated);
        assert_eq!(romanize_target(InputType::Romanji, Direction::JA_TO_EN), RomanizeTarget::Nothing);
        assert_eq!(romanize_target(InputType::Auto, Direction::JA_TO_EN), RomanizeTarget::Nothing);
        assert_eq!(romanize_target(InputType::Auto, Direction::EN_TO_JA), RomanizeTarget::Nothing);
    }
}
