//! Mission phrases and their structured form.

use serde::{Deserialize, Serialize};

/// Keyword for "own N territories" missions.
pub const OWN_KEYWORD: &str = "Possuir";
/// Second keyword required by "own N territories" missions.
pub const TERRITORIES_KEYWORD: &str = "territorios";
/// Keyword for "conquer N territories" missions.
pub const CONQUER_KEYWORD: &str = "Conquistar";
/// Fixed prefix of "eliminate color X" missions.
pub const ELIMINATE_PHRASE: &str = "Eliminar todas as tropas da cor";

/// What a mission phrase asks for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    /// Control at least N territories.
    OwnCount(u32),
    /// "Conquer N territories". Checked as total ownership, exactly like
    /// `OwnCount`; conquest streaks are not tracked.
    ConquerCount(u32),
    /// Every territory of this color holds zero troops.
    EliminateColor(String),
    /// Phrase matched no template, or a count template without a positive N.
    Unrecognized,
}

impl MissionKind {
    /// Interpret a mission phrase.
    ///
    /// Templates are tried in priority order and the first one that yields a
    /// usable target wins, so a phrase carrying both "Possuir ... territorios"
    /// and "Conquistar" is an `OwnCount`.
    ///
    /// ```
    /// use territory_missions::missions::MissionKind;
    ///
    /// assert_eq!(MissionKind::parse("Possuir 3 territorios"), MissionKind::OwnCount(3));
    /// assert_eq!(
    ///     MissionKind::parse("Eliminar todas as tropas da cor Red."),
    ///     MissionKind::EliminateColor("Red".to_string()),
    /// );
    /// assert_eq!(MissionKind::parse("Possuir territorios"), MissionKind::Unrecognized);
    /// ```
    #[must_use]
    pub fn parse(phrase: &str) -> Self {
        let threshold = first_number(phrase);

        if phrase.contains(OWN_KEYWORD) && phrase.contains(TERRITORIES_KEYWORD) {
            if let Some(n) = threshold {
                return MissionKind::OwnCount(n);
            }
        }

        if phrase.contains(CONQUER_KEYWORD) {
            if let Some(n) = threshold {
                return MissionKind::ConquerCount(n);
            }
        }

        if phrase.contains(ELIMINATE_PHRASE) {
            if let Some((_, last)) = phrase.rsplit_once(' ') {
                let color = last.split('.').next().unwrap_or(last);
                return MissionKind::EliminateColor(color.to_string());
            }
        }

        MissionKind::Unrecognized
    }
}

/// First run of ASCII digits anywhere in `phrase`, if it is positive.
///
/// Runs too large for `u32` saturate.
fn first_number(phrase: &str) -> Option<u32> {
    let start = phrase.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = {
        let rest = &phrase[start..];
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };

    let n = digits.parse::<u32>().unwrap_or(u32::MAX);
    (n > 0).then_some(n)
}

/// A player's mission: the drawn phrase plus its parsed form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    text: String,
    kind: MissionKind,
}

impl Mission {
    /// Parse a phrase into a mission.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = MissionKind::parse(&text);
        Self { text, kind }
    }

    /// The phrase as drawn from the catalog.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> &MissionKind {
        &self.kind
    }
}

impl std::fmt::Display for Mission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
