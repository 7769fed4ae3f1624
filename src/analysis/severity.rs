//! Severity classification for symptom/diagnosis text
//!
//! Scores the lower-cased concatenation of symptoms and diagnosis against
//! three disjoint keyword lists (substring containment, not tokenized) and
//! picks an urgency level. Ties resolve downward: urgent must strictly beat
//! both other scores, attention must strictly beat non-urgent.
//!
//! This is a display heuristic. It makes no claim of diagnostic accuracy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword stems indicating an emergency
const URGENT_KEYWORDS: &[&str] = &[
    "немедленно",
    "срочно",
    "критическ",
    "экстренн",
    "неотложн",
    "опасн",
    "тяжел",
    "острая боль",
    "сильная боль",
    "нестерпимая",
    "кровотеч",
    "потеря сознания",
    "инсульт",
    "инфаркт",
    "сердечный приступ",
    "отравлени",
    "анафилактическ",
    "затруднение дыхания",
    "удушье",
    "судороги",
    "смертельно",
    "летальн",
    "неотложная помощь",
    "вызывать скорую",
];

/// Keyword stems indicating a visit is needed soon
const ATTENTION_KEYWORDS: &[&str] = &[
    "требует внимания",
    "обратиться к врачу",
    "консультация специалиста",
    "наблюдение",
    "контроль",
    "записаться на прием",
    "посетить стоматолога",
    "в ближайшее время",
    "в течение нескольких дней",
    "умеренная боль",
    "воспаление",
    "инфекция",
    "обострение",
    "хроническое",
    "повышенная температура",
    "симптомы ухудшаются",
    "продолжительная боль",
    "дискомфорт",
    "беспокойство",
];

/// Keyword stems indicating routine care is enough
const NON_URGENT_KEYWORDS: &[&str] = &[
    "не срочно",
    "можно подождать",
    "плановый прием",
    "профилактическ",
    "рекомендации",
    "домашнее лечение",
    "незначительн",
    "слабая боль",
    "легкое недомогание",
    "самостоятельно пройдет",
    "не требует срочного вмешательства",
    "легкий дискомфорт",
];

/// Urgency level assigned to a consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    NotUrgent,
    Attention,
    Urgent,
    Undefined,
}

impl Severity {
    /// Numeric wire code (1-3); `Undefined` has no code
    pub fn code(&self) -> u8 {
        match self {
            Severity::NotUrgent => 1,
            Severity::Attention => 2,
            Severity::Urgent => 3,
            Severity::Undefined => 0,
        }
    }

    /// Map a wire code back to a level; anything unknown is `Undefined`
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Severity::NotUrgent,
            2 => Severity::Attention,
            3 => Severity::Urgent,
            _ => Severity::Undefined,
        }
    }

    /// Localized display label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Urgent => "Срочно",
            Severity::Attention => "Требует внимания",
            Severity::NotUrgent => "Не срочно",
            Severity::Undefined => "Не определено",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Keyword tables driving the classifier
///
/// Injectable so a different locale or tuned list can be swapped in; the
/// default carries the production Russian stems.
#[derive(Debug, Clone)]
pub struct SeverityClassifier {
    urgent: Vec<String>,
    attention: Vec<String>,
    non_urgent: Vec<String>,
}

impl Default for SeverityClassifier {
    fn default() -> Self {
        Self::with_keywords(URGENT_KEYWORDS, ATTENTION_KEYWORDS, NON_URGENT_KEYWORDS)
    }
}

impl SeverityClassifier {
    /// Build a classifier from explicit keyword lists
    pub fn with_keywords(urgent: &[&str], attention: &[&str], non_urgent: &[&str]) -> Self {
        let lower = |list: &[&str]| list.iter().map(|k| k.to_lowercase()).collect();

        Self {
            urgent: lower(urgent),
            attention: lower(attention),
            non_urgent: lower(non_urgent),
        }
    }

    /// Classify combined symptom and diagnosis text
    ///
    /// Pure: the same input always yields the same level.
    pub fn classify(&self, symptoms: &str, diagnosis: &str) -> Severity {
        let text = format!("{} {}", symptoms, diagnosis).to_lowercase();

        let count = |list: &[String]| list.iter().filter(|k| text.contains(k.as_str())).count();

        let urgent_score = count(&self.urgent);
        let mut attention_score = count(&self.attention);
        let mut non_urgent_score = count(&self.non_urgent);

        let has_dental = text.contains("зуб") || text.contains("десн");

        // Dental complaints without an explicit emergency still warrant a
        // dentist visit
        if has_dental && urgent_score == 0 {
            attention_score += 1;
        }

        // Tooth pain from cold water reads as sensitivity, not an emergency
        if has_dental && text.contains("холодн") && text.contains("вод") {
            non_urgent_score += 1;
        }

        if urgent_score > attention_score && urgent_score > non_urgent_score {
            Severity::Urgent
        } else if attention_score > non_urgent_score {
            Severity::Attention
        } else {
            Severity::NotUrgent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_urgent_keyword_wins() {
        let classifier = SeverityClassifier::default();
        assert_eq!(
            classifier.classify("у меня инфаркт", ""),
            Severity::Urgent
        );
    }

    #[test]
    fn test_non_urgent_keyword() {
        let classifier = SeverityClassifier::default();
        assert_eq!(
            classifier.classify("легкое недомогание", ""),
            Severity::NotUrgent
        );
    }

    #[test]
    fn test_attention_keyword() {
        let classifier = SeverityClassifier::default();
        assert_eq!(
            classifier.classify("", "рекомендуем обратиться к врачу"),
            Severity::Attention
        );
    }

    #[test]
    fn test_no_keywords_defaults_not_urgent() {
        let classifier = SeverityClassifier::default();
        assert_eq!(classifier.classify("просто текст", ""), Severity::NotUrgent);
    }

    #[test]
    fn test_dental_without_urgency_bumps_attention() {
        let classifier = SeverityClassifier::default();
        assert_eq!(
            classifier.classify("болит зуб", ""),
            Severity::Attention
        );
    }

    #[test]
    fn test_dental_cold_water_not_urgent() {
        // Attention gets +1 from the dental rule, non-urgent +1 from the
        // cold-water rule; attention needs a strict win, so non-urgent holds
        let classifier = SeverityClassifier::default();
        assert_eq!(
            classifier.classify("зуб болит от холодной воды", ""),
            Severity::NotUrgent
        );
    }

    #[test]
    fn test_dental_with_urgent_keyword_stays_urgent() {
        let classifier = SeverityClassifier::default();
        assert_eq!(
            classifier.classify("зуб, нестерпимая острая боль, кровотечение", ""),
            Severity::Urgent
        );
    }

    #[test]
    fn test_urgent_requires_strict_win_over_both() {
        // One urgent and one attention keyword each: tie, resolves downward
        let classifier = SeverityClassifier::with_keywords(
            &["инфаркт"],
            &["воспаление"],
            &[],
        );
        assert_eq!(
            classifier.classify("инфаркт воспаление", ""),
            Severity::Attention
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let classifier = SeverityClassifier::default();
        assert_eq!(classifier.classify("ИНФАРКТ", ""), Severity::Urgent);
    }

    #[test]
    fn test_severity_codes_round_trip() {
        for severity in [Severity::NotUrgent, Severity::Attention, Severity::Urgent] {
            assert_eq!(Severity::from_code(severity.code()), severity);
        }
        assert_eq!(Severity::from_code(0), Severity::Undefined);
        assert_eq!(Severity::from_code(9), Severity::Undefined);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Urgent.label(), "Срочно");
        assert_eq!(Severity::Attention.label(), "Требует внимания");
        assert_eq!(Severity::NotUrgent.label(), "Не срочно");
        assert_eq!(Severity::Undefined.label(), "Не определено");
    }

    #[quickcheck]
    fn prop_classify_is_pure(symptoms: String, diagnosis: String) -> bool {
        let classifier = SeverityClassifier::default();
        classifier.classify(&symptoms, &diagnosis)
            == classifier.classify(&symptoms, &diagnosis)
    }
}
