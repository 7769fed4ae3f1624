//! Specialist recommendation from symptom/diagnosis text
//!
//! Each specialization carries a set of symptom keyword stems. The matcher
//! counts how many stems appear as substrings of the lower-cased combined
//! text and returns the entry with the highest count. At equal counts the
//! first declared entry wins (stable ordering over the table).

/// One entry of the specialization reference table
#[derive(Debug, Clone, PartialEq)]
pub struct Specialization {
    pub code: &'static str,
    pub name_ru: &'static str,
    pub name_uz: &'static str,
    pub keywords: &'static [&'static str],
}

/// Static specialization table, declaration order is the tie-break order
const SPECIALIZATIONS: &[Specialization] = &[
    Specialization {
        code: "cardiologist",
        name_ru: "Кардиолог",
        name_uz: "Kardiolog",
        keywords: &[
            "боль в груди",
            "сердцебиение",
            "одышка",
            "высокое давление",
            "низкое давление",
            "аритмия",
            "учащенное сердцебиение",
        ],
    },
    Specialization {
        code: "neurologist",
        name_ru: "Невролог",
        name_uz: "Nevrolog",
        keywords: &[
            "головная боль",
            "мигрень",
            "головокружение",
            "онемение",
            "тремор",
            "судороги",
            "потеря сознания",
        ],
    },
    Specialization {
        code: "gastroenterologist",
        name_ru: "Гастроэнтеролог",
        name_uz: "Gastroenterolog",
        keywords: &[
            "боль в животе",
            "тошнота",
            "рвота",
            "диарея",
            "запор",
            "изжога",
            "метеоризм",
        ],
    },
    Specialization {
        code: "dermatologist",
        name_ru: "Дерматолог",
        name_uz: "Dermatolog",
        keywords: &[
            "сыпь",
            "зуд",
            "покраснение кожи",
            "акне",
            "экзема",
            "псориаз",
            "крапивница",
        ],
    },
    Specialization {
        code: "orthopedist",
        name_ru: "Ортопед",
        name_uz: "Ortoped",
        keywords: &[
            "боль в суставах",
            "боль в спине",
            "травма",
            "опухоль сустава",
            "растяжение",
            "вывих",
            "перелом",
        ],
    },
    Specialization {
        code: "ophthalmologist",
        name_ru: "Офтальмолог",
        name_uz: "Oftalmolog",
        keywords: &[
            "боль в глазах",
            "снижение зрения",
            "покраснение глаз",
            "слезотечение",
            "сухость глаз",
            "двоение",
        ],
    },
    Specialization {
        code: "otolaryngologist",
        name_ru: "Отоларинголог (ЛОР)",
        name_uz: "Otorinolaringolog",
        keywords: &[
            "боль в горле",
            "боль в ухе",
            "насморк",
            "потеря слуха",
            "заложенность носа",
            "синусит",
            "тонзиллит",
        ],
    },
    Specialization {
        code: "pulmonologist",
        name_ru: "Пульмонолог",
        name_uz: "Pulmonolog",
        keywords: &[
            "кашель",
            "одышка",
            "боль в груди при дыхании",
            "свистящее дыхание",
            "затрудненное дыхание",
            "астма",
        ],
    },
];

/// Matcher over a specialization table
#[derive(Debug, Clone)]
pub struct SpecialistMatcher {
    entries: &'static [Specialization],
}

impl Default for SpecialistMatcher {
    fn default() -> Self {
        Self {
            entries: SPECIALIZATIONS,
        }
    }
}

impl SpecialistMatcher {
    /// Matcher over a custom table (tests, alternative locales)
    pub fn with_table(entries: &'static [Specialization]) -> Self {
        Self { entries }
    }

    /// All entries, in declaration order
    pub fn entries(&self) -> &[Specialization] {
        self.entries
    }

    /// Look up an entry by its code
    pub fn by_code(&self, code: &str) -> Option<&Specialization> {
        self.entries.iter().find(|s| s.code == code)
    }

    /// Recommend the best-matching specialization, if any keyword matched
    ///
    /// Pure function of the combined text and the table.
    pub fn recommend(&self, symptoms: &str, diagnosis: &str) -> Option<&Specialization> {
        let text = format!("{} {}", symptoms, diagnosis).to_lowercase();

        self.entries
            .iter()
            .map(|entry| (entry, Self::match_count(entry, &text)))
            .filter(|(_, count)| *count > 0)
            // strict comparison keeps the first declared entry on ties
            .fold(None, |best: Option<(&Specialization, usize)>, candidate| {
                match best {
                    Some((_, best_count)) if candidate.1 <= best_count => best,
                    _ => Some(candidate),
                }
            })
            .map(|(entry, _)| entry)
    }

    fn match_count(entry: &Specialization, lowered_text: &str) -> usize {
        entry
            .keywords
            .iter()
            .filter(|k| lowered_text.contains(&k.to_lowercase()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headache_maps_to_neurologist() {
        let matcher = SpecialistMatcher::default();
        let entry = matcher
            .recommend("у меня болит голова и кружится", "головная боль, головокружение")
            .unwrap();
        assert_eq!(entry.code, "neurologist");
    }

    #[test]
    fn test_no_match_returns_none() {
        let matcher = SpecialistMatcher::default();
        assert!(matcher.recommend("просто устал", "").is_none());
    }

    #[test]
    fn test_highest_count_wins() {
        let matcher = SpecialistMatcher::default();
        // One cardiology stem, two pulmonology stems
        let entry = matcher
            .recommend("одышка, кашель и свистящее дыхание", "")
            .unwrap();
        assert_eq!(entry.code, "pulmonologist");
    }

    #[test]
    fn test_tie_break_first_declared() {
        // "одышка" appears in both cardiologist and pulmonologist tables;
        // at one match each, the earlier entry wins
        let matcher = SpecialistMatcher::default();
        let entry = matcher.recommend("одышка", "").unwrap();
        assert_eq!(entry.code, "cardiologist");
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = SpecialistMatcher::default();
        let entry = matcher.recommend("СИЛЬНАЯ МИГРЕНЬ", "").unwrap();
        assert_eq!(entry.code, "neurologist");
    }

    #[test]
    fn test_by_code() {
        let matcher = SpecialistMatcher::default();
        let entry = matcher.by_code("dermatologist").unwrap();
        assert_eq!(entry.name_ru, "Дерматолог");
        assert!(matcher.by_code("podiatrist").is_none());
    }

    #[test]
    fn test_table_has_eight_entries() {
        assert_eq!(SpecialistMatcher::default().entries().len(), 8);
    }

    #[test]
    fn test_recommendation_is_pure() {
        let matcher = SpecialistMatcher::default();
        let a = matcher.recommend("кашель и насморк", "бронхит").map(|s| s.code);
        let b = matcher.recommend("кашель и насморк", "бронхит").map(|s| s.code);
        assert_eq!(a, b);
    }
}
