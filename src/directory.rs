//! Doctor directory
//!
//! Static demo registry of doctors, keyed by specialization code from the
//! matcher table. The consult flow uses it to suggest concrete contacts
//! after a specialist recommendation.

use serde::Serialize;

/// One directory entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialization: &'static str,
    pub experience_years: u32,
    pub city: &'static str,
    pub hospital: &'static str,
    pub phone: &'static str,
    pub telegram: Option<&'static str>,
    pub languages: &'static [&'static str],
    pub rating: f32,
    pub available_slots: u32,
}

const DOCTORS: &[Doctor] = &[
    Doctor {
        id: 1,
        name: "Асрор Максудов",
        specialization: "cardiologist",
        experience_years: 15,
        city: "Ташкент",
        hospital: "Республиканский специализированный научно-практический медицинский центр кардиологии",
        phone: "+998 71 237 33 96",
        telegram: Some("@asror_cardio"),
        languages: &["Русский", "Узбекский", "Английский"],
        rating: 4.9,
        available_slots: 3,
    },
    Doctor {
        id: 2,
        name: "Нодира Рахимова",
        specialization: "neurologist",
        experience_years: 12,
        city: "Ташкент",
        hospital: "Республиканский научный центр неврологии и инсульта",
        phone: "+998 71 234 89 63",
        telegram: Some("@nodira_neuro"),
        languages: &["Русский", "Узбекский"],
        rating: 4.8,
        available_slots: 2,
    },
    Doctor {
        id: 3,
        name: "Бахром Юлдашев",
        specialization: "gastroenterologist",
        experience_years: 10,
        city: "Самарканд",
        hospital: "Самаркандский государственный медицинский институт",
        phone: "+998 66 233 17 28",
        telegram: None,
        languages: &["Русский", "Узбекский"],
        rating: 4.7,
        available_slots: 5,
    },
    Doctor {
        id: 4,
        name: "Дилноза Каримова",
        specialization: "dermatologist",
        experience_years: 8,
        city: "Ташкент",
        hospital: "Республиканский специализированный научно-практический медицинский центр дерматологии и венерологии",
        phone: "+998 71 214 50 98",
        telegram: Some("@dilnoza_derma"),
        languages: &["Русский", "Узбекский", "Английский"],
        rating: 4.9,
        available_slots: 1,
    },
    Doctor {
        id: 5,
        name: "Тимур Расулов",
        specialization: "orthopedist",
        experience_years: 20,
        city: "Бухара",
        hospital: "Бухарский областной травматологический центр",
        phone: "+998 65 224 17 36",
        telegram: None,
        languages: &["Русский", "Узбекский"],
        rating: 4.8,
        available_slots: 4,
    },
    Doctor {
        id: 6,
        name: "Зарина Ахмедова",
        specialization: "ophthalmologist",
        experience_years: 14,
        city: "Ташкент",
        hospital: "Республиканская специализированная офтальмологическая клиника",
        phone: "+998 71 246 28 73",
        telegram: Some("@zarina_ophthalm"),
        languages: &["Русский", "Узбекский", "Английский"],
        rating: 4.9,
        available_slots: 2,
    },
    Doctor {
        id: 7,
        name: "Фархад Шарипов",
        specialization: "otolaryngologist",
        experience_years: 11,
        city: "Наманган",
        hospital: "Наманганская областная больница",
        phone: "+998 69 234 12 56",
        telegram: None,
        languages: &["Русский", "Узбекский"],
        rating: 4.7,
        available_slots: 6,
    },
    Doctor {
        id: 8,
        name: "Малика Исмаилова",
        specialization: "pulmonologist",
        experience_years: 13,
        city: "Фергана",
        hospital: "Ферганский филиал Республиканского центра терапии",
        phone: "+998 73 244 36 98",
        telegram: Some("@malika_pulmo"),
        languages: &["Русский", "Узбекский"],
        rating: 4.8,
        available_slots: 3,
    },
    Doctor {
        id: 9,
        name: "Шухрат Рахимов",
        specialization: "cardiologist",
        experience_years: 18,
        city: "Андижан",
        hospital: "Андижанский государственный медицинский институт",
        phone: "+998 74 223 45 67",
        telegram: None,
        languages: &["Русский", "Узбекский"],
        rating: 4.9,
        available_slots: 2,
    },
    Doctor {
        id: 10,
        name: "Гузаль Мирзаева",
        specialization: "neurologist",
        experience_years: 9,
        city: "Нукус",
        hospital: "Республиканский многопрофильный медицинский центр Каракалпакстана",
        phone: "+998 61 222 34 56",
        telegram: Some("@guzal_neuro"),
        languages: &["Русский", "Узбекский", "Каракалпакский"],
        rating: 4.7,
        available_slots: 5,
    },
];

/// All doctors in the registry
pub fn all() -> &'static [Doctor] {
    DOCTORS
}

/// Doctors of one specialization, registry order preserved
pub fn by_specialization(code: &str) -> Vec<&'static Doctor> {
    DOCTORS
        .iter()
        .filter(|d| d.specialization == code)
        .collect()
}
