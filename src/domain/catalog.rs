use crate::domain::model::Venue;
use crate::domain::ports::VenueLookup;
use std::collections::HashMap;

const BUILTIN_CITIES: &[(&str, &[&str])] = &[
    (
        "moscow",
        &[
            "Мир кофе",
            "Сладкоежка",
            "Кофе и завтраки",
            "Сытый студент",
            "Деревянная ложка",
            "Золотая вилка",
            "Чайный домик",
            "Coffee Like",
            "Пекарня на углу",
        ],
    ),
    ("tula", &["Кофе с молоком", "Вкусности", "Шоколадница"]),
];

/// Static city → venues mapping. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: HashMap<String, Vec<Venue>>,
}

impl Catalog {
    /// The dataset the service ships with.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_CITIES.iter().map(|(city, names)| {
            (city.to_string(), names.iter().map(|name| Venue::new(*name)).collect())
        }))
    }

    /// Later entries for an already-seen city replace the earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Venue>)>,
    {
        Self {
            cities: entries.into_iter().collect(),
        }
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl VenueLookup for Catalog {
    fn venues(&self, city: &str) -> Option<&[Venue]> {
        self.cities.get(city).map(Vec::as_slice)
    }
}
