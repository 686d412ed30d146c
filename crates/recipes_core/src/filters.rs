/// Server-side filter keys, in the order they are sent as query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    Title,
    Cuisine,
    Rating,
    TotalTime,
    Calories,
}

impl FilterKey {
    pub const ALL: [FilterKey; 5] = [
        FilterKey::Title,
        FilterKey::Cuisine,
        FilterKey::Rating,
        FilterKey::TotalTime,
        FilterKey::Calories,
    ];

    pub fn param_name(self) -> &'static str {
        match self {
            FilterKey::Title => "title",
            FilterKey::Cuisine => "cuisine",
            FilterKey::Rating => "rating",
            FilterKey::TotalTime => "total_time",
            FilterKey::Calories => "calories",
        }
    }

    /// Keys whose values the endpoint reads as comparison expressions.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FilterKey::Rating | FilterKey::TotalTime | FilterKey::Calories
        )
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Current filter values. An empty string means the filter is unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    values: [String; 5],
}

impl Filters {
    pub fn get(&self, key: FilterKey) -> &str {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        self.values[key.index()] = value.into();
    }

    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Iterates in `FilterKey::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        FilterKey::ALL
            .iter()
            .map(move |key| (*key, self.get(*key)))
    }

    /// True when at least one value is non-blank after trimming.
    pub fn has_any(&self) -> bool {
        self.values.iter().any(|value| !value.trim().is_empty())
    }
}
