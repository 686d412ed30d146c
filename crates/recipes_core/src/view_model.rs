use crate::expr::parse_comparison;
use crate::record::format_number;
use crate::state::PAGE_SIZE_OPTIONS;
use crate::{EmptyState, FilterKey, Record, TableBody, ViewState};

pub const STAR_SCALE: u8 = 5;

/// Nutrients shown in the detail view, in display order. Other keys are ignored.
pub const NUTRIENT_ORDER: [&str; 9] = [
    "calories",
    "carbohydrateContent",
    "cholesterolContent",
    "fiberContent",
    "proteinContent",
    "saturatedFatContent",
    "sodiumContent",
    "sugarContent",
    "fatContent",
];

#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub body: BodyView,
    pub pager: PagerView,
    pub empty_state: EmptyState,
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
    pub filters: Vec<FilterView>,
    pub detail: Option<DetailView>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    Loading,
    Error(String),
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub title: String,
    pub cuisine: String,
    pub stars: StarRating,
    pub total_time: String,
    pub serves: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub key: FilterKey,
    pub value: String,
    /// Set when a numeric filter holds something the endpoint cannot compare against.
    pub ignored: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub cuisine: String,
    pub description: String,
    pub total_time_text: String,
    pub prep_time_text: String,
    pub cook_time_text: String,
    pub nutrients: Vec<NutrientRow>,
    pub times_expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrientRow {
    pub name: String,
    pub value: String,
}

/// Whole-star rating out of `STAR_SCALE`.
///
/// `half` is computed but not drawn; only whole filled and empty stars render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRating {
    pub value: f64,
    pub filled: u8,
    pub half: bool,
}

impl StarRating {
    pub fn from_rating(rating: Option<f64>) -> Self {
        let value = rating.filter(|v| v.is_finite()).unwrap_or(0.0);
        let whole = value.floor();
        let filled = whole.clamp(0.0, f64::from(STAR_SCALE)) as u8;
        Self {
            value,
            filled,
            half: value - whole >= 0.5,
        }
    }

    pub fn glyphs(&self) -> String {
        (0..STAR_SCALE)
            .map(|i| if i < self.filled { '★' } else { '☆' })
            .collect()
    }
}

impl RowView {
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.title.clone().unwrap_or_default(),
            cuisine: record.cuisine.clone().unwrap_or_default(),
            stars: StarRating::from_rating(record.rating),
            total_time: optional_number(record.total_time),
            serves: record.serves.clone().unwrap_or_default(),
        }
    }
}

impl DetailView {
    pub fn from_record(record: &Record, times_expanded: bool) -> Self {
        let nutrients = record
            .nutrients
            .as_ref()
            .map(|nutrients| {
                NUTRIENT_ORDER
                    .iter()
                    .filter_map(|name| {
                        nutrients.get(*name).map(|value| NutrientRow {
                            name: (*name).to_string(),
                            value: value.to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: record.title.clone().unwrap_or_default(),
            cuisine: record.cuisine.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            total_time_text: format!("{} mins", optional_number(record.total_time)),
            prep_time_text: optional_number(record.prep_time),
            cook_time_text: optional_number(record.cook_time),
            nutrients,
            times_expanded,
        }
    }
}

// Absent renders blank; zero still renders as "0".
fn optional_number(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl ViewState {
    pub fn view(&self) -> TableViewModel {
        let body = match self.body() {
            TableBody::Loading => BodyView::Loading,
            TableBody::Error(message) => BodyView::Error(message.clone()),
            TableBody::Rows(indices) => BodyView::Rows(
                indices
                    .iter()
                    .filter_map(|index| self.cache().get(*index))
                    .map(RowView::from_record)
                    .collect(),
            ),
        };

        let pager = self.pager();
        let filters = self
            .filters()
            .iter()
            .map(|(key, value)| FilterView {
                key,
                value: value.to_string(),
                ignored: key.is_numeric()
                    && !value.trim().is_empty()
                    && parse_comparison(value).is_none(),
            })
            .collect();

        let status = self.statistics().map(|stats| {
            format!(
                "{} recipes · avg rating {:.2} · avg time {} min",
                stats.total_recipes,
                stats.average_rating,
                format_number(stats.average_total_time.round())
            )
        });

        TableViewModel {
            body,
            pager: PagerView {
                label: pager.label(),
                prev_enabled: self.can_go_prev(),
                next_enabled: self.can_go_next(),
            },
            empty_state: self.empty_state(),
            page_size: self.limit(),
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            filters,
            detail: self
                .detail()
                .map(|detail| DetailView::from_record(&detail.record, detail.times_expanded)),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::NutrientValue;

    #[test]
    fn stars_floor_the_rating() {
        let stars = StarRating::from_rating(Some(3.7));
        assert_eq!(stars.filled, 3);
        assert!(stars.half);
        assert_eq!(stars.glyphs(), "★★★☆☆");

        assert_eq!(StarRating::from_rating(None).glyphs(), "☆☆☆☆☆");
        assert_eq!(StarRating::from_rating(Some(5.0)).glyphs(), "★★★★★");
        assert_eq!(StarRating::from_rating(Some(9.0)).filled, STAR_SCALE);
        assert!(!StarRating::from_rating(Some(4.2)).half);
    }

    #[test]
    fn zero_total_time_is_not_blank() {
        let zero = Record {
            total_time: Some(0),
            ..Record::default()
        };
        assert_eq!(RowView::from_record(&zero).total_time, "0");
        assert_eq!(RowView::from_record(&Record::default()).total_time, "");
    }

    #[test]
    fn detail_lists_whitelisted_nutrients_in_order() {
        let mut nutrients = BTreeMap::new();
        nutrients.insert("fatContent".to_string(), NutrientValue::Text("9 g".into()));
        nutrients.insert("calories".to_string(), NutrientValue::Number(389.0));
        nutrients.insert("unsaturatedFatContent".to_string(), NutrientValue::Number(1.0));
        let record = Record {
            title: Some("Soup".into()),
            total_time: Some(45),
            nutrients: Some(nutrients),
            ..Record::default()
        };

        let detail = DetailView::from_record(&record, false);
        let names: Vec<_> = detail.nutrients.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["calories", "fatContent"]);
        assert_eq!(detail.nutrients[0].value, "389");
        assert_eq!(detail.total_time_text, "45 mins");
        assert_eq!(detail.prep_time_text, "");
    }
}
