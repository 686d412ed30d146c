use recipes_core::{FilterKey, InputId};

use super::surface::ControlId;

pub const PANEL_FILTERS: ControlId = ControlId::new(1000);
pub const INPUT_TITLE: ControlId = ControlId::new(1001);
pub const INPUT_CUISINE: ControlId = ControlId::new(1002);
pub const INPUT_RATING: ControlId = ControlId::new(1003);
pub const INPUT_TOTAL_TIME: ControlId = ControlId::new(1004);
pub const INPUT_CALORIES: ControlId = ControlId::new(1005);
pub const INPUT_SERVES: ControlId = ControlId::new(1006);
pub const SELECT_PAGE_SIZE: ControlId = ControlId::new(1101);
pub const BUTTON_RESET: ControlId = ControlId::new(1201);
pub const BUTTON_PREV: ControlId = ControlId::new(1202);
pub const BUTTON_NEXT: ControlId = ControlId::new(1203);
pub const TABLE_RECIPES: ControlId = ControlId::new(1501);
pub const LABEL_PAGE_INFO: ControlId = ControlId::new(3001);
pub const LABEL_NO_DATA: ControlId = ControlId::new(3002);
pub const LABEL_NO_RESULTS: ControlId = ControlId::new(3003);
pub const LABEL_STATUS: ControlId = ControlId::new(3004);
pub const PANEL_DRAWER: ControlId = ControlId::new(4001);
pub const LABEL_DRAWER_TITLE: ControlId = ControlId::new(4002);
pub const LABEL_DRAWER_CUISINE: ControlId = ControlId::new(4003);
pub const LABEL_DRAWER_DESC: ControlId = ControlId::new(4004);
pub const LABEL_TOTAL_TIME: ControlId = ControlId::new(4005);
pub const PANEL_TIMES: ControlId = ControlId::new(4006);
pub const LABEL_PREP_TIME: ControlId = ControlId::new(4007);
pub const LABEL_COOK_TIME: ControlId = ControlId::new(4008);
pub const TABLE_NUTRIENTS: ControlId = ControlId::new(4009);

pub const TABLE_HEADERS: [&str; 5] = ["Title", "Cuisine", "Rating", "Total time", "Serves"];

pub fn input_control(input: InputId) -> ControlId {
    match input {
        InputId::Filter(FilterKey::Title) => INPUT_TITLE,
        InputId::Filter(FilterKey::Cuisine) => INPUT_CUISINE,
        InputId::Filter(FilterKey::Rating) => INPUT_RATING,
        InputId::Filter(FilterKey::TotalTime) => INPUT_TOTAL_TIME,
        InputId::Filter(FilterKey::Calories) => INPUT_CALORIES,
        InputId::Serves => INPUT_SERVES,
    }
}

pub fn input_label(input: InputId) -> &'static str {
    match input {
        InputId::Filter(FilterKey::Title) => "Title",
        InputId::Filter(FilterKey::Cuisine) => "Cuisine",
        InputId::Filter(FilterKey::Rating) => "Rating",
        InputId::Filter(FilterKey::TotalTime) => "Total time",
        InputId::Filter(FilterKey::Calories) => "Calories",
        InputId::Serves => "Serves",
    }
}
