use scraper::{ElementRef, Html, Selector};

use crate::constants::STUDENT_PRICE_LABEL;
use crate::data_types::Meal;

fn select_text(parent: ElementRef, selector: &Selector) -> String {
    parent
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Walks all meal blocks of the parsed menu page and collects them in
/// document order.
///
/// The page interleaves real offers with empty placeholder blocks (weekend
/// separators etc.), which carry no meal name and are skipped. Missing
/// sub-elements leave the corresponding field empty instead of failing.
pub fn extract_meals(document: &Html) -> Vec<Meal> {
    let meal_sel = Selector::parse(".meal-wrapper .meal").unwrap();
    let category_sel = Selector::parse(".categoryName").unwrap();
    let name_sel = Selector::parse(".mealNameWrapper").unwrap();
    let price_row_sel = Selector::parse(".price-row").unwrap();
    let price_label_sel = Selector::parse(".price-label").unwrap();
    let price_value_sel = Selector::parse(".price-value").unwrap();

    let mut meals = Vec::new();

    for meal_el in document.select(&meal_sel) {
        let category = select_text(meal_el, &category_sel);
        let name = select_text(meal_el, &name_sel);

        // the block lists one price row per patron group, only the
        // student one is of interest (label match is exact)
        let mut student_price = String::new();
        for price_row in meal_el.select(&price_row_sel) {
            if select_text(price_row, &price_label_sel) == STUDENT_PRICE_LABEL {
                student_price = select_text(price_row, &price_value_sel);
            }
        }

        if !name.is_empty() {
            meals.push(Meal {
                category,
                name,
                student_price,
            });
        }
    }

    meals
}
