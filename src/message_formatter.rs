use crate::constants::{MENU_HEADER, NO_MENU_MSG};
use crate::data_types::Meal;

/// Renders the day's meals into a single Telegram message
/// (legacy `Markdown` parse mode, bold via `*`).
pub fn format_meals(meals: &[Meal]) -> String {
    if meals.is_empty() {
        return NO_MENU_MSG.to_string();
    }

    let mut msg = format!("{MENU_HEADER}\n\n");

    for meal in meals {
        msg += &format!(
            "*{}*\n{}\n👤 Studierende: {}\n\n",
            meal.category, meal.name, meal.student_price
        );
    }

    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(category: &str, name: &str, student_price: &str) -> Meal {
        Meal {
            category: category.to_string(),
            name: name.to_string(),
            student_price: student_price.to_string(),
        }
    }

    #[test]
    fn empty_menu_yields_fallback_notice() {
        assert_eq!(format_meals(&[]), "Heute gibt es keinen Speiseplan.");
    }

    #[test]
    fn message_starts_with_header() {
        let msg = format_meals(&[meal("Angebot 1", "Pasta Bolognese", "2,15 €")]);
        assert!(msg.starts_with("🍽 *Heutiger Mensaplan*\n\n"));
    }

    #[test]
    fn one_block_per_meal_in_input_order() {
        let msg = format_meals(&[
            meal("Angebot 1", "Pasta Bolognese", "2,15 €"),
            meal("Angebot 2", "Schnitzel mit Pommes", "3,05 €"),
        ]);

        assert_eq!(
            msg,
            "🍽 *Heutiger Mensaplan*\n\n\
             *Angebot 1*\nPasta Bolognese\n👤 Studierende: 2,15 €\n\n\
             *Angebot 2*\nSchnitzel mit Pommes\n👤 Studierende: 3,05 €\n\n"
        );
    }
}
