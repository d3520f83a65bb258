use std::time::Duration;

pub const MENU_URL: &str = "https://stwwb.webspeiseplan.de/Menu";
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub const STUDENT_PRICE_LABEL: &str = "Studierende";

pub const NO_MENU_MSG: &str = "Heute gibt es keinen Speiseplan.";
pub const MENU_HEADER: &str = "🍽 *Heutiger Mensaplan*";

// the menu page imposes no timeout of its own, so bound both calls here
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
