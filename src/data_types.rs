/// One offer as displayed on the web menu, e.g. "Angebot 1".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub category: String,
    pub name: String,
    /// student price as displayed, e.g. "2,15 €" (never parsed into a number)
    pub student_price: String,
}
