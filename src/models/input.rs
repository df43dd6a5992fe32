//! Raw form input handed to the controllers.
//!
//! Values are kept as the user typed them; parsing and validation happen in
//! `core`, so the same structs serve any front end.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub name: String,
    pub amount: String,
    /// Empty or absent means "today".
    pub date: Option<String>,
}

impl ExpenseInput {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, date: Option<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitInput {
    pub limit: String,
}

impl LimitInput {
    pub fn new(limit: impl Into<String>) -> Self {
        Self {
            limit: limit.into(),
        }
    }
}
