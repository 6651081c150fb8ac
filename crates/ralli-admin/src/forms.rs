//! Submitted admin forms

use ralli_core::{Error, Result};
use serde::Deserialize;
use validator::Validate;

/// New stat type form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewStatType {
    /// Display name
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    /// Description
    #[validate(length(min = 1))]
    #[serde(default)]
    pub description: String,
    /// Sport name from the catalog
    #[validate(length(min = 1))]
    #[serde(default)]
    pub sport: String,
}

/// New player form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewPlayer {
    /// Full name
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    /// Sport name
    #[validate(length(min = 1))]
    #[serde(default)]
    pub sport: String,
    /// Team abbreviation
    #[validate(length(min = 1))]
    #[serde(default)]
    pub team: String,
    /// Jersey number
    #[validate(length(min = 1))]
    #[serde(default)]
    pub jersey_number: String,
    /// Position
    #[validate(length(min = 1))]
    #[serde(default)]
    pub position: String,
}

/// New line form, every field as typed by the admin
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewLine {
    /// Selected player id
    #[validate(length(min = 1))]
    #[serde(default)]
    pub player_id: String,
    /// Selected stat type id
    #[validate(length(min = 1))]
    #[serde(default)]
    pub stat_type_id: String,
    /// Threshold, parsed as a float on submit
    #[validate(length(min = 1))]
    #[serde(default)]
    pub value: String,
    /// Kickoff label
    #[validate(length(min = 1))]
    #[serde(default)]
    pub game_time: String,
    /// Over price
    #[validate(length(min = 1))]
    #[serde(default)]
    pub over_odds: String,
    /// Under price
    #[validate(length(min = 1))]
    #[serde(default)]
    pub under_odds: String,
}

fn trim(field: &mut String) {
    let trimmed = field.trim();
    if trimmed.len() != field.len() {
        *field = trimmed.to_string();
    }
}

/// Forms whose text fields are trimmed before validation
pub trait Normalize {
    /// Trim surrounding whitespace from every field
    #[must_use]
    fn normalized(self) -> Self;
}

impl Normalize for NewStatType {
    fn normalized(mut self) -> Self {
        trim(&mut self.name);
        trim(&mut self.description);
        trim(&mut self.sport);
        self
    }
}

impl Normalize for NewPlayer {
    fn normalized(mut self) -> Self {
        trim(&mut self.name);
        trim(&mut self.sport);
        trim(&mut self.team);
        trim(&mut self.jersey_number);
        trim(&mut self.position);
        self
    }
}

impl Normalize for NewLine {
    fn normalized(mut self) -> Self {
        trim(&mut self.player_id);
        trim(&mut self.stat_type_id);
        trim(&mut self.value);
        trim(&mut self.game_time);
        trim(&mut self.over_odds);
        trim(&mut self.under_odds);
        self
    }
}

/// Normalize `form` and reject it when any required field is empty
///
/// # Errors
///
/// Returns [`Error::IncompleteForm`] listing the empty fields.
pub fn require_complete<T: Normalize + Validate>(form: T) -> Result<T> {
    let form = form.normalized();
    form.validate().map_err(|errors| {
        let mut missing: Vec<String> = errors
            .field_errors()
            .keys()
            .map(ToString::to_string)
            .collect();
        missing.sort();
        Error::IncompleteForm { missing }
    })?;
    Ok(form)
}
