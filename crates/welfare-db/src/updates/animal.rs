//! Animal registration input and update builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields supplied when registering an animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub birth_date: NaiveDate,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnimalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl AnimalUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.birth_date.is_none()
            && self.photo_url.is_none()
            && self.notes.is_none()
    }
}

#[derive(Debug, Default)]
pub struct AnimalUpdateBuilder(AnimalUpdate);

impl AnimalUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn species(mut self, val: impl Into<String>) -> Self {
        self.0.species = Some(val.into());
        self
    }

    #[must_use]
    pub const fn birth_date(mut self, val: NaiveDate) -> Self {
        self.0.birth_date = Some(val);
        self
    }

    /// `None` clears the photo reference.
    #[must_use]
    pub fn photo_url(mut self, val: Option<String>) -> Self {
        self.0.photo_url = Some(val);
        self
    }

    /// `None` clears the notes.
    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> AnimalUpdate {
        self.0
    }
}
