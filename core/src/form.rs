// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};

use crate::datetime::{STABLE_FORMAT_DATE, parse_date};
use crate::event::{CalendarEvent, Category};

/// Values used to pre-populate the form when creating an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub start_time: String,
    pub end_time: String,
    pub category: Category,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            category: Category::default(),
        }
    }
}

/// Whether the form creates a new event or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CalendarEvent),
}

/// The editable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Date,
    Start,
    End,
    Category,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Date,
        FormField::Start,
        FormField::End,
        FormField::Category,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Date => "Date",
            FormField::Start => "Start time",
            FormField::End => "End time",
            FormField::Category => "Category",
            FormField::Description => "Description",
        }
    }
}

/// Reasons a submission is rejected. The form stays open in both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// The date text is not `YYYY-MM-DD`.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// A finalized event produced by [`EventForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created(CalendarEvent),
    Updated(CalendarEvent),
}

impl Submission {
    pub fn event(&self) -> &CalendarEvent {
        match self {
            Submission::Created(e) | Submission::Updated(e) => e,
        }
    }

    pub fn into_event(self) -> CalendarEvent {
        match self {
            Submission::Created(e) | Submission::Updated(e) => e,
        }
    }
}

/// Editable draft of an event. Text fields hold exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    mode: FormMode,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub category: Category,
}

impl EventForm {
    /// A blank form for a new event on `date`.
    pub fn create(date: NaiveDate, defaults: &FormDefaults) -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            date: date.format(STABLE_FORMAT_DATE).to_string(),
            start_time: defaults.start_time.clone(),
            end_time: defaults.end_time.clone(),
            description: String::new(),
            category: defaults.category,
        }
    }

    /// A form pre-populated from an existing event.
    pub fn edit(event: &CalendarEvent) -> Self {
        Self {
            mode: FormMode::Edit(event.clone()),
            title: event.title.clone(),
            date: event.date.format(STABLE_FORMAT_DATE).to_string(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            description: event.description.clone().unwrap_or_default(),
            category: event.effective_category(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Id of the event being edited.
    pub fn event_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(e) => Some(&e.id),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn set_start_time(&mut self, start_time: impl Into<String>) {
        self.start_time = start_time.into();
    }

    pub fn set_end_time(&mut self, end_time: impl Into<String>) {
        self.end_time = end_time.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.category = match forward {
            true => self.category.next(),
            false => self.category.prev(),
        };
    }

    /// Text value of a field, the category is rendered by name.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.title.clone(),
            FormField::Date => self.date.clone(),
            FormField::Start => self.start_time.clone(),
            FormField::End => self.end_time.clone(),
            FormField::Category => self.category.to_string(),
            FormField::Description => self.description.clone(),
        }
    }

    /// Replaces the text of a field. Setting the category is done through
    /// [`Self::set_category`], text for it is ignored unless it names one.
    pub fn set_value(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Date => self.date = value,
            FormField::Start => self.start_time = value,
            FormField::End => self.end_time = value,
            FormField::Category => {
                if let Ok(c) = value.parse() {
                    self.category = c;
                }
            }
            FormField::Description => self.description = value,
        }
    }

    /// Validates the draft and produces the event to commit.
    pub fn submit(&self, now: DateTime<Utc>) -> Result<Submission, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }

        let date =
            parse_date(&self.date).ok_or_else(|| FormError::InvalidDate(self.date.clone()))?;

        let description = match self.description.trim() {
            "" => None,
            a => Some(a.to_string()),
        };

        Ok(match &self.mode {
            FormMode::Create => Submission::Created(CalendarEvent {
                id: uuid::Uuid::new_v4().to_string(),
                title: title.to_string(),
                date,
                start_time: self.start_time.clone(),
                end_time: self.end_time.clone(),
                description,
                category: Some(self.category),
                color: None,
                created_at: now,
                updated_at: now,
            }),
            FormMode::Edit(original) => Submission::Updated(CalendarEvent {
                id: original.id.clone(),
                title: title.to_string(),
                date,
                start_time: self.start_time.clone(),
                end_time: self.end_time.clone(),
                description,
                category: Some(self.category),
                color: original.color.clone(),
                created_at: original.created_at,
                updated_at: now,
            }),
        })
    }

    /// The id to delete, only available while editing.
    pub fn delete_request(&self) -> Option<String> {
        self.event_id().map(str::to_string)
    }
}
