//! Display-ready snapshots of the selection state.
//!
//! The rendering layer only consumes these; it never feeds anything back.

use std::fmt::{self, Write as _};

use chrono::{DateTime, Local, TimeZone};
use floorpick_core::SavedLocation;
use floorpick_plan::SelectionState;
use floorpick_settings::DEFAULT_DATE_FORMAT;
use serde::Serialize;

pub const HEADLINE_SELECTED: &str = "Local selecionado";
pub const HEADLINE_EMPTY: &str = "Nenhum local selecionado";

/// Status panel contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub has_selection: bool,
    pub confirmed: bool,
    pub headline: &'static str,
    pub sector_label: Option<String>,
    pub table_id: Option<u32>,
    /// Model-space coordinates rounded for display
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub can_confirm: bool,
    pub can_clear: bool,
}

impl StatusView {
    pub fn from_state(state: &SelectionState, coordinate_decimals: u8) -> Self {
        let (selection, confirmed) = match state {
            SelectionState::Empty => (None, false),
            SelectionState::Selected(selection) => (Some(selection.clone()), false),
            SelectionState::Confirmed(saved) => (Some(saved.selection()), true),
        };

        match selection {
            None => Self {
                has_selection: false,
                confirmed: false,
                headline: HEADLINE_EMPTY,
                sector_label: None,
                table_id: None,
                x: None,
                y: None,
                can_confirm: false,
                can_clear: false,
            },
            Some(selection) => Self {
                has_selection: true,
                confirmed,
                headline: HEADLINE_SELECTED,
                sector_label: Some(selection.sector_label),
                table_id: selection.table_id,
                x: Some(round_to(selection.x, coordinate_decimals)),
                y: Some(round_to(selection.y, coordinate_decimals)),
                can_confirm: !confirmed,
                can_clear: !confirmed,
            },
        }
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline)?;
        if let Some(label) = &self.sector_label {
            write!(f, ": {}", label)?;
        }
        if let Some(id) = self.table_id {
            write!(f, " #{}", id)?;
        }
        if let (Some(x), Some(y)) = (self.x, self.y) {
            write!(f, " ({}, {})", x, y)?;
        }
        Ok(())
    }
}

/// Confirmation panel contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmationView {
    /// `#<id>` for table selections
    pub table: Option<String>,
    pub sector_label: String,
    pub confirmed_at: String,
}

impl ConfirmationView {
    /// Builds the view with the timestamp rendered in local time.
    pub fn from_saved(saved: &SavedLocation, date_format: &str) -> Self {
        Self::from_saved_in(saved, date_format, &Local)
    }

    /// Builds the view with the timestamp rendered in `tz`.
    pub fn from_saved_in<Tz>(saved: &SavedLocation, date_format: &str, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let confirmed_at = match DateTime::from_timestamp_millis(saved.timestamp) {
            Some(utc) => format_date(&utc.with_timezone(tz), date_format),
            None => saved.timestamp.to_string(),
        };

        Self {
            table: saved.table_id.map(|id| format!("#{}", id)),
            sector_label: saved.sector_label.clone(),
            confirmed_at,
        }
    }
}

fn format_date<Tz>(date: &DateTime<Tz>, date_format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_ok() {
        return out;
    }
    tracing::warn!("Unusable date format '{}', using default", date_format);
    date.format(DEFAULT_DATE_FORMAT).to_string()
}

fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}
