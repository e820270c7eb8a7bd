use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::geo::Coordinate;

/// What a neighborhood report is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Disaster,
    Infrastructure,
    Safety,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Disaster => "disaster",
            Category::Infrastructure => "infrastructure",
            Category::Safety => "safety",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disaster" => Ok(Category::Disaster),
            "infrastructure" => Ok(Category::Infrastructure),
            "safety" => Ok(Category::Safety),
            other => Err(format!(
                "unknown category '{}', must be one of: disaster, infrastructure, safety",
                other
            )),
        }
    }
}

/// A user-submitted neighborhood report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub geolocation: Coordinate,
    pub userid: String,
    /// Unix epoch seconds at submission time.
    pub timestamp: i64,
    /// Human-readable UTC date at submission time.
    pub datestamp: String,
    #[serde(default)]
    pub imagelink: String,
}

impl Report {
    /// Build a report stamped with the current time.
    pub fn new(
        title: String,
        category: Category,
        description: String,
        geolocation: Coordinate,
        userid: String,
        imagelink: Option<String>,
    ) -> Self {
        let now: DateTime<Utc> = Utc::now();
        Self {
            title,
            category,
            description,
            geolocation,
            userid,
            timestamp: now.timestamp(),
            datestamp: now.format("%Y-%m-%d").to_string(),
            imagelink: imagelink.unwrap_or_default(),
        }
    }

    /// Validate field contents.
    /// Returns all validation errors at once (not just the first).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("title: must not be empty".to_string());
        }
        if self.description.trim().is_empty() {
            errors.push("description: must not be empty".to_string());
        }
        if self.userid.trim().is_empty() {
            errors.push("userid: must not be empty".to_string());
        }
        if !self.geolocation.is_finite() {
            errors.push("geolocation: coordinates must be finite".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// All reports on disk, newest appended last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLog {
    pub version: u32,
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl Default for ReportLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportLog {
    /// Create a new empty report log with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            reports: Vec::new(),
        }
    }

    pub fn add(&mut self, report: Report) {
        self.reports.push(report);
    }

    /// Remove a report by 1-based index into the newest-first listing.
    /// Returns the removed report, or None if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Report> {
        if index < 1 || index > self.reports.len() {
            return None;
        }
        // Listing is newest-first; storage is oldest-first
        let storage_index = self.reports.len() - index;
        Some(self.reports.remove(storage_index))
    }

    /// Reports in listing order, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter().rev()
    }
}
