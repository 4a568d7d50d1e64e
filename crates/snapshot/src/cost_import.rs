// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and validation for bulk cost import.
//!
//! Rows are parsed and validated without touching any snapshot. The caller
//! decides whether to merge the accepted rows.

use crate::error::SnapshotError;
use agency_dash_domain::{Cost, CostFrequency, validate_cost};
use csv::StringRecord;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["name", "category", "expected_amount", "recurring"];

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CostRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has errors and cannot be imported.
    Invalid,
}

/// A single row result from a cost import preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The parsed cost, when every field parsed.
    pub cost: Option<Cost>,
    /// The row status.
    pub status: CostRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Result of a cost import preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostImportPreview {
    /// Per-row results.
    pub rows: Vec<CostRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

impl CostImportPreview {
    /// Returns the costs from valid rows, in file order.
    #[must_use]
    pub fn accepted_costs(&self) -> Vec<Cost> {
        self.rows
            .iter()
            .filter(|row| row.status == CostRowStatus::Valid)
            .filter_map(|row| row.cost.clone())
            .collect()
    }
}

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, SnapshotError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !header_map.contains_key(**required))
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(SnapshotError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

fn parse_amount(field_name: &str, value: &str, errors: &mut Vec<String>) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Some(amount),
        _ => {
            errors.push(format!("{field_name}: invalid amount '{value}'"));
            None
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Parses a CSV row into a `Cost` if possible.
///
/// Returns `Err` with every problem found in the row.
fn parse_cost_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    row_number: usize,
) -> Result<Cost, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut required = |name: &str| -> String {
        get_field(name).unwrap_or_else(|| {
            errors.push(format!("{name}: required field is missing or empty"));
            String::new()
        })
    };

    let name: String = required("name");
    let category: String = required("category");
    let expected_str: String = required("expected_amount");
    let recurring_str: String = required("recurring");

    let expected_amount: Option<f64> = if expected_str.is_empty() {
        None
    } else {
        parse_amount("expected_amount", &expected_str, &mut errors)
    };

    let actual_amount: Option<f64> = get_field("actual_amount")
        .and_then(|value| parse_amount("actual_amount", &value, &mut errors));

    let recurring: bool = if recurring_str.is_empty() {
        false
    } else {
        parse_flag(&recurring_str).unwrap_or_else(|| {
            errors.push(format!(
                "recurring: invalid value '{recurring_str}' (must be true or false)"
            ));
            false
        })
    };

    let frequency: Option<CostFrequency> = get_field("frequency").and_then(|value| {
        match CostFrequency::from_str(&value.to_lowercase()) {
            Ok(frequency) => Some(frequency),
            Err(e) => {
                errors.push(format!("frequency: {e}"));
                None
            }
        }
    });

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Cost {
        id: get_field("id").unwrap_or_else(|| format!("import-{row_number}")),
        name,
        category,
        expected_amount: expected_amount.unwrap_or_default(),
        actual_amount,
        recurring,
        frequency,
    })
}

/// Previews and validates CSV cost data without merging it anywhere.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content
///
/// # Returns
///
/// Per-row results with valid/invalid counts. Duplicate ids within the file
/// mark the later rows invalid.
///
/// # Errors
///
/// Returns an error if the header row cannot be read or lacks a required
/// column.
pub fn preview_cost_import(csv_content: &str) -> Result<CostImportPreview, SnapshotError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| SnapshotError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut rows: Vec<CostRowResult> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                rows.push(CostRowResult {
                    row_number,
                    cost: None,
                    status: CostRowStatus::Invalid,
                    errors: vec![format!("CSV parse error: {e}")],
                });
                continue;
            }
        };

        match parse_cost_row(&record, &header_map, row_number) {
            Ok(cost) => {
                let mut errors: Vec<String> = Vec::new();

                if let Err(e) = validate_cost(&cost) {
                    errors.push(format!("validation: {e}"));
                }

                if !seen_ids.insert(cost.id.clone()) {
                    errors.push(format!(
                        "id: duplicate within CSV - '{}' appears multiple times",
                        cost.id
                    ));
                }

                let status: CostRowStatus = if errors.is_empty() {
                    CostRowStatus::Valid
                } else {
                    CostRowStatus::Invalid
                };

                rows.push(CostRowResult {
                    row_number,
                    cost: Some(cost),
                    status,
                    errors,
                });
            }
            Err(errors) => rows.push(CostRowResult {
                row_number,
                cost: None,
                status: CostRowStatus::Invalid,
                errors,
            }),
        }
    }

    let valid_count: usize = rows
        .iter()
        .filter(|row| row.status == CostRowStatus::Valid)
        .count();

    Ok(CostImportPreview {
        total_rows: rows.len(),
        valid_count,
        invalid_count: rows.len() - valid_count,
        rows,
    })
}
