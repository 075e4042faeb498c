//! CSV import of customer transactions
//!
//! Format: `date,description,amount,category,vendor` with a header row.

use std::collections::HashMap;
use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::NewTransaction;

/// Expected header, in column order
pub const EXPECTED_HEADERS: [&str; 5] = ["date", "description", "amount", "category", "vendor"];

/// Parse a transactions CSV
///
/// Identical rows in one file are kept apart by their occurrence count, so
/// two coffees bought the same day both import while re-importing the same
/// file changes nothing. A row whose category has changed since the last
/// import counts as a new transaction.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<NewTransaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_headers(&headers)?;

    let mut seen: HashMap<String, u32> = HashMap::new();
    let mut transactions = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = i + 2;

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let date = parse_date(field(&record, 0, "date", line)?)?;
        let description = field(&record, 1, "description", line)?.to_string();
        let amount = parse_amount(field(&record, 2, "amount", line)?)?;
        let category = field(&record, 3, "category", line)?.to_string();
        if category.is_empty() {
            return Err(Error::Import(format!("Missing category on line {}", line)));
        }
        let vendor = record.get(4).unwrap_or_default().to_string();

        let row_key = format!("{}|{}|{}|{}|{}", date, description, amount, category, vendor);
        let occurrence = seen.entry(row_key).or_insert(0);
        *occurrence += 1;

        let import_hash =
            generate_hash(&date, &description, amount, &category, &vendor, *occurrence);

        transactions.push(NewTransaction {
            date,
            description,
            amount,
            category,
            vendor,
            import_hash,
        });
    }

    debug!("Parsed {} transactions", transactions.len());
    Ok(transactions)
}

fn check_headers(headers: &StringRecord) -> Result<()> {
    let found: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    let matches = found.len() >= EXPECTED_HEADERS.len()
        && found.iter().zip(EXPECTED_HEADERS).all(|(a, b)| a == b);

    if matches {
        Ok(())
    } else {
        Err(Error::Import(format!(
            "Unexpected header '{}', expected '{}'",
            found.join(","),
            EXPECTED_HEADERS.join(",")
        )))
    }
}

fn field<'r>(record: &'r StringRecord, index: usize, name: &str, line: usize) -> Result<&'r str> {
    record
        .get(index)
        .ok_or_else(|| Error::Import(format!("Missing {} on line {}", name, line)))
}

/// Generate a unique hash for deduplication
fn generate_hash(
    date: &NaiveDate,
    description: &str,
    amount: Decimal,
    category: &str,
    vendor: &str,
    occurrence: u32,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(date.to_string().as_bytes());
    hasher.update(description.as_bytes());
    // normalize() so 10.5 and 10.50 hash the same
    hasher.update(amount.normalize().to_string().as_bytes());
    hasher.update(category.as_bytes());
    hasher.update(vendor.as_bytes());
    hasher.update(occurrence.to_be_bytes());
    hex::encode(hasher.finalize())
}

/// Parse a date string in the supported formats
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%d/%m/%Y", // 15/01/2024
        "%d-%m-%Y", // 15-01-2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling the pound sign, commas and (x) negatives
fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned: String = s
        .trim()
        .replace(['£', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<Decimal>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))
}
