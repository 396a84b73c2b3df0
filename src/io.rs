//! Instance-file parsing and tour-file serialization.
//!
//! The instance format is a `NAME = <string>` line, a `SIZE = <n>` line,
//! then the n·(n−1)/2 strictly-upper-triangular distances in row-major
//! order, separated by commas and/or newlines. The output format lists the
//! best tour as 1-based city indices without the closing duplicate.

use std::fs;
use std::path::Path;

use crate::error::{Result, TspError};
use crate::model::{Tour, TspInstance};

/// Parses an instance from its text representation.
///
/// # Errors
///
/// All structural problems — missing headers, a size/entry-count mismatch,
/// or non-numeric distances — surface as [`TspError::MalformedInstance`].
///
/// # Examples
///
/// ```
/// use tsp_heur::io::parse_instance;
///
/// let text = "NAME = tiny,\nSIZE = 3,\n1,2,\n3";
/// let instance = parse_instance(text).unwrap();
/// assert_eq!(instance.name(), "tiny");
/// assert_eq!(instance.size(), 3);
/// assert!((instance.distance(1, 2) - 3.0).abs() < 1e-12);
/// ```
pub fn parse_instance(text: &str) -> Result<TspInstance> {
    let tokens: Vec<&str> = text
        .split(|c| c == ',' || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() < 2 {
        return Err(TspError::MalformedInstance(
            "expected NAME and SIZE headers".into(),
        ));
    }

    let name = keyed_value(tokens[0], "NAME")?;
    let size: usize = keyed_value(tokens[1], "SIZE")?.parse().map_err(|_| {
        TspError::MalformedInstance(format!("SIZE is not an integer: `{}`", tokens[1]))
    })?;

    let expected = if size < 2 { 0 } else { size * (size - 1) / 2 };
    let rest = &tokens[2..];
    if size >= 2 && rest.len() != expected {
        return Err(TspError::MalformedInstance(format!(
            "expected {expected} distances for {size} cities, found {}",
            rest.len()
        )));
    }

    let mut entries = Vec::with_capacity(expected);
    for token in rest {
        let d: u64 = token.parse().map_err(|_| {
            TspError::MalformedInstance(format!("distance is not a positive integer: `{token}`"))
        })?;
        entries.push(d as f64);
    }

    TspInstance::from_upper_triangular(name, size, &entries)
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<TspInstance> {
    let text = fs::read_to_string(path)?;
    parse_instance(&text)
}

/// Formats a best-found tour in the output file format: name, tour size,
/// integer length, then the visiting order as comma-separated 1-based city
/// indices with the circular closing city omitted.
pub fn format_tour(instance: &TspInstance, tour: &Tour) -> String {
    let cities: Vec<String> = tour.order().iter().map(|&c| (c + 1).to_string()).collect();
    format!(
        "NAME = {}\nTOURSIZE = {}\nLENGTH = {}\n{}\n",
        instance.name(),
        instance.size(),
        tour.length().round() as i64,
        cities.join(",")
    )
}

/// Writes a best-found tour to a file in the output format.
pub fn write_tour(path: impl AsRef<Path>, instance: &TspInstance, tour: &Tour) -> Result<()> {
    fs::write(path, format_tour(instance, tour))?;
    Ok(())
}

fn keyed_value<'a>(token: &'a str, key: &str) -> Result<&'a str> {
    let (k, v) = token.split_once('=').ok_or_else(|| {
        TspError::MalformedInstance(format!("expected `{key} = ...`, got `{token}`"))
    })?;
    if k.trim() != key {
        return Err(TspError::MalformedInstance(format!(
            "expected `{key}` header, got `{}`",
            k.trim()
        )));
    }
    Ok(v.trim())
}
