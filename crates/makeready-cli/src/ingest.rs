//! Pole row ingestion from JSON exports of the survey table.

use crate::error::{CliError, Result};
use makeready_domain::traits::PoleSource;
use makeready_domain::{Cell, Pole, PoleId, TagCandidate};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Owner assigned when the raw owner name is not in the alias table
pub const UNKNOWN_OWNER: &str = "Surveyed / Unknown Owner";

/// Columns consulted by the tag merge, in order
pub const TAG_CANDIDATE_COLUMNS: [&str; 3] =
    ["verizon pennsylvania inc._tag", "pole_tag", "unknown_tag"];

const SCID: &str = "SCID";
const LATITUDE: &str = "Latitude";
const LONGITUDE: &str = "Longitude";
const POLE_TYPE: &str = "Pole Type";
const TAG: &str = "Tag";
const OWNER: &str = "Owner";
const NOTES: &str = "Make Ready Notes";
const ADDRESS: &str = "address";
const TELCO_TAG: &str = "verizon pennsylvania inc._tag";

const OWNER_ALIASES: &[(&str, &str)] = &[
    ("PPL Company", "PPL"),
    ("Verizon Pennsylvania Inc.", "Verizon"),
    ("Frontier Communications of PA. - New Holland", "Frontier"),
    ("Frontier Communications of PA. - New Holland Telecom", "Frontier"),
    ("Frontier Communications - Lakewood", "Frontier"),
    ("Frontier Communications - Lakewood Telecom", "Frontier"),
    ("Commonwealth Telephone Co.  dba Frontier Comm.", "Frontier"),
    ("Commonwealth Telephone Co.  dba Frontier Comm. Telecom", "Frontier"),
    ("Loop Telecom Pennsylvania LLC", "Loop Internet"),
    ("UGI Utilities - Electric Division", "UGI"),
    ("UGI Utilities - Gas", "UGI"),
    ("UGI PENN NATURAL GAS, INC", "UGI"),
    ("Service Electric Cablevision Inc - Mahanoy City", "Service Electric"),
    ("Service Electric Cablevision", "Service Electric"),
    ("Service Electric Cable TV Inc.", "Service Electric"),
    ("Service Electric Company - Wilkes-Barre", "Service Electric"),
    ("Upper Oxford Twp, Chester Co.", "Xfinity"),
    ("City of Scranton - Wireless", "City of Scranton"),
    ("City of Scranton", "City of Scranton"),
    (
        "City of Scranton Office of Economic & Community Development",
        "City of Scranton",
    ),
    ("CTSI, LLC, dba Frontier Communications", "CTSI"),
];

/// Map a raw owner name to its canonical short name.
///
/// Matching is exact; anything unlisted is an unknown owner.
pub fn canonical_owner(raw: &str) -> &'static str {
    OWNER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map_or(UNKNOWN_OWNER, |(_, canonical)| *canonical)
}

/// Convert a JSON cell to a spreadsheet cell.
pub fn cell_from_json(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::String(s) => Cell::Text(s.clone()),
        Value::Number(n) => n.as_f64().map_or(Cell::Empty, Cell::Number),
        Value::Bool(b) => Cell::Text(b.to_string()),
        other => Cell::Text(other.to_string()),
    }
}

fn cell(row: &Map<String, Value>, key: &str) -> Cell {
    row.get(key).map_or(Cell::Empty, cell_from_json)
}

fn coordinate(row: &Map<String, Value>, key: &str) -> f64 {
    match cell(row, key) {
        Cell::Number(n) => n,
        Cell::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        Cell::Empty => f64::NAN,
    }
}

/// Build a pole from one input row.
///
/// `index` is the zero-based row position, used in errors.
pub fn pole_from_row(index: usize, row: &Map<String, Value>) -> Result<Pole> {
    let id = match cell(row, SCID) {
        Cell::Empty => {
            return Err(CliError::InvalidInput(format!(
                "row {} has no {} value",
                index + 1,
                SCID
            )))
        }
        scid => PoleId::new(scid.to_string()),
    };

    let owner = match row.get(OWNER) {
        Some(Value::String(raw)) => canonical_owner(raw),
        _ => UNKNOWN_OWNER,
    };

    let tag_candidates = TAG_CANDIDATE_COLUMNS
        .iter()
        .filter_map(|column| {
            row.get(*column).map(|value| TagCandidate {
                column: column.to_string(),
                value: cell_from_json(value),
            })
        })
        .collect();

    Ok(Pole {
        id,
        latitude: coordinate(row, LATITUDE),
        longitude: coordinate(row, LONGITUDE),
        telco_tag: cell(row, TELCO_TAG),
        elco_tag: cell(row, TAG),
        address: cell(row, ADDRESS),
        owner: owner.to_string(),
        pole_type: cell(row, POLE_TYPE),
        note: cell(row, NOTES),
        tag_candidates,
    })
}

/// Reads poles from a JSON array of row objects.
pub struct JsonPoleSource<R> {
    reader: R,
}

impl<R: Read> JsonPoleSource<R> {
    /// Read rows from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl JsonPoleSource<BufReader<File>> {
    /// Open a JSON file of pole rows.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> PoleSource for JsonPoleSource<R> {
    type Error = CliError;

    fn load_poles(&mut self) -> Result<Vec<Pole>> {
        let rows: Vec<Map<String, Value>> = serde_json::from_reader(&mut self.reader)?;
        let poles = rows
            .iter()
            .enumerate()
            .map(|(index, row)| pole_from_row(index, row))
            .collect::<Result<Vec<_>>>()?;
        debug!(rows = poles.len(), "loaded pole rows");
        Ok(poles)
    }
}
