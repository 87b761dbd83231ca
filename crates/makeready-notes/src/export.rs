//! Sheet layouts for exporting records
//!
//! Each sheet is an ordered mapping from column name to an ordered column of
//! values. Columns that the regulator form reserves for its own use are
//! present and left blank.

use makeready_domain::{
    AttachmentInfoRecord, AttachmentRecord, Cell, Pole, PoleDetailRecord, RecordSet,
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Make-ready sheet name
pub const MAKE_READY_SHEET: &str = "Make Ready";
/// Attachment-info sheet name
pub const ATTACHMENT_INFO_SHEET: &str = "Attachment Info";
/// Pole-details sheet name
pub const POLE_DETAILS_SHEET: &str = "Pole Details";
/// Pole import sheet name
pub const VETRO_SHEET: &str = "Vetro";
/// Make-ready notes sheet name
pub const MRN_SHEET: &str = "MRN";

const POLE_REF: &str = "Pole Ref #";
const TELCO_POLE: &str = "Telco Pole #";
const ELCO_POLE: &str = "ELCO Pole #";
const ROUTE_LINE: &str = "Route/Line (Verizon Use Only)";
const STREET_NAME: &str = "Street Name";

/// Make-ready sheet columns
pub const MAKE_READY_COLUMNS: [&str; 11] = [
    POLE_REF,
    TELCO_POLE,
    ELCO_POLE,
    ROUTE_LINE,
    STREET_NAME,
    "Attacher Company",
    "Attachment Type",
    "Action",
    "Existing Height",
    "New Height",
    "Quantity",
];

/// Attachment-info sheet columns
pub const ATTACHMENT_INFO_COLUMNS: [&str; 11] = [
    POLE_REF,
    TELCO_POLE,
    ELCO_POLE,
    ROUTE_LINE,
    STREET_NAME,
    "Attachment Description",
    "Number of Attachments",
    "Attachment Height",
    "Billing Description (Verizon Use Only)",
    "Fs/Rs OR Quad",
    "Comments",
];

/// Pole-details sheet columns
pub const POLE_DETAILS_COLUMNS: [&str; 17] = [
    POLE_REF,
    "MR Req",
    TELCO_POLE,
    ELCO_POLE,
    ROUTE_LINE,
    STREET_NAME,
    "Cross Street Name",
    "Location Description",
    "Latitude",
    "Longitude",
    "Height",
    "Class",
    "Exclude from Application (Verizon Use Only)",
    "Not Owned or Controlled by VZ (Verizon Use Only)",
    "Customer Already Attached",
    "Pole OTMR Qualified Y/N (Verizon Use Only)",
    "If No, Reason Why (Verizon Use Only)",
];

/// Pole import sheet columns
pub const VETRO_COLUMNS: [&str; 6] = ["Latitude", "Longitude", "SCID", "Pole Type", "Tag", "Owner"];

/// Make-ready notes sheet columns
pub const MRN_COLUMNS: [&str; 5] = ["SCID", "Tag", "Latitude", "Longitude", "Make Ready Notes"];

/// Convert a spreadsheet cell to an export value
pub fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::Null,
        Cell::Text(s) => Value::String(s.clone()),
        Cell::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    }
}

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// A named column of values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column header
    pub name: String,
    /// Values, one per row
    pub values: Vec<Value>,
}

/// A named sheet of equally long columns
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name
    pub name: String,
    /// Columns in display order
    pub columns: Vec<Column>,
}

impl Sheet {
    /// Create an empty sheet with the given headers
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            columns: headers
                .iter()
                .map(|h| Column {
                    name: h.to_string(),
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    /// Append a row given as `(header, value)` pairs
    ///
    /// Headers not named in `row` get a null value.
    pub fn push_row(&mut self, row: &[(&str, Value)]) {
        for column in &mut self.columns {
            let value = row
                .iter()
                .find(|(header, _)| *header == column.name)
                .map(|(_, value)| value.clone())
                .unwrap_or(Value::Null);
            column.values.push(value);
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Look up a column by header
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl Serialize for Sheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.name, &column.values)?;
        }
        map.end()
    }
}

/// An ordered set of sheets written as one artifact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    /// Sheets in order
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Look up a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

impl Serialize for Workbook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sheets.len()))?;
        for sheet in &self.sheets {
            map.serialize_entry(&sheet.name, sheet)?;
        }
        map.end()
    }
}

/// Build the make-ready sheet
pub fn make_ready_sheet(records: &[AttachmentRecord]) -> Sheet {
    let mut sheet = Sheet::new(MAKE_READY_SHEET, &MAKE_READY_COLUMNS);
    for r in records {
        sheet.push_row(&[
            (POLE_REF, text(r.pole.pole_ref.as_str())),
            (TELCO_POLE, cell_value(&r.pole.telco_tag)),
            (ELCO_POLE, cell_value(&r.pole.elco_tag)),
            ("Attacher Company", text(&r.attacher_company)),
            ("Attachment Type", text(&r.attachment_type)),
            ("Action", text(&r.action)),
            ("Existing Height", text(&r.existing_height)),
            ("New Height", text(&r.new_height)),
            ("Quantity", text(&r.quantity)),
        ]);
    }
    sheet
}

/// Build the attachment-info sheet
pub fn attachment_info_sheet(records: &[AttachmentInfoRecord]) -> Sheet {
    let mut sheet = Sheet::new(ATTACHMENT_INFO_SHEET, &ATTACHMENT_INFO_COLUMNS);
    for r in records {
        sheet.push_row(&[
            (POLE_REF, text(r.pole.pole_ref.as_str())),
            (TELCO_POLE, cell_value(&r.pole.telco_tag)),
            (ELCO_POLE, cell_value(&r.pole.elco_tag)),
            ("Attachment Description", text(&r.description)),
            ("Attachment Height", text(&r.height)),
        ]);
    }
    sheet
}

/// Build the pole-details sheet
pub fn pole_details_sheet(records: &[PoleDetailRecord]) -> Sheet {
    let mut sheet = Sheet::new(POLE_DETAILS_SHEET, &POLE_DETAILS_COLUMNS);
    for r in records {
        sheet.push_row(&[
            (POLE_REF, text(r.pole.pole_ref.as_str())),
            (TELCO_POLE, cell_value(&r.pole.telco_tag)),
            (ELCO_POLE, cell_value(&r.pole.elco_tag)),
            (STREET_NAME, text(&r.street_name)),
            ("Latitude", number(r.latitude)),
            ("Longitude", number(r.longitude)),
        ]);
    }
    sheet
}

/// Build the three-sheet make-ready workbook
pub fn make_ready_workbook(records: &RecordSet) -> Workbook {
    Workbook {
        sheets: vec![
            make_ready_sheet(&records.make_ready),
            attachment_info_sheet(&records.attachment_info),
            pole_details_sheet(&records.pole_details),
        ],
    }
}

/// Build the pole import sheet, one row per pole
pub fn vetro_sheet(poles: &[Pole]) -> Sheet {
    let mut sheet = Sheet::new(VETRO_SHEET, &VETRO_COLUMNS);
    for pole in poles {
        sheet.push_row(&[
            ("Latitude", number(pole.latitude)),
            ("Longitude", number(pole.longitude)),
            ("SCID", text(pole.id.as_str())),
            ("Pole Type", cell_value(&pole.pole_type)),
            ("Tag", cell_value(&pole.elco_tag)),
            ("Owner", text(&pole.owner)),
        ]);
    }
    sheet
}

/// Build the make-ready notes sheet, one row per pole
pub fn mrn_sheet(poles: &[Pole]) -> Sheet {
    let mut sheet = Sheet::new(MRN_SHEET, &MRN_COLUMNS);
    for pole in poles {
        sheet.push_row(&[
            ("SCID", text(pole.id.as_str())),
            ("Tag", cell_value(&pole.elco_tag)),
            ("Latitude", number(pole.latitude)),
            ("Longitude", number(pole.longitude)),
            ("Make Ready Notes", cell_value(&pole.note)),
        ]);
    }
    sheet
}
