// src/records.rs

use serde::{Deserialize, Serialize};

use crate::sheet::SheetTable;

/// One row of the ZIP Locale Detail sheet after renaming. Fields absent in
/// the source serialize as null.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRecord {
    pub area_name: Option<String>,
    pub area_code: Option<String>,
    pub district_name: Option<String>,
    pub district_no: Option<String>,
    pub delivery_zipcode: Option<String>,
    pub locale_name: Option<String>,
    pub physical_delivery_address: Option<String>,
    pub physical_city: Option<String>,
    pub physical_state: Option<String>,
    pub physical_zip: Option<String>,
    pub physical_zip4: Option<String>,
}

// Source columns exactly as the sheet spells them (case- and
// spacing-sensitive), in LocaleRecord field order.
const COLUMNS: [&str; 11] = [
    "AREA NAME",
    "AREA CODE",
    "DISTRICT NAME",
    "DISTRICT NO",
    "DELIVERY ZIPCODE",
    "LOCALE NAME",
    "PHYSICAL DELV ADDR",
    "PHYSICAL CITY",
    "PHYSICAL STATE",
    "PHYSICAL ZIP",
    "PHYSICAL ZIP 4",
];

/// Rename/reshape every sheet row into a LocaleRecord. Columns missing from
/// the header row map to None for every record.
pub fn normalize(table: &SheetTable) -> Vec<LocaleRecord> {
    let ix: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|want| table.headers.iter().position(|h| h == want))
        .collect();

    table
        .rows
        .iter()
        .map(|row| {
            let cell = |i: usize| ix[i].and_then(|c| row.get(c).cloned().flatten());
            LocaleRecord {
                area_name: cell(0),
                area_code: cell(1),
                district_name: cell(2),
                district_no: cell(3),
                delivery_zipcode: cell(4),
                locale_name: cell(5),
                physical_delivery_address: cell(6),
                physical_city: cell(7),
                physical_state: cell(8),
                physical_zip: cell(9),
                physical_zip4: cell(10),
            }
        })
        .collect()
}
