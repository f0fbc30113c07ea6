//! Emits the generated tables in their fixed output order.
//!
//! The order is part of the output contract: downstream code indexes into the
//! string pools by position, so the pool contents, not just the table rows,
//! must be byte-identical across runs given identical input.

use chrono::NaiveDate;

use crate::cldr::{DefaultIanaMap, ZoneRecordMap};
use crate::error::Error;
use crate::pool::StringPool;
use crate::tables::{UTC_ID_LIST, WINDOWS_ID_LIST};

/// Writes the banner, the three lookup tables and the two string pools.
///
/// `today` is stamped into the banner; it is a parameter rather than read from
/// the clock so the emitted text is a pure function of the inputs.
pub fn write(
    out: &mut String,
    version: &str,
    today: NaiveDate,
    defaults: &DefaultIanaMap,
    records: &ZoneRecordMap,
) -> Result<(), Error> {
    write_banner(out, version, today);
    let (windows_pool, iana_pool) = write_tables(out, defaults, records)?;
    windows_pool.serialize(out, "windowsIdData");
    iana_pool.serialize(out, "ianaIdData");
    Ok(())
}

fn write_banner(out: &mut String, version: &str, today: NaiveDate) {
    out.push_str(&format!(
        "\n\
         /*\n    \
         This part of the file was generated on {} from the\n    \
         Common Locale Data Repository v{} file supplemental/windowsZones.xml\n\
         \n    \
         http://www.unicode.org/cldr/\n\
         \n    \
         Do not edit this code: run cldr2qtimezone on updated (or\n    \
         edited) CLDR data; see qtbase/util/locale_database/.\n\
         */\n\n",
        today, version
    ));
}

fn write_tables(
    out: &mut String,
    defaults: &DefaultIanaMap,
    records: &ZoneRecordMap,
) -> Result<(StringPool, StringPool), Error> {
    let mut windows_pool = StringPool::new();
    let mut iana_pool = StringPool::new();

    // Zone data, one row per Windows-zone/territory pair, sorted by key.
    out.push_str("// Windows ID Key, Territory Enum, IANA ID Index\n");
    out.push_str("static const QZoneData zoneDataTable[] = {\n");
    for record in records.values() {
        let iana_index = iana_pool.append(&record.iana_list)?;
        out.push_str(&format!(
            "    {{ {:6},{:6},{:6} }}, // {} / {}\n",
            record.windows_key, record.territory_id, iana_index, record.windows_id,
            record.territory
        ));
    }
    out.push_str("    {      0,     0,     0 } // Trailing zeroes\n");
    out.push_str("};\n\n");

    // Windows ID key table, one row per curated entry, 1-based ordinals.
    out.push_str("// Windows ID Key, Windows ID Index, IANA ID Index, UTC Offset\n");
    out.push_str("static const QWindowsData windowsDataTable[] = {\n");
    for (i, &(windows_id, offset_secs)) in WINDOWS_ID_LIST.iter().enumerate() {
        let ordinal = (i + 1) as u16;
        let default_iana = defaults.get(&ordinal).ok_or_else(|| {
            Error::Data(format!(
                "no default (001) IANA ID for Windows ID '{}' in the CLDR data",
                windows_id
            ))
        })?;
        let windows_index = windows_pool.append(windows_id)?;
        let iana_index = iana_pool.append(default_iana)?;
        out.push_str(&format!(
            "    {{ {:6},{:6},{:6},{:6} }}, // {}\n",
            ordinal, windows_index, iana_index, offset_secs, windows_id
        ));
    }
    out.push_str("    {      0,     0,     0,     0 } // Trailing zeroes\n");
    out.push_str("};\n\n");

    // UTC pseudo-zones.
    out.push_str("// IANA ID Index, UTC Offset\n");
    out.push_str("static const QUtcData utcDataTable[] = {\n");
    for &(id, offset_secs) in UTC_ID_LIST {
        let iana_index = iana_pool.append(id)?;
        out.push_str(&format!("    {{ {:6},{:6} }}, // {}\n", iana_index, offset_secs, id));
    }
    out.push_str("    {     0,      0 } // Trailing zeroes\n");
    out.push_str("};\n");

    Ok((windows_pool, iana_pool))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::write;
    use crate::cldr::{DefaultIanaMap, ZoneDataRecord, ZoneRecordMap};
    use crate::error::Error;
    use crate::tables::WINDOWS_ID_LIST;

    fn sample_input() -> (DefaultIanaMap, ZoneRecordMap) {
        let mut defaults = DefaultIanaMap::new();
        defaults.insert(1, "America/New_York".to_owned());
        for i in 2..=WINDOWS_ID_LIST.len() as u16 {
            defaults.insert(i, format!("Zone/Default_{}", i));
        }

        let mut records = ZoneRecordMap::new();
        records.insert(
            (1, 244),
            ZoneDataRecord {
                windows_key: 1,
                territory_id: 244,
                territory: "US",
                windows_id: "Eastern Standard Time".to_owned(),
                iana_list: "America/New_York".to_owned(),
            },
        );
        (defaults, records)
    }

    fn generate() -> String {
        let (defaults, records) = sample_input();
        let today = NaiveDate::from_ymd_opt(2024, 4, 17).unwrap();
        let mut out = String::new();
        write(&mut out, "45", today, &defaults, &records).unwrap();
        out
    }

    /// Parses the numbers between the braces of a table row.
    fn row_fields(line: &str) -> Vec<i64> {
        let start = line.find('{').unwrap() + 1;
        let end = line.find('}').unwrap();
        line[start..end].split(',').map(|field| field.trim().parse().unwrap()).collect()
    }

    #[test]
    fn zone_row_shares_pool_entry_with_default_row() {
        let out = generate();

        let zone_row = out
            .lines()
            .find(|line| line.ends_with("// Eastern Standard Time / US"))
            .expect("zone data row missing");
        let zone_fields = row_fields(zone_row);
        assert_eq!(zone_fields[0], 1);
        assert_eq!(zone_fields[1], 244);
        // First string appended to the IANA pool.
        assert_eq!(zone_fields[2], 0);

        // The windowsDataTable row for ordinal 1 uses the same default string,
        // so it must reference the same pool index.
        let windows_row = out
            .lines()
            .find(|line| line.ends_with(&format!("// {}", WINDOWS_ID_LIST[0].0)))
            .expect("windows data row missing");
        let windows_fields = row_fields(windows_row);
        assert_eq!(windows_fields[0], 1);
        assert_eq!(windows_fields[2], zone_fields[2]);
        assert_eq!(windows_fields[3], i64::from(WINDOWS_ID_LIST[0].1));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(generate(), generate());
    }

    #[test]
    fn banner_carries_date_and_version() {
        let out = generate();
        assert!(out.contains("generated on 2024-04-17 from the"));
        assert!(out.contains("Common Locale Data Repository v45"));
    }

    #[test]
    fn tables_appear_in_fixed_order_with_sentinels() {
        let out = generate();
        let positions: Vec<usize> = [
            "static const QZoneData zoneDataTable[] = {",
            "static const QWindowsData windowsDataTable[] = {",
            "static const QUtcData utcDataTable[] = {",
            "static const char windowsIdData[] = {",
            "static const char ianaIdData[] = {",
        ]
        .iter()
        .map(|needle| out.find(needle).expect(needle))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(out.contains("    {      0,     0,     0 } // Trailing zeroes"));
        assert!(out.contains("    {      0,     0,     0,     0 } // Trailing zeroes"));
        assert!(out.contains("    {     0,      0 } // Trailing zeroes"));
    }

    #[test]
    fn missing_default_is_a_data_error() {
        let (mut defaults, records) = sample_input();
        defaults.remove(&2);
        let today = NaiveDate::from_ymd_opt(2024, 4, 17).unwrap();
        let mut out = String::new();
        let error = write(&mut out, "45", today, &defaults, &records).unwrap_err();
        match error {
            Error::Data(message) => {
                assert!(message.contains(WINDOWS_ID_LIST[1].0), "{}", message)
            }
            other => panic!("expected a data error, got {:?}", other),
        }
    }

    #[test]
    fn utc_table_lists_every_utc_label() {
        let out = generate();
        let utc_table = &out[out.find("utcDataTable").unwrap()..];
        assert!(utc_table.contains("}, // UTC\n"));
        assert!(utc_table.contains("}, // UTC-14:00\n"));
        assert!(utc_table.contains("}, // UTC+14:00\n"));
    }
}
