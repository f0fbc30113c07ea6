//! Reader for the CLDR `windowsZones.xml` mapping data.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::Path;

use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Error;
use crate::territory;

/// One Windows-zone/territory pairing from `windowsZones.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneDataRecord {
    /// 1-based position of the Windows ID in `tables::WINDOWS_ID_LIST`.
    pub windows_key: u16,
    /// Numeric territory code.
    pub territory_id: u16,
    /// Territory display name.
    pub territory: &'static str,
    /// Windows ID display name.
    pub windows_id: String,
    /// IANA IDs for this pairing, space-separated, in preference order.
    pub iana_list: String,
}

/// Default IANA ID per Windows ID key, from the world (`001`) entries.
pub type DefaultIanaMap = BTreeMap<u16, String>;

/// Zone data records keyed by `(windows_key, territory_id)`.
///
/// A `BTreeMap` so iteration is already in the emission order.
pub type ZoneRecordMap = BTreeMap<(u16, u16), ZoneDataRecord>;

/// Reads the Windows time zone mappings of an unpacked CLDR release.
///
/// `lookup` maps each known Windows ID to its 1-based key, as produced by
/// `tables::windows_id_lookup`. Returns the CLDR version string, the default
/// IANA ID for each Windows key, and one record per Windows-zone/territory
/// pair.
pub fn read_windows_time_zones(
    cldr_root: &Path,
    lookup: &HashMap<&'static str, u16>,
) -> Result<(String, DefaultIanaMap, ZoneRecordMap), Error> {
    let version = cldr_version(cldr_root)?;
    let text = read_file(&cldr_root.join("common").join("supplemental").join("windowsZones.xml"))?;

    let mut defaults = DefaultIanaMap::new();
    let mut records = ZoneRecordMap::new();
    let mut unknown: Vec<String> = Vec::new();

    let mut reader = Reader::from_str(&text);
    loop {
        match reader.read_event()? {
            Event::Empty(element) | Event::Start(element)
                if element.name().as_ref() == b"mapZone" =>
            {
                let windows_id = required_attribute(&element, "other")?;
                let territory_code = required_attribute(&element, "territory")?;
                let iana_list = required_attribute(&element, "type")?
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ");

                let Some(&windows_key) = lookup.get(windows_id.as_str()) else {
                    if !unknown.contains(&windows_id) {
                        unknown.push(windows_id);
                    }
                    continue;
                };

                let first_iana = iana_list.split(' ').next().filter(|id| !id.is_empty());
                let Some(first_iana) = first_iana else {
                    return Err(Error::Data(format!(
                        "mapZone for '{}' / '{}' has an empty IANA list",
                        windows_id, territory_code
                    )));
                };

                if territory_code == "001" {
                    defaults.insert(windows_key, first_iana.to_owned());
                } else {
                    let Some((territory_id, territory)) = territory::lookup(&territory_code)
                    else {
                        return Err(Error::Data(format!(
                            "unknown territory code '{}' for Windows ID '{}'; \
                             add it to territory::TERRITORY_LIST",
                            territory_code, windows_id
                        )));
                    };
                    records.insert(
                        (windows_key, territory_id),
                        ZoneDataRecord {
                            windows_key,
                            territory_id,
                            territory,
                            windows_id,
                            iana_list,
                        },
                    );
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !unknown.is_empty() {
        return Err(Error::Data(format!(
            "unknown Windows ID(s): {}; add them to tables::WINDOWS_ID_LIST \
             with their standard offsets",
            unknown.join(", ")
        )));
    }

    Ok((version, defaults, records))
}

/// Scans `common/dtd/ldml.dtd` for the release's `cldrVersion` value.
fn cldr_version(cldr_root: &Path) -> Result<String, Error> {
    let path = cldr_root.join("common").join("dtd").join("ldml.dtd");
    let text = read_file(&path)?;
    for line in text.lines() {
        // <!ATTLIST version cldrVersion CDATA #FIXED "45" >
        if !line.contains("cldrVersion") {
            continue;
        }
        if let Some(fixed) = line.find("#FIXED").map(|i| &line[i..]) {
            let mut quoted = fixed.split('"');
            if let (Some(_), Some(version)) = (quoted.next(), quoted.next()) {
                return Ok(version.to_owned());
            }
        }
    }
    Err(Error::Data(format!("no cldrVersion found in {}", path.display())))
}

fn required_attribute(element: &BytesStart<'_>, name: &str) -> Result<String, Error> {
    match element.try_get_attribute(name)? {
        Some(attribute) => Ok(attribute.unescape_value()?.into_owned()),
        None => Err(Error::Data(format!("mapZone element missing '{}' attribute", name))),
    }
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|e| Error::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::read_windows_time_zones;
    use crate::error::Error;
    use crate::tables;

    const DTD: &str = r#"<!ELEMENT ldml (identity, (alias | (fallback*, localeDisplayNames?))) >
<!ATTLIST version cldrVersion CDATA #FIXED "45" >
"#;

    fn write_cldr_tree(root: &Path, zones: &str) {
        fs::create_dir_all(root.join("common/dtd")).unwrap();
        fs::create_dir_all(root.join("common/supplemental")).unwrap();
        fs::write(root.join("common/dtd/ldml.dtd"), DTD).unwrap();
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <supplementalData>\n\
             \t<windowsZones>\n\
             \t\t<mapTimezones otherVersion=\"7e11800\" typeVersion=\"2021a\">\n\
             {}\
             \t\t</mapTimezones>\n\
             \t</windowsZones>\n\
             </supplementalData>\n",
            zones
        );
        fs::write(root.join("common/supplemental/windowsZones.xml"), xml).unwrap();
    }

    #[test]
    fn reads_defaults_and_records() {
        let dir = tempfile::tempdir().unwrap();
        write_cldr_tree(
            dir.path(),
            "\t\t\t<mapZone other=\"Eastern Standard Time\" territory=\"001\" type=\"America/New_York\"/>\n\
             \t\t\t<mapZone other=\"Eastern Standard Time\" territory=\"US\" type=\"America/New_York  America/Detroit\"/>\n\
             \t\t\t<mapZone other=\"Eastern Standard Time\" territory=\"CA\" type=\"America/Toronto\"/>\n",
        );

        let lookup = tables::windows_id_lookup();
        let (version, defaults, records) =
            read_windows_time_zones(dir.path(), &lookup).unwrap();
        let key = lookup["Eastern Standard Time"];

        assert_eq!(version, "45");
        assert_eq!(defaults[&key], "America/New_York");
        assert_eq!(records.len(), 2);

        let us = &records[&(key, 840)];
        assert_eq!(us.territory, "United States");
        assert_eq!(us.windows_id, "Eastern Standard Time");
        // Runs of whitespace in the type attribute collapse to single spaces.
        assert_eq!(us.iana_list, "America/New_York America/Detroit");
        assert_eq!(records[&(key, 124)].iana_list, "America/Toronto");
    }

    #[test]
    fn unknown_windows_ids_are_reported_together() {
        let dir = tempfile::tempdir().unwrap();
        write_cldr_tree(
            dir.path(),
            "\t\t\t<mapZone other=\"Nowhere Standard Time\" territory=\"001\" type=\"Etc/GMT\"/>\n\
             \t\t\t<mapZone other=\"Nowhere Standard Time\" territory=\"US\" type=\"Etc/GMT\"/>\n\
             \t\t\t<mapZone other=\"Atlantis Standard Time\" territory=\"001\" type=\"Etc/GMT\"/>\n",
        );

        let error =
            read_windows_time_zones(dir.path(), &tables::windows_id_lookup()).unwrap_err();
        match error {
            Error::Data(message) => {
                assert!(message.contains("Nowhere Standard Time"), "{}", message);
                assert!(message.contains("Atlantis Standard Time"), "{}", message);
                // Each offender is listed once, however many territories it maps.
                assert_eq!(message.matches("Nowhere Standard Time").count(), 1);
            }
            other => panic!("expected a data error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_territory_is_a_data_error() {
        let dir = tempfile::tempdir().unwrap();
        write_cldr_tree(
            dir.path(),
            "\t\t\t<mapZone other=\"Eastern Standard Time\" territory=\"Q9\" type=\"Etc/GMT\"/>\n",
        );

        let error =
            read_windows_time_zones(dir.path(), &tables::windows_id_lookup()).unwrap_err();
        match error {
            Error::Data(message) => assert!(message.contains("Q9"), "{}", message),
            other => panic!("expected a data error, got {:?}", other),
        }
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let error =
            read_windows_time_zones(dir.path(), &tables::windows_id_lookup()).unwrap_err();
        assert!(matches!(error, Error::Io(_)), "unexpected error: {:?}", error);
    }
}
