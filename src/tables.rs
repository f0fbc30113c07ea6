//! Curated reference data that may need updates in response to new entries in
//! the CLDR file.
//!
//! The generator reports the updates you need to make, if any arise. You may
//! need to research the relevant zone's standard offset; look it up using
//! (a search engine and) timeanddate.com.

use std::collections::HashMap;

/// Known Windows IDs with their standard UTC offset in seconds.
///
/// The position in this list, counted from 1, is the Windows ID key written to
/// the generated tables, so entries must never be removed and the order must
/// never change retroactively. Kept sorted case-insensitively by ID; if the
/// generator reports missing IDs, insert them at their sort position.
pub const WINDOWS_ID_LIST: &[(&str, i32)] = &[
    ("Afghanistan Standard Time", 16200),
    ("Alaskan Standard Time", -32400),
    ("Aleutian Standard Time", -36000),
    ("Altai Standard Time", 25200),
    ("Arab Standard Time", 10800),
    ("Arabian Standard Time", 14400),
    ("Arabic Standard Time", 10800),
    ("Argentina Standard Time", -10800),
    ("Astrakhan Standard Time", 14400),
    ("Atlantic Standard Time", -14400),
    ("AUS Central Standard Time", 34200),
    ("Aus Central W. Standard Time", 31500),
    ("AUS Eastern Standard Time", 36000),
    ("Azerbaijan Standard Time", 14400),
    ("Azores Standard Time", -3600),
    ("Bahia Standard Time", -10800),
    ("Bangladesh Standard Time", 21600),
    ("Belarus Standard Time", 10800),
    ("Bougainville Standard Time", 39600),
    ("Canada Central Standard Time", -21600),
    ("Cape Verde Standard Time", -3600),
    ("Caucasus Standard Time", 14400),
    ("Cen. Australia Standard Time", 34200),
    ("Central America Standard Time", -21600),
    ("Central Asia Standard Time", 21600),
    ("Central Brazilian Standard Time", -14400),
    ("Central Europe Standard Time", 3600),
    ("Central European Standard Time", 3600),
    ("Central Pacific Standard Time", 39600),
    ("Central Standard Time", -21600),
    ("Central Standard Time (Mexico)", -21600),
    ("Chatham Islands Standard Time", 45900),
    ("China Standard Time", 28800),
    ("Cuba Standard Time", -18000),
    ("Dateline Standard Time", -43200),
    ("E. Africa Standard Time", 10800),
    ("E. Australia Standard Time", 36000),
    ("E. Europe Standard Time", 7200),
    ("E. South America Standard Time", -10800),
    ("Easter Island Standard Time", -21600),
    ("Eastern Standard Time", -18000),
    ("Eastern Standard Time (Mexico)", -18000),
    ("Egypt Standard Time", 7200),
    ("Ekaterinburg Standard Time", 18000),
    ("Fiji Standard Time", 43200),
    ("FLE Standard Time", 7200),
    ("Georgian Standard Time", 14400),
    ("GMT Standard Time", 0),
    ("Greenland Standard Time", -10800),
    ("Greenwich Standard Time", 0),
    ("GTB Standard Time", 7200),
    ("Haiti Standard Time", -18000),
    ("Hawaiian Standard Time", -36000),
    ("India Standard Time", 19800),
    ("Iran Standard Time", 12600),
    ("Israel Standard Time", 7200),
    ("Jordan Standard Time", 7200),
    ("Kaliningrad Standard Time", 7200),
    ("Korea Standard Time", 32400),
    ("Libya Standard Time", 7200),
    ("Line Islands Standard Time", 50400),
    ("Lord Howe Standard Time", 37800),
    ("Magadan Standard Time", 36000),
    ("Magallanes Standard Time", -10800), // permanent DST
    ("Marquesas Standard Time", -34200),
    ("Mauritius Standard Time", 14400),
    ("Middle East Standard Time", 7200),
    ("Montevideo Standard Time", -10800),
    ("Morocco Standard Time", 0),
    ("Mountain Standard Time", -25200),
    ("Mountain Standard Time (Mexico)", -25200),
    ("Myanmar Standard Time", 23400),
    ("N. Central Asia Standard Time", 21600),
    ("Namibia Standard Time", 3600),
    ("Nepal Standard Time", 20700),
    ("New Zealand Standard Time", 43200),
    ("Newfoundland Standard Time", -12600),
    ("Norfolk Standard Time", 39600),
    ("North Asia East Standard Time", 28800),
    ("North Asia Standard Time", 25200),
    ("North Korea Standard Time", 30600),
    ("Omsk Standard Time", 21600),
    ("Pacific SA Standard Time", -10800),
    ("Pacific Standard Time", -28800),
    ("Pacific Standard Time (Mexico)", -28800),
    ("Pakistan Standard Time", 18000),
    ("Paraguay Standard Time", -14400),
    ("Qyzylorda Standard Time", 18000), // a.k.a. Kyzylorda, in Kazakhstan
    ("Romance Standard Time", 3600),
    ("Russia Time Zone 10", 39600),
    ("Russia Time Zone 11", 43200),
    ("Russia Time Zone 3", 14400),
    ("Russian Standard Time", 10800),
    ("SA Eastern Standard Time", -10800),
    ("SA Pacific Standard Time", -18000),
    ("SA Western Standard Time", -14400),
    ("Saint Pierre Standard Time", -10800), // New France
    ("Sakhalin Standard Time", 39600),
    ("Samoa Standard Time", 46800),
    ("Sao Tome Standard Time", 0),
    ("Saratov Standard Time", 14400),
    ("SE Asia Standard Time", 25200),
    ("Singapore Standard Time", 28800),
    ("South Africa Standard Time", 7200),
    ("Sri Lanka Standard Time", 19800),
    ("Sudan Standard Time", 7200), // unless they mean South Sudan, +03:00
    ("Syria Standard Time", 7200),
    ("Taipei Standard Time", 28800),
    ("Tasmania Standard Time", 36000),
    ("Tocantins Standard Time", -10800),
    ("Tokyo Standard Time", 32400),
    ("Tomsk Standard Time", 25200),
    ("Tonga Standard Time", 46800),
    ("Transbaikal Standard Time", 32400), // Yakutsk
    ("Turkey Standard Time", 7200),
    ("Turks And Caicos Standard Time", -14400),
    ("Ulaanbaatar Standard Time", 28800),
    ("US Eastern Standard Time", -18000),
    ("US Mountain Standard Time", -25200),
    ("UTC", 0),
    ("UTC+12", 43200),
    ("UTC+13", 46800),
    ("UTC-02", -7200),
    ("UTC-08", -28800),
    ("UTC-09", -32400),
    ("UTC-11", -39600),
    ("Venezuela Standard Time", -16200),
    ("Vladivostok Standard Time", 36000),
    ("Volgograd Standard Time", 14400),
    ("W. Australia Standard Time", 28800),
    ("W. Central Africa Standard Time", 3600),
    ("W. Europe Standard Time", 3600),
    ("W. Mongolia Standard Time", 25200), // Hovd
    ("West Asia Standard Time", 18000),
    ("West Bank Standard Time", 7200),
    ("West Pacific Standard Time", 36000),
    ("Yakutsk Standard Time", 32400),
    ("Yukon Standard Time", -25200), // Non-DST Mountain Standard Time since 2020-11-01
];

/// UTC pseudo-zone labels with their offset in seconds.
///
/// Do not remove entries; each one is part of the behavior guarantee of the
/// generated tables. `("UTC", 0)` goes first so it is the default, the rest
/// are ordered by offset then by label.
pub const UTC_ID_LIST: &[(&str, i32)] = &[
    ("UTC", 0),
    ("UTC-14:00", -50400),
    ("UTC-13:00", -46800),
    ("UTC-12:00", -43200),
    ("UTC-11:00", -39600),
    ("UTC-10:00", -36000),
    ("UTC-09:00", -32400),
    ("UTC-08:00", -28800),
    ("UTC-07:00", -25200),
    ("UTC-06:00", -21600),
    ("UTC-05:00", -18000),
    ("UTC-04:30", -16200),
    ("UTC-04:00", -14400),
    ("UTC-03:30", -12600),
    ("UTC-03:00", -10800),
    ("UTC-02:00", -7200),
    ("UTC-01:00", -3600),
    ("UTC-00:00", 0),
    ("UTC+00:00", 0),
    ("UTC+01:00", 3600),
    ("UTC+02:00", 7200),
    ("UTC+03:00", 10800),
    ("UTC+03:30", 12600),
    ("UTC+04:00", 14400),
    ("UTC+04:30", 16200),
    ("UTC+05:00", 18000),
    ("UTC+05:30", 19800),
    ("UTC+05:45", 20700),
    ("UTC+06:00", 21600),
    ("UTC+06:30", 23400),
    ("UTC+07:00", 25200),
    ("UTC+08:00", 28800),
    ("UTC+08:30", 30600),
    ("UTC+09:00", 32400),
    ("UTC+09:30", 34200),
    ("UTC+10:00", 36000),
    ("UTC+11:00", 39600),
    ("UTC+12:00", 43200),
    ("UTC+13:00", 46800),
    ("UTC+14:00", 50400),
];

/// Maps each known Windows ID to its 1-based position in [`WINDOWS_ID_LIST`].
pub fn windows_id_lookup() -> HashMap<&'static str, u16> {
    WINDOWS_ID_LIST.iter().enumerate().map(|(i, &(id, _))| (id, (i + 1) as u16)).collect()
}
