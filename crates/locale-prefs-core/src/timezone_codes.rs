//! Fixed mapping from the 5-character UN/LOCODE-style codes used by the
//! `-u-tz-` key to IANA zone identifiers. Sorted by code for binary search.

const TIMEZONE_CODES: &[(&str, &str)] = &[
    ("adalv", "Europe/Andorra"),
    ("aedxb", "Asia/Dubai"),
    ("arbue", "America/Buenos_Aires"),
    ("atvie", "Europe/Vienna"),
    ("auadl", "Australia/Adelaide"),
    ("aubne", "Australia/Brisbane"),
    ("audrw", "Australia/Darwin"),
    ("auhba", "Australia/Hobart"),
    ("aumel", "Australia/Melbourne"),
    ("auper", "Australia/Perth"),
    ("ausyd", "Australia/Sydney"),
    ("bebru", "Europe/Brussels"),
    ("brsao", "America/Sao_Paulo"),
    ("cator", "America/Toronto"),
    ("cavan", "America/Vancouver"),
    ("chzrh", "Europe/Zurich"),
    ("clscl", "America/Santiago"),
    ("cnsha", "Asia/Shanghai"),
    ("deber", "Europe/Berlin"),
    ("dkcph", "Europe/Copenhagen"),
    ("egcai", "Africa/Cairo"),
    ("esmad", "Europe/Madrid"),
    ("etadd", "Africa/Addis_Ababa"),
    ("fihel", "Europe/Helsinki"),
    ("frpar", "Europe/Paris"),
    ("gblon", "Europe/London"),
    ("grath", "Europe/Athens"),
    ("hkhkg", "Asia/Hong_Kong"),
    ("idjkt", "Asia/Jakarta"),
    ("iedub", "Europe/Dublin"),
    ("inccu", "Asia/Calcutta"),
    ("irthr", "Asia/Tehran"),
    ("itrom", "Europe/Rome"),
    ("jptyo", "Asia/Tokyo"),
    ("kenbo", "Africa/Nairobi"),
    ("krsel", "Asia/Seoul"),
    ("mxmex", "America/Mexico_City"),
    ("nglos", "Africa/Lagos"),
    ("nlams", "Europe/Amsterdam"),
    ("nzakl", "Pacific/Auckland"),
    ("phmnl", "Asia/Manila"),
    ("plwaw", "Europe/Warsaw"),
    ("ptlis", "Europe/Lisbon"),
    ("rumow", "Europe/Moscow"),
    ("saruh", "Asia/Riyadh"),
    ("sesto", "Europe/Stockholm"),
    ("sgsin", "Asia/Singapore"),
    ("thbkk", "Asia/Bangkok"),
    ("trist", "Europe/Istanbul"),
    ("twtpe", "Asia/Taipei"),
    ("uschi", "America/Chicago"),
    ("usden", "America/Denver"),
    ("uslax", "America/Los_Angeles"),
    ("usnyc", "America/New_York"),
    ("zajnb", "Africa/Johannesburg"),
];

/// Looks up a `-u-tz-` code, case-insensitively.
pub fn timezone_for_code(code: &str) -> Option<&'static str> {
    let normalized = code.to_ascii_lowercase();
    TIMEZONE_CODES
        .binary_search_by(|entry| entry.0.cmp(normalized.as_str()))
        .ok()
        .map(|index| TIMEZONE_CODES[index].1)
}

#[cfg(test)]
mod tests {
    use super::{TIMEZONE_CODES, timezone_for_code};

    #[test]
    fn table_is_sorted_for_binary_search() {
        for window in TIMEZONE_CODES.windows(2) {
            assert!(window[0].0 < window[1].0, "{} >= {}", window[0].0, window[1].0);
        }
    }

    #[test]
    fn maps_known_codes() {
        assert_eq!(timezone_for_code("ausyd"), Some("Australia/Sydney"));
        assert_eq!(timezone_for_code("usnyc"), Some("America/New_York"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(timezone_for_code("AUSYD"), Some("Australia/Sydney"));
    }

    #[test]
    fn misses_unknown_codes() {
        assert_eq!(timezone_for_code("zzzzz"), None);
        assert_eq!(timezone_for_code(""), None);
    }
}
