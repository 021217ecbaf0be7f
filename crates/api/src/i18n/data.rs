//! Per-country address rules, one entry per ISO 3166-1 region plus the
//! postal-only territories (`AC`, `TA`, `XK`), following Google's address
//! metadata.
//!
//! Format strings use the usual placeholders: `%N` name, `%O` organization,
//! `%A` street address, `%D` city area, `%C` city, `%S` country area,
//! `%Z` postal code, `%n` newline.

use super::AddressField::{self, City, CompanyName, CountryArea, Name, PostalCode, StreetAddress};

/// Address rules for one country.
#[derive(Debug, Clone, Copy)]
pub struct CountryRules {
    pub code: &'static str,
    /// English name, upper case.
    pub name: &'static str,
    pub address_format: &'static str,
    /// Romanized format, for countries whose native format differs.
    pub address_latin_format: Option<&'static str>,
    pub required_fields: &'static [AddressField],
    pub upper_fields: &'static [AddressField],
    /// Unanchored postal code pattern.
    pub postal_code_pattern: Option<&'static str>,
    pub postal_code_examples: &'static [&'static str],
    pub country_area_type: &'static str,
    pub postal_code_type: &'static str,
    pub city_type: &'static str,
}

impl CountryRules {
    /// Rules shared by every country unless its entry says otherwise.
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            address_format: "%N%n%O%n%A%n%C",
            address_latin_format: None,
            required_fields: &[StreetAddress, City],
            upper_fields: &[],
            postal_code_pattern: None,
            postal_code_examples: &[],
            country_area_type: "province",
            postal_code_type: "postal",
            city_type: "city",
        }
    }
}

/// Sorted by code.
pub(super) const COUNTRIES: &[CountryRules] = &[
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"ASCN 1ZZ"),
        postal_code_examples: &["ASCN 1ZZ"],
        ..CountryRules::new("AC", "ASCENSION ISLAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"AD[1-7]0\d"),
        postal_code_examples: &["AD100", "AD501", "AD700"],
        country_area_type: "parish",
        ..CountryRules::new("AD", "ANDORRA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%S",
        required_fields: &[StreetAddress, CountryArea],
        country_area_type: "emirate",
        ..CountryRules::new("AE", "UNITED ARAB EMIRATES")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1001", "2601", "3801"],
        ..CountryRules::new("AF", "AFGHANISTAN")
    },
    CountryRules {
        required_fields: &[StreetAddress],
        ..CountryRules::new("AG", "ANTIGUA AND BARBUDA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        postal_code_pattern: Some(r"(?:AI-)?2640"),
        postal_code_examples: &["2640"],
        ..CountryRules::new("AI", "ANGUILLA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z%n%C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1001", "1017", "3501"],
        ..CountryRules::new("AL", "ALBANIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z%n%C%n%S",
        postal_code_pattern: Some(r"(?:37)?\d{4}"),
        postal_code_examples: &["375010", "0002", "0010"],
        ..CountryRules::new("AM", "ARMENIA")
    },
    CountryRules::new("AO", "ANGOLA"),
    CountryRules::new("AQ", "ANTARCTICA"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C%n%S",
        upper_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"((?:[A-HJ-NP-Z])?\d{4})([A-Z]{3})?"),
        postal_code_examples: &["C1070AAM", "C1000WAM", "B1000TBU", "X5187XAB"],
        ..CountryRules::new("AR", "ARGENTINA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea],
        postal_code_pattern: Some(r"(96799)(?:[ \-](\d{4}))?"),
        postal_code_examples: &["96799"],
        country_area_type: "state",
        postal_code_type: "zip",
        ..CountryRules::new("AS", "AMERICAN SAMOA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1010", "3741"],
        ..CountryRules::new("AT", "AUSTRIA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["2060", "3171", "6430", "4000", "4006", "3001"],
        country_area_type: "state",
        city_type: "suburb",
        ..CountryRules::new("AU", "AUSTRALIA")
    },
    CountryRules::new("AW", "ARUBA"),
    CountryRules {
        address_format: "%O%n%N%n%A%nAX-%Z %C%nÅLAND",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"22\d{3}"),
        postal_code_examples: &["22150", "22550", "22240", "22710", "22270", "22730", "22430"],
        ..CountryRules::new("AX", "ALAND ISLANDS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%nAZ %Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1000"],
        ..CountryRules::new("AZ", "AZERBAIJAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["71000"],
        ..CountryRules::new("BA", "BOSNIA AND HERZEGOVINA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C, %S %Z",
        postal_code_pattern: Some(r"BB\d{5}"),
        postal_code_examples: &["BB23026", "BB22025"],
        country_area_type: "parish",
        ..CountryRules::new("BB", "BARBADOS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C - %Z",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1340", "1000"],
        ..CountryRules::new("BD", "BANGLADESH")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["4000", "1000"],
        ..CountryRules::new("BE", "BELGIUM")
    },
    CountryRules::new("BF", "BURKINA FASO"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1000", "1700"],
        ..CountryRules::new("BG", "BULGARIA (REP.)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"(?:\d|1[0-2])\d{2}"),
        postal_code_examples: &["317"],
        ..CountryRules::new("BH", "BAHRAIN")
    },
    CountryRules::new("BI", "BURUNDI"),
    CountryRules {
        upper_fields: &[StreetAddress, City],
        ..CountryRules::new("BJ", "BENIN")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"9[78][01]\d{2}"),
        postal_code_examples: &["97100"],
        ..CountryRules::new("BL", "SAINT BARTHELEMY")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"[A-Z]{2} ?[A-Z0-9]{2}"),
        postal_code_examples: &["FL 07", "HM GX", "HM 12"],
        ..CountryRules::new("BM", "BERMUDA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"[A-Z]{2} ?\d{4}"),
        postal_code_examples: &["BT2328", "KA1131", "BA1511"],
        ..CountryRules::new("BN", "BRUNEI DARUSSALAM")
    },
    CountryRules {
        upper_fields: &[StreetAddress, City],
        ..CountryRules::new("BO", "BOLIVIA")
    },
    CountryRules::new("BQ", "BONAIRE, SINT EUSTATIUS, AND SABA"),
    CountryRules {
        address_format: "%O%n%N%n%A%n%D%n%C-%S%n%Z",
        required_fields: &[StreetAddress, CountryArea, City, PostalCode],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{5}-?\d{3}"),
        postal_code_examples: &["40301-110", "70002-900"],
        country_area_type: "state",
        ..CountryRules::new("BR", "BRAZIL")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C, %S",
        country_area_type: "island",
        ..CountryRules::new("BS", "BAHAMAS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["11001", "31101", "35003"],
        ..CountryRules::new("BT", "BHUTAN")
    },
    CountryRules::new("BV", "BOUVET ISLAND"),
    CountryRules::new("BW", "BOTSWANA"),
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z, %C%n%S",
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["223016", "225860", "220050"],
        ..CountryRules::new("BY", "BELARUS")
    },
    CountryRules::new("BZ", "BELIZE"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea, PostalCode],
        postal_code_pattern: Some(r"[ABCEGHJKLMNPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d"),
        postal_code_examples: &["H3Z 2Y7", "V8X 3X4", "T0L 1K0", "T0H 1A0", "K1A 0B1"],
        ..CountryRules::new("CA", "CANADA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%C %S %Z",
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"6799"),
        postal_code_examples: &["6799"],
        ..CountryRules::new("CC", "COCOS (KEELING) ISLANDS")
    },
    CountryRules::new("CD", "CONGO (DEM. REP.)"),
    CountryRules::new("CF", "CENTRAL AFRICAN REPUBLIC"),
    CountryRules::new("CG", "CONGO (REP.)"),
    CountryRules {
        address_format: "%O%n%N%n%A%nCH-%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["2544", "1211", "1556", "3030"],
        ..CountryRules::new("CH", "SWITZERLAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A %C",
        ..CountryRules::new("CI", "COTE D'IVOIRE")
    },
    CountryRules::new("CK", "COOK ISLANDS"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C%n%S",
        postal_code_pattern: Some(r"\d{7}"),
        postal_code_examples: &["8340457", "8720019", "1230000", "8329100"],
        ..CountryRules::new("CL", "CHILE")
    },
    CountryRules::new("CM", "REP. CAMEROON"),
    CountryRules {
        address_format: "%Z%n%S%C%D%n%A%n%O%n%N",
        address_latin_format: Some("%N%n%O%n%A%n%D%n%C%n%S, %Z"),
        required_fields: &[StreetAddress, City, CountryArea],
        upper_fields: &[CountryArea],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["266033", "317204", "100096", "100808"],
        ..CountryRules::new("CN", "CHINA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%D%n%C, %S, %Z",
        required_fields: &[StreetAddress, CountryArea],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["111221", "130001", "760011"],
        country_area_type: "department",
        ..CountryRules::new("CO", "COLOMBIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%S, %C%n%Z",
        required_fields: &[StreetAddress, City, CountryArea],
        postal_code_pattern: Some(r"\d{4,5}|\d{3}-\d{4}"),
        postal_code_examples: &["1000", "2010", "1001"],
        ..CountryRules::new("CR", "COSTA RICA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S%n%Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["10700"],
        ..CountryRules::new("CU", "CUBA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C%n%S",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["7600"],
        country_area_type: "island",
        ..CountryRules::new("CV", "CAPE VERDE")
    },
    CountryRules::new("CW", "CURACAO"),
    CountryRules {
        address_format: "%O%n%N%n%A%n%C %S %Z",
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"6798"),
        postal_code_examples: &["6798"],
        ..CountryRules::new("CX", "CHRISTMAS ISLAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["2008", "3304", "1900"],
        ..CountryRules::new("CY", "CYPRUS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{3} ?\d{2}"),
        postal_code_examples: &["100 00", "251 66", "530 87", "110 00", "225 99"],
        ..CountryRules::new("CZ", "CZECH REP.")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["26133", "53225"],
        country_area_type: "state",
        ..CountryRules::new("DE", "GERMANY")
    },
    CountryRules::new("DJ", "DJIBOUTI"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["8660", "1566"],
        ..CountryRules::new("DK", "DENMARK")
    },
    CountryRules::new("DM", "DOMINICA"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["11903", "10101"],
        ..CountryRules::new("DO", "DOMINICAN REP.")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["40304", "16027"],
        ..CountryRules::new("DZ", "ALGERIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z%n%C",
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["090105", "092301"],
        ..CountryRules::new("EC", "ECUADOR")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C %S",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["69501", "11212"],
        ..CountryRules::new("EE", "ESTONIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S%n%Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["12411", "11599"],
        ..CountryRules::new("EG", "EGYPT")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["70000", "72000"],
        ..CountryRules::new("EH", "WESTERN SAHARA")
    },
    CountryRules::new("ER", "ERITREA"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C %S",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["28039", "28300", "28070"],
        ..CountryRules::new("ES", "SPAIN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1000"],
        ..CountryRules::new("ET", "ETHIOPIA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%nFI-%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["00550", "00011"],
        ..CountryRules::new("FI", "FINLAND")
    },
    CountryRules::new("FJ", "FIJI"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"FIQQ 1ZZ"),
        postal_code_examples: &["FIQQ 1ZZ"],
        ..CountryRules::new("FK", "FALKLAND ISLANDS (MALVINAS)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea],
        postal_code_pattern: Some(r"(9694[1-4])(?:[ \-](\d{4}))?"),
        postal_code_examples: &["96941", "96944"],
        country_area_type: "state",
        postal_code_type: "zip",
        ..CountryRules::new("FM", "MICRONESIA (Federated State of)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%nFO%Z %C",
        postal_code_pattern: Some(r"\d{3}"),
        postal_code_examples: &["100"],
        ..CountryRules::new("FO", "FAROE ISLANDS")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City],
        postal_code_pattern: Some(r"\d{2} ?\d{3}"),
        postal_code_examples: &["33380", "34092", "33506"],
        ..CountryRules::new("FR", "FRANCE")
    },
    CountryRules::new("GA", "GABON"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"GIR ?0AA|[A-PR-UWYZ](?:\d{1,2}|[A-HK-Y]\d{1,2}|\d[A-HJKPSTUW]|[A-HK-Y]\d[ABEHMNPRV-Y]) ?\d[ABD-HJLNP-UW-Z]{2}"),
        postal_code_examples: &["EC1Y 8SY", "GIR 0AA", "M2 5BQ", "M34 4AB", "CR0 2YR"],
        country_area_type: "county",
        city_type: "post town",
        ..CountryRules::new("GB", "UNITED KINGDOM")
    },
    CountryRules::new("GD", "GRENADA (WEST INDIES)"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["0101"],
        ..CountryRules::new("GE", "GEORGIA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"9[78]3\d{2}"),
        postal_code_examples: &["97300"],
        ..CountryRules::new("GF", "FRENCH GUIANA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%nGUERNSEY%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"GY\d[\dA-Z]? ?\d[ABD-HJLN-UW-Z]{2}"),
        postal_code_examples: &["GY1 1AA", "GY2 2BT"],
        ..CountryRules::new("GG", "CHANNEL ISLANDS (GUERNSEY)")
    },
    CountryRules::new("GH", "GHANA"),
    CountryRules {
        address_format: "%N%n%O%n%A%nGIBRALTAR%n%Z",
        required_fields: &[StreetAddress],
        postal_code_pattern: Some(r"GX11 1AA"),
        postal_code_examples: &["GX11 1AA"],
        ..CountryRules::new("GI", "GIBRALTAR")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"39\d{2}"),
        postal_code_examples: &["3900", "3950", "3911"],
        ..CountryRules::new("GL", "GREENLAND")
    },
    CountryRules::new("GM", "GAMBIA"),
    CountryRules {
        address_format: "%N%n%O%n%Z %A %C",
        postal_code_pattern: Some(r"\d{3}"),
        postal_code_examples: &["001", "200", "100"],
        ..CountryRules::new("GN", "GUINEA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"9[78][01]\d{2}"),
        postal_code_examples: &["97100"],
        ..CountryRules::new("GP", "GUADELOUPE")
    },
    CountryRules::new("GQ", "EQUATORIAL GUINEA"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{3} ?\d{2}"),
        postal_code_examples: &["151 24", "151 10", "101 88"],
        ..CountryRules::new("GR", "GREECE")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"SIQQ 1ZZ"),
        postal_code_examples: &["SIQQ 1ZZ"],
        ..CountryRules::new("GS", "SOUTH GEORGIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z- %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["09001", "01501"],
        ..CountryRules::new("GT", "GUATEMALA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName],
        postal_code_pattern: Some(r"(969(?:[12]\d|3[12]))(?:[ \-](\d{4}))?"),
        postal_code_examples: &["96910", "96931"],
        postal_code_type: "zip",
        ..CountryRules::new("GU", "GUAM")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1000", "1011"],
        ..CountryRules::new("GW", "GUINEA-BISSAU")
    },
    CountryRules::new("GY", "GUYANA"),
    CountryRules {
        address_format: "%S%n%C%n%A%n%O%n%N",
        address_latin_format: Some("%N%n%O%n%A%n%C%n%S"),
        required_fields: &[StreetAddress, CountryArea],
        upper_fields: &[CountryArea],
        country_area_type: "area",
        city_type: "district",
        ..CountryRules::new("HK", "HONG KONG")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%C %S %Z",
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["7050"],
        ..CountryRules::new("HM", "HEARD AND MCDONALD ISLANDS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C, %S%n%Z",
        required_fields: &[StreetAddress, City, CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["31301"],
        country_area_type: "department",
        ..CountryRules::new("HN", "HONDURAS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%nHR-%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["10000", "21001", "10002"],
        ..CountryRules::new("HR", "CROATIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%nHT%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["6120", "5310", "6110", "8510"],
        ..CountryRules::new("HT", "HAITI")
    },
    CountryRules {
        address_format: "%N%n%O%n%C%n%A%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1037", "2380", "1540"],
        ..CountryRules::new("HU", "HUNGARY (Rep.)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S %Z",
        required_fields: &[StreetAddress, CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["40115"],
        ..CountryRules::new("ID", "INDONESIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%D%n%C%n%S%n%Z",
        postal_code_pattern: Some(r"[\dA-Z]{3} ?[\dA-Z]{4}"),
        postal_code_examples: &["A65 F4E2"],
        country_area_type: "county",
        postal_code_type: "eircode",
        ..CountryRules::new("IE", "IRELAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"\d{5}(?:\d{2})?"),
        postal_code_examples: &["9614303"],
        ..CountryRules::new("IL", "ISRAEL")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"IM\d[\dA-Z]? ?\d[ABD-HJLN-UW-Z]{2}"),
        postal_code_examples: &["IM2 1AA", "IM99 1PS"],
        ..CountryRules::new("IM", "ISLE OF MAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z%n%S",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["110034", "110001"],
        country_area_type: "state",
        postal_code_type: "pin",
        ..CountryRules::new("IN", "INDIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"BBND 1ZZ"),
        postal_code_examples: &["BBND 1ZZ"],
        ..CountryRules::new("IO", "BRITISH INDIAN OCEAN TERRITORY")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%C, %S%n%Z",
        required_fields: &[StreetAddress, City, CountryArea],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["31001"],
        ..CountryRules::new("IQ", "IRAQ")
    },
    CountryRules {
        address_format: "%O%n%N%n%S%n%C, %D%n%A%n%Z",
        postal_code_pattern: Some(r"\d{5}-?\d{5}"),
        postal_code_examples: &["11936-12345"],
        ..CountryRules::new("IR", "IRAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{3}"),
        postal_code_examples: &["320", "121", "220", "110"],
        ..CountryRules::new("IS", "ICELAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C %S",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["00144", "47037", "39049"],
        ..CountryRules::new("IT", "ITALY")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%nJERSEY%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"JE\d[\dA-Z]? ?\d[ABD-HJLN-UW-Z]{2}"),
        postal_code_examples: &["JE1 1AA", "JE2 2BT"],
        ..CountryRules::new("JE", "CHANNEL ISLANDS (JERSEY)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S",
        required_fields: &[StreetAddress, City, CountryArea],
        upper_fields: &[CountryArea],
        country_area_type: "parish",
        ..CountryRules::new("JM", "JAMAICA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["11937", "11190"],
        ..CountryRules::new("JO", "JORDAN")
    },
    CountryRules {
        address_format: "〒%Z%n%S%n%A%n%O%n%N",
        address_latin_format: Some("%N%n%O%n%A, %S%n%Z"),
        required_fields: &[StreetAddress, CountryArea, PostalCode],
        upper_fields: &[CountryArea],
        postal_code_pattern: Some(r"\d{3}-?\d{4}"),
        postal_code_examples: &["154-0023", "350-1106", "951-8073", "112-0001"],
        country_area_type: "prefecture",
        ..CountryRules::new("JP", "JAPAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["20100", "00100"],
        ..CountryRules::new("KE", "KENYA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["720001"],
        ..CountryRules::new("KG", "KYRGYZSTAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["12203", "14206", "12000"],
        ..CountryRules::new("KH", "CAMBODIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%S%n%C",
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea],
        country_area_type: "island",
        ..CountryRules::new("KI", "KIRIBATI")
    },
    CountryRules {
        upper_fields: &[StreetAddress, City],
        ..CountryRules::new("KM", "COMOROS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C, %S",
        required_fields: &[StreetAddress, City, CountryArea],
        country_area_type: "island",
        ..CountryRules::new("KN", "SAINT KITTS AND NEVIS")
    },
    CountryRules {
        address_format: "%Z%n%S%n%C%n%A%n%O%n%N",
        address_latin_format: Some("%N%n%O%n%A%n%C%n%S, %Z"),
        ..CountryRules::new("KP", "NORTH KOREA")
    },
    CountryRules {
        address_format: "%S %C%D%n%A%n%O%n%N%n%Z",
        address_latin_format: Some("%N%n%O%n%A%n%D%n%C%n%S%n%Z"),
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[PostalCode],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["03051"],
        country_area_type: "do_si",
        ..CountryRules::new("KR", "SOUTH KOREA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["54541", "54551", "54404", "13009"],
        ..CountryRules::new("KW", "KUWAIT")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%S %Z",
        required_fields: &[StreetAddress, CountryArea],
        postal_code_pattern: Some(r"KY\d-\d{4}"),
        postal_code_examples: &["KY1-1100", "KY1-1702", "KY2-2101"],
        country_area_type: "island",
        ..CountryRules::new("KY", "CAYMAN ISLANDS")
    },
    CountryRules {
        address_format: "%Z%n%S%n%C%n%A%n%O%n%N",
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["040900", "050012"],
        ..CountryRules::new("KZ", "KAZAKHSTAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["01160", "01000"],
        ..CountryRules::new("LA", "LAO (PEOPLE'S DEM. REP.)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"(?:\d{4})(?: ?(?:\d{4}))?"),
        postal_code_examples: &["2038 3054", "1107 2810", "1000"],
        ..CountryRules::new("LB", "LEBANON")
    },
    CountryRules::new("LC", "SAINT LUCIA"),
    CountryRules {
        address_format: "%O%n%N%n%A%nFL-%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"948[5-9]|949[0-8]"),
        postal_code_examples: &["9496", "9491", "9490", "9485"],
        ..CountryRules::new("LI", "LIECHTENSTEIN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["20000", "00100"],
        ..CountryRules::new("LK", "SRI LANKA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1000"],
        ..CountryRules::new("LR", "LIBERIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"\d{3}"),
        postal_code_examples: &["100"],
        ..CountryRules::new("LS", "LESOTHO")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%nLT-%Z %C %S",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["04340", "03500"],
        ..CountryRules::new("LT", "LITHUANIA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%nL-%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["4750", "2998"],
        ..CountryRules::new("LU", "LUXEMBOURG")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%S%n%C, %Z",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"LV-\d{4}"),
        postal_code_examples: &["LV-1073", "LV-1000"],
        ..CountryRules::new("LV", "LATVIA")
    },
    CountryRules::new("LY", "LIBYA"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["53000", "10000", "20050", "16052"],
        ..CountryRules::new("MA", "MOROCCO")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%nMC-%Z %C",
        postal_code_pattern: Some(r"980\d{2}"),
        postal_code_examples: &["98000", "98020", "98011", "98001"],
        ..CountryRules::new("MC", "MONACO")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%nMD-%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["2012", "2019"],
        ..CountryRules::new("MD", "REP. MOLDOVA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"8\d{4}"),
        postal_code_examples: &["81257", "81258", "81217", "84314", "85366"],
        ..CountryRules::new("ME", "MONTENEGRO")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"9[78][01]\d{2}"),
        postal_code_examples: &["97100"],
        ..CountryRules::new("MF", "SAINT MARTIN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{3}"),
        postal_code_examples: &["501", "101"],
        ..CountryRules::new("MG", "MADAGASCAR")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea],
        postal_code_pattern: Some(r"(969[67]\d)(?:[ \-](\d{4}))?"),
        postal_code_examples: &["96960", "96970"],
        country_area_type: "state",
        postal_code_type: "zip",
        ..CountryRules::new("MH", "MARSHALL ISLANDS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1314", "1321", "1443", "1062"],
        ..CountryRules::new("MK", "MACEDONIA")
    },
    CountryRules::new("ML", "MALI"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%C, %Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["11181"],
        ..CountryRules::new("MM", "MYANMAR")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S %Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["65030", "65270"],
        ..CountryRules::new("MN", "MONGOLIA")
    },
    CountryRules {
        address_format: "%A%n%O%n%N",
        address_latin_format: Some("%N%n%O%n%A"),
        required_fields: &[StreetAddress],
        ..CountryRules::new("MO", "MACAO")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea],
        postal_code_pattern: Some(r"(9695[012])(?:[ \-](\d{4}))?"),
        postal_code_examples: &["96950", "96951", "96952"],
        country_area_type: "state",
        postal_code_type: "zip",
        ..CountryRules::new("MP", "NORTHERN MARIANA ISLANDS")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"9[78]2\d{2}"),
        postal_code_examples: &["97220"],
        ..CountryRules::new("MQ", "MARTINIQUE")
    },
    CountryRules {
        upper_fields: &[StreetAddress, City],
        ..CountryRules::new("MR", "MAURITANIA")
    },
    CountryRules::new("MS", "MONTSERRAT"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"[A-Z]{3} ?\d{2,4}"),
        postal_code_examples: &["NXR 01", "ZTN 05", "GPO 01", "BZN 1130", "SPB 6031", "VCT 1753"],
        ..CountryRules::new("MT", "MALTA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z%n%C",
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"\d{3}(?:\d{2}|[A-Z]{2}\d{3})"),
        postal_code_examples: &["42602"],
        ..CountryRules::new("MU", "MAURITIUS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["20026"],
        ..CountryRules::new("MV", "MALDIVES")
    },
    CountryRules::new("MW", "MALAWI"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%D%n%Z %C, %S",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[City, CountryArea, PostalCode],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["02860", "77520", "06082"],
        country_area_type: "state",
        ..CountryRules::new("MX", "MEXICO")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%D%n%Z %C%n%S",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["43000", "50754", "88990", "50670"],
        country_area_type: "state",
        ..CountryRules::new("MY", "MALAYSIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C%S",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1102", "1119", "3212"],
        ..CountryRules::new("MZ", "MOZAMBIQUE")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["10001", "10017"],
        ..CountryRules::new("NA", "NAMIBIA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"988\d{2}"),
        postal_code_examples: &["98814", "98800", "98810"],
        ..CountryRules::new("NC", "NEW CALEDONIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["8001"],
        ..CountryRules::new("NE", "NIGER")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%C %S %Z",
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"2899"),
        postal_code_examples: &["2899"],
        ..CountryRules::new("NF", "NORFOLK ISLAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%D%n%C %Z%n%S",
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["930283", "300001", "931104"],
        country_area_type: "state",
        ..CountryRules::new("NG", "NIGERIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z%n%C, %S",
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["52000"],
        country_area_type: "department",
        ..CountryRules::new("NI", "NICARAGUA")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4} ?[A-Z]{2}"),
        postal_code_examples: &["1234 AB", "2490 AA"],
        ..CountryRules::new("NL", "NETHERLANDS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["0025", "0107", "6631"],
        city_type: "post town",
        ..CountryRules::new("NO", "NORWAY")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["44601"],
        ..CountryRules::new("NP", "NEPAL")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%S",
        required_fields: &[StreetAddress, CountryArea],
        country_area_type: "district",
        ..CountryRules::new("NR", "NAURU CENTRAL PACIFIC")
    },
    CountryRules::new("NU", "NIUE"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%D%n%C %Z",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["6001", "6015", "6332", "8252", "1030"],
        ..CountryRules::new("NZ", "NEW ZEALAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z%n%C",
        postal_code_pattern: Some(r"(?:PC )?\d{3}"),
        postal_code_examples: &["133", "112", "111"],
        ..CountryRules::new("OM", "OMAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S",
        upper_fields: &[City, CountryArea],
        ..CountryRules::new("PA", "PANAMA (REP.)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z%n%S",
        postal_code_pattern: Some(r"(?:LIMA \d{1,2}|CALLAO 0?\d)|[0-2]\d{4}"),
        postal_code_examples: &["LIMA 23", "LIMA 42", "CALLAO 2", "02001"],
        city_type: "district",
        ..CountryRules::new("PE", "PERU")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C %S",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"987\d{2}"),
        postal_code_examples: &["98709"],
        country_area_type: "island",
        ..CountryRules::new("PF", "FRENCH POLYNESIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z %S",
        required_fields: &[StreetAddress, City, CountryArea],
        postal_code_pattern: Some(r"\d{3}"),
        postal_code_examples: &["111"],
        ..CountryRules::new("PG", "PAPUA NEW GUINEA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%D, %C%n%Z %S",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1008", "1050", "1135", "1207", "2000", "1000"],
        ..CountryRules::new("PH", "PHILIPPINES")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%D%n%C-%Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["44000"],
        ..CountryRules::new("PK", "PAKISTAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{2}-\d{3}"),
        postal_code_examples: &["00-950", "05-470", "48-300", "32-015", "00-940"],
        ..CountryRules::new("PL", "POLAND")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"9[78]5\d{2}"),
        postal_code_examples: &["97500"],
        ..CountryRules::new("PM", "ST. PIERRE AND MIQUELON")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"PCRN 1ZZ"),
        postal_code_examples: &["PCRN 1ZZ"],
        ..CountryRules::new("PN", "PITCAIRN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C PR %Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName],
        postal_code_pattern: Some(r"(00[679]\d{2})(?:[ \-](\d{4}))?"),
        postal_code_examples: &["00930"],
        postal_code_type: "zip",
        ..CountryRules::new("PR", "PUERTO RICO")
    },
    CountryRules::new("PS", "PALESTINIAN TERRITORY"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}-\d{3}"),
        postal_code_examples: &["2725-079", "1250-096", "1201-950", "2860-571", "1208-148"],
        ..CountryRules::new("PT", "PORTUGAL")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea],
        postal_code_pattern: Some(r"(969(?:39|40))(?:[ \-](\d{4}))?"),
        postal_code_examples: &["96940"],
        country_area_type: "state",
        postal_code_type: "zip",
        ..CountryRules::new("PW", "PALAU")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1536", "1538", "1209"],
        ..CountryRules::new("PY", "PARAGUAY")
    },
    CountryRules {
        upper_fields: &[StreetAddress, City],
        ..CountryRules::new("QA", "QATAR")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"9[78]4\d{2}"),
        postal_code_examples: &["97400"],
        ..CountryRules::new("RE", "REUNION")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %S %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["060274", "061357", "200716"],
        ..CountryRules::new("RO", "ROMANIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5,6}"),
        postal_code_examples: &["106314"],
        ..CountryRules::new("RS", "REPUBLIC OF SERBIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S%n%Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["247112", "103375", "188300"],
        country_area_type: "oblast",
        ..CountryRules::new("RU", "RUSSIAN FEDERATION")
    },
    CountryRules {
        upper_fields: &[StreetAddress, City],
        ..CountryRules::new("RW", "RWANDA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["11564", "11187", "11142"],
        ..CountryRules::new("SA", "SAUDI ARABIA")
    },
    CountryRules::new("SB", "SOLOMON ISLANDS"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S",
        upper_fields: &[CountryArea],
        country_area_type: "island",
        ..CountryRules::new("SC", "SEYCHELLES")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["11042", "11113"],
        city_type: "district",
        ..CountryRules::new("SD", "SUDAN")
    },
    CountryRules {
        address_format: "%O%n%N%n%A%nSE-%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{3} ?\d{2}"),
        postal_code_examples: &["11455", "12345", "10500"],
        city_type: "post town",
        ..CountryRules::new("SE", "SWEDEN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%nSINGAPORE %Z",
        required_fields: &[StreetAddress, PostalCode],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["546080", "308125", "408600"],
        ..CountryRules::new("SG", "REP. OF SINGAPORE")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"(?:ASCN|STHL) 1ZZ"),
        postal_code_examples: &["STHL 1ZZ"],
        ..CountryRules::new("SH", "SAINT HELENA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%nSI-%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["4000", "1001", "2500"],
        ..CountryRules::new("SI", "SLOVENIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["9170"],
        city_type: "post town",
        ..CountryRules::new("SJ", "SVALBARD AND JAN MAYEN ISLANDS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{3} ?\d{2}"),
        postal_code_examples: &["010 01", "023 14", "972 48", "921 01", "975 99"],
        ..CountryRules::new("SK", "SLOVAKIA")
    },
    CountryRules::new("SL", "SIERRA LEONE"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        required_fields: &[StreetAddress, PostalCode],
        postal_code_pattern: Some(r"4789\d"),
        postal_code_examples: &["47890", "47891", "47895", "47899"],
        ..CountryRules::new("SM", "SAN MARINO")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["12500", "46024", "16556", "10000"],
        ..CountryRules::new("SN", "SENEGAL")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C, %S %Z",
        required_fields: &[StreetAddress, City, CountryArea],
        upper_fields: &[StreetAddress, City, CountryArea],
        postal_code_pattern: Some(r"[A-Z]{2} ?\d{5}"),
        postal_code_examples: &["JH 09010", "AD 11010"],
        ..CountryRules::new("SO", "SOMALIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S",
        upper_fields: &[StreetAddress, CountryArea],
        ..CountryRules::new("SR", "SURINAME")
    },
    CountryRules::new("SS", "SOUTH SUDAN"),
    CountryRules::new("ST", "SAO TOME AND PRINCIPE"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z-%C%n%S",
        required_fields: &[StreetAddress, City, CountryArea],
        upper_fields: &[City, CountryArea, PostalCode],
        postal_code_pattern: Some(r"CP [1-3][1-7][0-2]\d"),
        postal_code_examples: &["CP 1101"],
        ..CountryRules::new("SV", "EL SALVADOR")
    },
    CountryRules::new("SX", "SINT MAARTEN"),
    CountryRules {
        city_type: "district",
        ..CountryRules::new("SY", "SYRIA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        upper_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"[HLMS]\d{3}"),
        postal_code_examples: &["H100"],
        ..CountryRules::new("SZ", "SWAZILAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        postal_code_pattern: Some(r"TDCU 1ZZ"),
        postal_code_examples: &["TDCU 1ZZ"],
        ..CountryRules::new("TA", "TRISTAN DA CUNHA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[City, PostalCode],
        postal_code_pattern: Some(r"TKCA 1ZZ"),
        postal_code_examples: &["TKCA 1ZZ"],
        ..CountryRules::new("TC", "TURKS AND CAICOS ISLANDS")
    },
    CountryRules::new("TD", "CHAD"),
    CountryRules::new("TF", "FRENCH SOUTHERN TERRITORIES"),
    CountryRules::new("TG", "TOGO"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%D %C%n%S %Z",
        address_latin_format: Some("%N%n%O%n%A%n%D, %C%n%S, %Z"),
        upper_fields: &[CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["10150", "10210"],
        ..CountryRules::new("TH", "THAILAND")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["735450", "734025"],
        ..CountryRules::new("TJ", "TAJIKISTAN")
    },
    CountryRules::new("TK", "TOKELAU"),
    CountryRules::new("TL", "TIMOR-LESTE"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["744000"],
        ..CountryRules::new("TM", "TURKMENISTAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1002", "8129", "3100", "1030"],
        ..CountryRules::new("TN", "TUNISIA")
    },
    CountryRules::new("TO", "TONGA"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C/%S",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["01960", "06101"],
        city_type: "district",
        ..CountryRules::new("TR", "TURKEY")
    },
    CountryRules::new("TT", "TRINIDAD AND TOBAGO"),
    CountryRules {
        upper_fields: &[StreetAddress, City, CountryArea],
        country_area_type: "island",
        ..CountryRules::new("TV", "TUVALU")
    },
    CountryRules {
        address_format: "%Z%n%S%C%n%A%n%O%n%N",
        address_latin_format: Some("%N%n%O%n%A%n%C, %S %Z"),
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        postal_code_pattern: Some(r"\d{3}(?:\d{2,3})?"),
        postal_code_examples: &["104", "106", "10603", "40867"],
        country_area_type: "county",
        ..CountryRules::new("TW", "TAIWAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{4,5}"),
        postal_code_examples: &["6090", "34413"],
        ..CountryRules::new("TZ", "TANZANIA (UNITED REP.)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S%n%Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["15432", "01055", "01001"],
        country_area_type: "oblast",
        ..CountryRules::new("UA", "UKRAINE")
    },
    CountryRules::new("UG", "UGANDA"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea],
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea],
        postal_code_pattern: Some(r"96898"),
        postal_code_examples: &["96898"],
        country_area_type: "state",
        postal_code_type: "zip",
        ..CountryRules::new("UM", "UNITED STATES MINOR OUTLYING ISLANDS")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C, %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"(\d{5})(?:[ \-](\d{4}))?"),
        postal_code_examples: &["95014", "22162-1010"],
        country_area_type: "state",
        postal_code_type: "zip",
        ..CountryRules::new("US", "UNITED STATES")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C %S",
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["11600"],
        ..CountryRules::new("UY", "URUGUAY")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C%n%S",
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{6}"),
        postal_code_examples: &["702100", "700000"],
        ..CountryRules::new("UZ", "UZBEKISTAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"00120"),
        postal_code_examples: &["00120"],
        ..CountryRules::new("VA", "VATICAN")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z",
        postal_code_pattern: Some(r"VC\d{4}"),
        postal_code_examples: &["VC0100", "VC0110", "VC0400"],
        ..CountryRules::new("VC", "SAINT VINCENT AND THE GRENADINES")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %Z, %S",
        required_fields: &[StreetAddress, City, CountryArea],
        upper_fields: &[City, CountryArea],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["1010", "3001", "8011", "1020"],
        country_area_type: "state",
        ..CountryRules::new("VE", "VENEZUELA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%Z",
        required_fields: &[StreetAddress],
        postal_code_pattern: Some(r"VG\d{4}"),
        postal_code_examples: &["VG1110", "VG1150", "VG1160"],
        ..CountryRules::new("VG", "VIRGIN ISLANDS (BRITISH)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C %S %Z",
        required_fields: &[StreetAddress, City, CountryArea, PostalCode],
        upper_fields: &[StreetAddress, City, Name, CompanyName, CountryArea],
        postal_code_pattern: Some(r"(008(?:(?:[0-4]\d)|(?:5[01])))(?:[ \-](\d{4}))?"),
        postal_code_examples: &["00802-1222", "00850-9802"],
        country_area_type: "state",
        postal_code_type: "zip",
        ..CountryRules::new("VI", "VIRGIN ISLANDS (U.S.)")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%C%n%S %Z",
        postal_code_pattern: Some(r"\d{5}\d?"),
        postal_code_examples: &["70010", "55999"],
        ..CountryRules::new("VN", "VIET NAM")
    },
    CountryRules::new("VU", "VANUATU"),
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"986\d{2}"),
        postal_code_examples: &["98600"],
        ..CountryRules::new("WF", "WALLIS AND FUTUNA ISLANDS")
    },
    CountryRules::new("WS", "SAMOA"),
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"[1-7]\d{4}"),
        postal_code_examples: &["10000"],
        ..CountryRules::new("XK", "KOSOVO")
    },
    CountryRules::new("YE", "YEMEN"),
    CountryRules {
        address_format: "%O%n%N%n%A%n%Z %C",
        required_fields: &[StreetAddress, City, PostalCode],
        upper_fields: &[StreetAddress, City],
        postal_code_pattern: Some(r"976\d{2}"),
        postal_code_examples: &["97600"],
        ..CountryRules::new("YT", "MAYOTTE")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%D%n%C%n%Z",
        required_fields: &[StreetAddress, City, PostalCode],
        postal_code_pattern: Some(r"\d{4}"),
        postal_code_examples: &["0083", "1451", "0001"],
        ..CountryRules::new("ZA", "SOUTH AFRICA")
    },
    CountryRules {
        address_format: "%N%n%O%n%A%n%Z %C",
        postal_code_pattern: Some(r"\d{5}"),
        postal_code_examples: &["50100", "50101"],
        ..CountryRules::new("ZM", "ZAMBIA")
    },
    CountryRules::new("ZW", "ZIMBABWE"),
];
