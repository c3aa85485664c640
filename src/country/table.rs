use super::subdivision::{self, ResolverCtor};

/// One row of the embedded country data. `code2` is never blank; `code3`
/// may be.
pub(crate) struct CountryRow {
    pub code2: &'static str,
    pub code3: &'static str,
    pub name: &'static str,
    pub subdivisions: Option<ResolverCtor>,
}

const fn row(code2: &'static str, code3: &'static str, name: &'static str) -> CountryRow {
    CountryRow {
        code2,
        code3,
        name,
        subdivisions: None,
    }
}

const fn row_sd(
    code2: &'static str,
    code3: &'static str,
    name: &'static str,
    ctor: ResolverCtor,
) -> CountryRow {
    CountryRow {
        code2,
        code3,
        name,
        subdivisions: Some(ctor),
    }
}

pub(crate) const COUNTRY_TABLE: &[CountryRow] = &[
    //     2-ltr  3-ltr  Name
    //     -----  -----  -------------------------
    row("AF", "AFG", "Afghanistan"),
    row("AL", "ALB", "Albania"),
    row("DZ", "DZA", "Algeria"),
    row("AD", "AND", "Andorra"),
    row("AO", "AGO", "Angola"),
    row("AI", "AIA", "Anguilla"),
    row("AQ", "ATA", "Antarctica"),
    row("AG", "ATG", "Antigua/Barbuda"),
    row("AR", "ARG", "Argentina"),
    row("AM", "ARM", "Armenia"),
    row("AW", "ABW", "Aruba"),
    row("AU", "AUS", "Australia"),
    row("AT", "AUT", "Austria"),
    row("AZ", "AZE", "Azerbaijan"),
    row("BS", "BHS", "Bahamas"),
    row("BH", "BHR", "Bahrain"),
    row("BD", "BGD", "Bangladesh"),
    row("BB", "BRB", "Barbados"),
    row("BY", "BLR", "Belarus"),
    row("BE", "BEL", "Belgium"),
    row("BZ", "BLZ", "Belize"),
    row("BJ", "BEN", "Benin"),
    row("BM", "BMU", "Bermuda"),
    row("BT", "BTN", "Bhutan"),
    row("BO", "BOL", "Bolivia"),
    row("BQ", "BES", "Bonaire"),
    row("BA", "BIH", "Bosnia/Herzegovina"),
    row("BW", "BWA", "Botswana"),
    row("BR", "BRA", "Brazil"),
    row("BN", "BRN", "Brunei Darussalam"),
    row("BG", "BGR", "Bulgaria"),
    row("BF", "BFA", "Burkina Faso"),
    row("BI", "BDI", "Burundi"),
    row("KH", "KHM", "Cambodia"),
    row("CM", "CMR", "Cameroon"),
    row_sd("CA", "CAN", "Canada", subdivision::canada_provinces),
    row("CV", "CPV", "Cape Verde"),
    row("KY", "CYM", "Cayman Islands"),
    row("TD", "TCD", "Chad"),
    row("CL", "CHL", "Chile"),
    row("CN", "CHN", "China"),
    row("CO", "COL", "Colombia"),
    row("KM", "COM", "Comoros"),
    row("CG", "COG", "Congo"),
    row("CD", "COD", "Congo"),
    row("CR", "CRI", "Costa Rica"),
    row("HR", "HRV", "Croatia"),
    row("CU", "CUB", "Cuba"),
    row("CY", "CYP", "Cyprus"),
    row("CZ", "CZE", "Czech Republic"),
    row("CI", "CIV", "Ivory Coast"),
    row("DK", "DNK", "Denmark"),
    row("DJ", "DJI", "Djibouti"),
    row("DM", "DMA", "Dominica"),
    row("DO", "DOM", "Dominican Republic"),
    row("EC", "ECU", "Ecuador"),
    row("EG", "EGY", "Egypt"),
    row("SV", "SLV", "El Salvador"),
    row("EE", "EST", "Estonia"),
    row("ET", "ETH", "Ethiopia"),
    row("FJ", "FJI", "Fiji"),
    row("FI", "FIN", "Finland"),
    row("FR", "FRA", "France"),
    row("GA", "GAB", "Gabon"),
    row("GM", "GMB", "Gambia"),
    row("GE", "GEO", "Georgia"),
    row("DE", "DEU", "Germany"),
    row("GH", "GHA", "Ghana"),
    row("GI", "GIB", "Gibraltar"),
    row("GR", "GRC", "Greece"),
    row("GL", "GRL", "Greenland"),
    row("GD", "GRD", "Grenada"),
    row("GP", "GLP", "Guadeloupe"),
    row("GU", "GUM", "Guam"),
    row("GT", "GTM", "Guatemala"),
    row("GG", "GGY", "Guernsey"),
    row("GN", "GIN", "Guinea"),
    row("GY", "GUY", "Guyana"),
    row("HT", "HTI", "Haiti"),
    row("HN", "HND", "Honduras"),
    row("HK", "HKG", "Hong Kong"),
    row("HU", "HUN", "Hungary"),
    row("IS", "ISL", "Iceland"),
    row("IN", "IND", "India"),
    row("ID", "IDN", "Indonesia"),
    row("IR", "IRN", "Iran"),
    row("IQ", "IRQ", "Iraq"),
    row("IE", "IRL", "Ireland"),
    row("IM", "IMN", "Isle of Man"),
    row("IL", "ISR", "Israel"),
    row("IT", "ITA", "Italy"),
    row("JM", "JAM", "Jamaica"),
    row("JP", "JPN", "Japan"),
    row("JE", "JEY", "Jersey"),
    row("JO", "JOR", "Jordan"),
    row("KZ", "KAZ", "Kazakhstan"),
    row("KE", "KEN", "Kenya"),
    row("KI", "KIR", "Kiribati"),
    row("KR", "KOR", "South Korea"),
    row("KW", "KWT", "Kuwait"),
    row("KG", "KGZ", "Kyrgyzstan"),
    row("LA", "LAO", "Lao"),
    row("LV", "LVA", "Latvia"),
    row("LB", "LBN", "Lebanon"),
    row("LS", "LSO", "Lesotho"),
    row("LR", "LBR", "Liberia"),
    row("LY", "LBY", "Libya"),
    row("LI", "LIE", "Liechtenstein"),
    row("LT", "LTU", "Lithuania"),
    row("LU", "LUX", "Luxembourg"),
    row("MO", "MAC", "Macao"),
    row("MK", "MKD", "Macedonia"),
    row("MG", "MDG", "Madagascar"),
    row("MW", "MWI", "Malawi"),
    row("MY", "MYS", "Malaysia"),
    row("MV", "MDV", "Maldives"),
    row("ML", "MLI", "Mali"),
    row("MT", "MLT", "Malta"),
    row("MH", "MHL", "Marshall Islands"),
    row("MQ", "MTQ", "Martinique"),
    row("MR", "MRT", "Mauritania"),
    row("MU", "MUS", "Mauritius"),
    row("YT", "MYT", "Mayotte"),
    row_sd("MX", "MEX", "Mexico", subdivision::mexico_states),
    row("FM", "FSM", "Micronesia"),
    row("MD", "MDA", "Moldova"),
    row("MC", "MCO", "Monaco"),
    row("MN", "MNG", "Mongolia"),
    row("ME", "MNE", "Montenegro"),
    row("MS", "MSR", "Montserrat"),
    row("MA", "MAR", "Morocco"),
    row("MZ", "MOZ", "Mozambique"),
    row("NA", "NAM", "Namibia"),
    row("NR", "NRU", "Nauru"),
    row("NP", "NPL", "Nepal"),
    row("NL", "NLD", "Netherlands"),
    row("NC", "NCL", "New Caledonia"),
    row("NZ", "NZL", "New Zealand"),
    row("NI", "NIC", "Nicaragua"),
    row("NE", "NER", "Niger"),
    row("NG", "NGA", "Nigeria"),
    row("NU", "NIU", "Niue"),
    row("NF", "NFK", "Norfolk Island"),
    row("NO", "NOR", "Norway"),
    row("OM", "OMN", "Oman"),
    row("PK", "PAK", "Pakistan"),
    row("PW", "PLW", "Palau"),
    row("PS", "PSE", "Palestine"),
    row("PA", "PAN", "Panama"),
    row("PY", "PRY", "Paraguay"),
    row("PE", "PER", "Peru"),
    row("PH", "PHL", "Philippines"),
    row("PN", "PCN", "Pitcairn"),
    row("PL", "POL", "Poland"),
    row("PT", "PRT", "Portugal"),
    row("PR", "PRI", "Puerto Rico"),
    row("QA", "QAT", "Qatar"),
    row("RO", "ROU", "Romania"),
    row("RU", "RUS", "Russia"),
    row("RW", "RWA", "Rwanda"),
    row("RE", "REU", "Reunion"),
    row("LC", "LCA", "Saint Lucia"),
    row("MF", "MAF", "Saint Martin (French)"),
    row("WS", "WSM", "Samoa"),
    row("SM", "SMR", "San Marino"),
    row("SA", "SAU", "Saudi Arabia"),
    row("SN", "SEN", "Senegal"),
    row("RS", "SRB", "Serbia"),
    row("SC", "SYC", "Seychelles"),
    row("SL", "SLE", "Sierra Leone"),
    row("SG", "SGP", "Singapore"),
    row("SX", "SXM", "Sint Maarten (Dutch)"),
    row("SK", "SVK", "Slovakia"),
    row("SI", "SVN", "Slovenia"),
    row("SO", "SOM", "Somalia"),
    row("ZA", "ZAF", "South Africa"),
    row("ES", "ESP", "Spain"),
    row("LK", "LKA", "Sri Lanka"),
    row("SD", "SDN", "Sudan"),
    row("SR", "SUR", "Suriname"),
    row("SZ", "SWZ", "Swaziland"),
    row("SE", "SWE", "Sweden"),
    row("CH", "CHE", "Switzerland"),
    row("SY", "SYR", "Syria"),
    row("TW", "TWN", "Taiwan"),
    row("TJ", "TJK", "Tajikistan"),
    row("TZ", "TZA", "Tanzania"),
    row("TH", "THA", "Thailand"),
    row("TL", "TLS", "Timor-Leste"),
    row("TG", "TGO", "Togo"),
    row("TK", "TKL", "Tokelau"),
    row("TO", "TON", "Tonga"),
    row("TT", "TTO", "Trinidad/Tobago"),
    row("TN", "TUN", "Tunisia"),
    row("TR", "TUR", "Turkey"),
    row("TM", "TKM", "Turkmenistan"),
    row("TV", "TUV", "Tuvalu"),
    row("UG", "UGA", "Uganda"),
    row("UA", "UKR", "Ukraine"),
    row("AE", "ARE", "United Arab Emirates"),
    row("GB", "GBR", "United Kingdom"),
    row_sd("US", "USA", "United States", subdivision::us_states),
    row("UY", "URY", "Uruguay"),
    row("UZ", "UZB", "Uzbekistan"),
    row("VU", "VUT", "Vanuatu"),
    row("VE", "VEN", "Venezuela"),
    row("VN", "VNM", "Viet Nam"),
    row("VG", "VGB", "British Virgin Islands"),
    row("VI", "VIR", "US Virgin Islands"),
    row("ZM", "ZMB", "Zambia"),
    row("ZW", "ZWE", "Zimbabwe"),
];
