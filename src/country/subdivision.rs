use anyhow::Result;

/// Per-country strategy mapping a subdivision (state/province) code to a
/// display name. Only a handful of countries in the static table carry one.
pub trait SubdivisionResolver: Send + Sync {
    fn subdivision_name(&self, code: &str) -> Option<&'static str>;
}

/// Constructor signature the static table registers resolvers with. A
/// constructor that fails leaves its country without the capability.
pub(crate) type ResolverCtor = fn() -> Result<Box<dyn SubdivisionResolver>>;

pub(crate) fn us_states() -> Result<Box<dyn SubdivisionResolver>> {
    Ok(Box::new(UsStates))
}

pub(crate) fn canada_provinces() -> Result<Box<dyn SubdivisionResolver>> {
    Ok(Box::new(CanadaProvinces))
}

pub(crate) fn mexico_states() -> Result<Box<dyn SubdivisionResolver>> {
    Ok(Box::new(MexicoStates))
}

/// US state, district and territory codes.
pub struct UsStates;

impl SubdivisionResolver for UsStates {
    fn subdivision_name(&self, code: &str) -> Option<&'static str> {
        match code {
            "AL" => Some("Alabama"),
            "AK" => Some("Alaska"),
            "AZ" => Some("Arizona"),
            "AR" => Some("Arkansas"),
            "CA" => Some("California"),
            "CO" => Some("Colorado"),
            "CT" => Some("Connecticut"),
            "DE" => Some("Delaware"),
            "FL" => Some("Florida"),
            "GA" => Some("Georgia"),
            "HI" => Some("Hawaii"),
            "ID" => Some("Idaho"),
            "IL" => Some("Illinois"),
            "IN" => Some("Indiana"),
            "IA" => Some("Iowa"),
            "KS" => Some("Kansas"),
            "KY" => Some("Kentucky"),
            "LA" => Some("Louisiana"),
            "ME" => Some("Maine"),
            "MD" => Some("Maryland"),
            "MA" => Some("Massachusetts"),
            "MI" => Some("Michigan"),
            "MN" => Some("Minnesota"),
            "MS" => Some("Mississippi"),
            "MO" => Some("Missouri"),
            "MT" => Some("Montana"),
            "NE" => Some("Nebraska"),
            "NV" => Some("Nevada"),
            "NH" => Some("New Hampshire"),
            "NJ" => Some("New Jersey"),
            "NM" => Some("New Mexico"),
            "NY" => Some("New York"),
            "NC" => Some("North Carolina"),
            "ND" => Some("North Dakota"),
            "OH" => Some("Ohio"),
            "OK" => Some("Oklahoma"),
            "OR" => Some("Oregon"),
            "PA" => Some("Pennsylvania"),
            "RI" => Some("Rhode Island"),
            "SC" => Some("South Carolina"),
            "SD" => Some("South Dakota"),
            "TN" => Some("Tennessee"),
            "TX" => Some("Texas"),
            "UT" => Some("Utah"),
            "VT" => Some("Vermont"),
            "VA" => Some("Virginia"),
            "WA" => Some("Washington"),
            "WV" => Some("West Virginia"),
            "WI" => Some("Wisconsin"),
            "WY" => Some("Wyoming"),
            "DC" => Some("District of Columbia"),
            "AS" => Some("American Samoa"),
            "GU" => Some("Guam"),
            "MP" => Some("Northern Mariana Islands"),
            "PR" => Some("Puerto Rico"),
            "VI" => Some("US Virgin Islands"),
            _ => None,
        }
    }
}

/// Canadian province and territory codes.
pub struct CanadaProvinces;

impl SubdivisionResolver for CanadaProvinces {
    fn subdivision_name(&self, code: &str) -> Option<&'static str> {
        match code {
            "AB" => Some("Alberta"),
            "BC" => Some("British Columbia"),
            "MB" => Some("Manitoba"),
            "NB" => Some("New Brunswick"),
            "NL" => Some("Newfoundland and Labrador"),
            "NS" => Some("Nova Scotia"),
            "NT" => Some("Northwest Territories"),
            "NU" => Some("Nunavut"),
            "ON" => Some("Ontario"),
            "PE" => Some("Prince Edward Island"),
            "QC" => Some("Quebec"),
            "SK" => Some("Saskatchewan"),
            "YT" => Some("Yukon"),
            _ => None,
        }
    }
}

/// Mexican state codes (ISO 3166-2:MX three-letter forms).
pub struct MexicoStates;

impl SubdivisionResolver for MexicoStates {
    fn subdivision_name(&self, code: &str) -> Option<&'static str> {
        match code {
            "AGU" => Some("Aguascalientes"),
            "BCN" => Some("Baja California"),
            "BCS" => Some("Baja California Sur"),
            "CAM" => Some("Campeche"),
            "CHP" => Some("Chiapas"),
            "CHH" => Some("Chihuahua"),
            "CMX" => Some("Mexico City"),
            "COA" => Some("Coahuila"),
            "COL" => Some("Colima"),
            "DUR" => Some("Durango"),
            "GUA" => Some("Guanajuato"),
            "GRO" => Some("Guerrero"),
            "HID" => Some("Hidalgo"),
            "JAL" => Some("Jalisco"),
            "MEX" => Some("Mexico State"),
            "MIC" => Some("Michoacan"),
            "MOR" => Some("Morelos"),
            "NAY" => Some("Nayarit"),
            "NLE" => Some("Nuevo Leon"),
            "OAX" => Some("Oaxaca"),
            "PUE" => Some("Puebla"),
            "QUE" => Some("Queretaro"),
            "ROO" => Some("Quintana Roo"),
            "SLP" => Some("San Luis Potosi"),
            "SIN" => Some("Sinaloa"),
            "SON" => Some("Sonora"),
            "TAB" => Some("Tabasco"),
            "TAM" => Some("Tamaulipas"),
            "TLA" => Some("Tlaxcala"),
            "VER" => Some("Veracruz"),
            "YUC" => Some("Yucatan"),
            "ZAC" => Some("Zacatecas"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_states() {
        let us = UsStates;
        assert_eq!(us.subdivision_name("CA"), Some("California"));
        assert_eq!(us.subdivision_name("DC"), Some("District of Columbia"));
        assert_eq!(us.subdivision_name("PR"), Some("Puerto Rico"));
        assert_eq!(us.subdivision_name("XX"), None);
    }

    #[test]
    fn test_canada_provinces() {
        let ca = CanadaProvinces;
        assert_eq!(ca.subdivision_name("BC"), Some("British Columbia"));
        assert_eq!(ca.subdivision_name("QC"), Some("Quebec"));
        assert_eq!(ca.subdivision_name("ZZ"), None);
    }

    #[test]
    fn test_mexico_states() {
        let mx = MexicoStates;
        assert_eq!(mx.subdivision_name("JAL"), Some("Jalisco"));
        assert_eq!(mx.subdivision_name("CMX"), Some("Mexico City"));
        assert_eq!(mx.subdivision_name("QQ"), None);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(UsStates.subdivision_name("ca"), None);
    }
}
