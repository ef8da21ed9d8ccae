//! Three-letter federation codes. A line starting with one of these codes
//! carries a national rating record instead of a fixed record type.

use std::collections::HashSet;
use std::sync::LazyLock;

pub const FEDERATIONS: [&str; 205] = [
    "AFG", "ALB", "ALG", "AND", "ANG", "ANT", "ARG", "ARM", "ARU", "AUS", "AUT",
    "AZE", "BAH", "BRN", "BAN", "BAR", "BLR", "BEL", "BIZ", "BER", "BHU", "BOL",
    "BIH", "BOT", "BRA", "BRU", "BUL", "BUR", "BDI", "CAM", "CMR", "CAN", "CPV",
    "CAY", "CAF", "CHA", "CHI", "CHN", "CGO", "COL", "COM", "CRC", "CIV", "CRO",
    "CUB", "CYP", "CZE", "COD", "DEN", "DJI", "DMA", "DOM", "ECU", "EGY", "ESA",
    "ENG", "GEQ", "ERI", "EST", "SWZ", "ETH", "FAI", "FIJ", "FIN", "FRA", "GAB",
    "GAM", "GEO", "GER", "GHA", "GRE", "GRL", "GRN", "GUM", "GUA", "GCI", "GUY",
    "HAI", "HON", "HKG", "HUN", "ISL", "IND", "INA", "IRI", "IRQ", "IRL", "IOM",
    "ISR", "ITA", "IVB", "JAM", "JPN", "JCI", "JOR", "KAZ", "KEN", "KOS", "KUW",
    "KGZ", "LAO", "LAT", "LBN", "LES", "LBR", "LBA", "LIE", "LTU", "LUX", "MAC",
    "MAD", "MAW", "MAS", "MDV", "MLI", "MLT", "MTN", "MRI", "MEX", "MDA", "MNC",
    "MGL", "MNE", "MAR", "MOZ", "MYA", "NAM", "NRU", "NEP", "NED", "AHO", "NCL",
    "NZL", "NCA", "NIG", "NGR", "MKD", "NOR", "OMA", "PAK", "PLW", "PLE", "PAN",
    "PNG", "PAR", "PER", "PHI", "POL", "POR", "PUR", "QAT", "ROU", "RUS", "RWA",
    "SKN", "LCA", "VIN", "SMR", "STP", "KSA", "SCO", "SEN", "SRB", "SEY", "SLE",
    "SGP", "SVK", "SLO", "SOL", "SOM", "RSA", "KOR", "SSD", "ESP", "SRI", "SUD",
    "SUR", "SWE", "SUI", "SYR", "TJK", "TAN", "THA", "TLS", "TOG", "TGA", "TPE",
    "TTO", "TUN", "TUR", "TKM", "UGA", "UKR", "UAE", "USA", "URU", "ISV", "UZB",
    "VAN", "VEN", "VIE", "WLS", "YEM", "ZAM", "ZIM",
];

static FEDERATION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FEDERATIONS.iter().copied().collect());

pub fn is_federation(code: &str) -> bool {
    FEDERATION_SET.contains(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert!(is_federation("GER"));
        assert!(is_federation("USA"));
        assert!(is_federation("ZIM"));
    }

    #[test]
    fn test_unknown_codes() {
        assert!(!is_federation("XXX"));
        assert!(!is_federation("ger"));
        assert!(!is_federation("001"));
        assert!(!is_federation("GE"));
    }

    #[test]
    fn test_codes_are_unique() {
        assert_eq!(FEDERATION_SET.len(), FEDERATIONS.len());
    }
}
