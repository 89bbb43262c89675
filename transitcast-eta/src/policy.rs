//! Fixed routing policy: ports, maritime ranges, hubs
//!
//! These tables are business policy with no derivation; the values are
//! kept literally. Tables are ordered slices rather than hash maps so
//! every pass iterates them in a stable order.

/// Departure port per origin country
pub const MAJOR_PORTS: &[(&str, &str)] = &[
    ("Argentina", "Port of Buenos Aires, Argentina"),
    ("Bosnia", "Port of Ploče, Bosnia"),
    ("Brazil", "Port of Santos, Brazil"),
    ("Cambodia", "Port of Phnom Penh, Cambodia"),
    ("China", "Port of Shanghai, China"),
    ("Germany", "Port of Hamburg, Germany"),
    ("India", "Port of Mumbai, India"),
    ("Indonesia", "Port of Tanjung Priok, Jakarta, Indonesia"),
    ("Italy", "Port of Genoa, Italy"),
    ("Japan", "Port of Yokohama, Japan"),
    ("Myanmar", "Port of Yangon, Myanmar"),
    ("South Korea", "Port of Busan, South Korea"),
    ("Sri Lanka", "Port of Colombo, Sri Lanka"),
    ("Taiwan", "Port of Kaohsiung, Taiwan"),
    ("Thailand", "Port of Laem Chabang, Thailand"),
    ("Turkey", "Port of Istanbul, Turkey"),
    ("Vietnam", "Port of Ho Chi Minh, Vietnam"),
];

/// Port-to-port maritime duration range per country, in minutes
pub const MARITIME_RANGES_MINUTES: &[(&str, (f64, f64))] = &[
    ("Argentina", (0.0, 0.0)),
    ("Bosnia", (480.0, 600.0)),
    ("Brazil", (0.0, 0.0)),
    ("Cambodia", (720.0, 960.0)),
    ("China", (720.0, 960.0)),
    ("Germany", (480.0, 600.0)),
    ("India", (720.0, 960.0)),
    ("Indonesia", (840.0, 1080.0)),
    ("Italy", (480.0, 600.0)),
    ("Japan", (720.0, 960.0)),
    ("Myanmar", (720.0, 960.0)),
    ("South Korea", (720.0, 960.0)),
    ("Sri Lanka", (720.0, 960.0)),
    ("Taiwan", (720.0, 960.0)),
    ("Thailand", (720.0, 960.0)),
    ("Turkey", (720.0, 960.0)),
    ("Vietnam", (840.0, 1080.0)),
];

/// Destination economic hubs: (display name, routable address)
pub const ECONOMIC_HUBS: &[(&str, &str)] = &[
    ("São Paulo", "São Paulo, SP"),
    ("Rio de Janeiro", "Rio de Janeiro, RJ"),
    ("Belo Horizonte", "Belo Horizonte, MG"),
    ("Porto Alegre", "Porto Alegre, RS"),
    ("Salvador", "Salvador, BA"),
    ("Recife", "Recife, PE"),
    ("Fortaleza", "Fortaleza, CE"),
    ("Curitiba", "Curitiba, PR"),
    ("Florianópolis", "Florianópolis, SC"),
    ("Goiânia", "Goiânia, GO"),
];

/// Countries with no maritime leg: factories ship terrestrially straight
/// to each economic hub
pub const DIRECT_COUNTRIES: &[&str] = &["Brazil", "Argentina"];

/// Country whose factory-to-port leg is fixed at zero hours, with no
/// oracle call
pub const ZERO_TERRESTRIAL_COUNTRY: &str = "South Korea";

/// Fixed arrival port used for the shared port-to-hub distance pass
pub const HUB_DISTANCE_PORT: &str = "Port of Santos, SP";

/// Normalization constant in the workforce weighting divisor
/// (`total_workers * WORKER_SHARE_DIVISOR`)
pub const WORKER_SHARE_DIVISOR: f64 = 10.0;

/// Departure port for a country, when one is configured
pub fn port_for(country: &str) -> Option<&'static str> {
    MAJOR_PORTS
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, port)| *port)
}

/// Maritime (min, max) range in minutes for a country
pub fn maritime_range_minutes(country: &str) -> Option<(f64, f64)> {
    MARITIME_RANGES_MINUTES
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, range)| *range)
}

/// Whether the country ships terrestrially straight to the hubs
pub fn is_direct(country: &str) -> bool {
    DIRECT_COUNTRIES.contains(&country)
}
