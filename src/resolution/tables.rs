// src/resolution/tables.rs - Curated alias and city data
//
// Keys are written the way they show up in source spreadsheets; they are run
// through the location normalizer when the lookup tables are built, so
// diacritics and capitals are fine here.

/// Country names, demonyms, abbreviations and "city, country" variants.
pub const COUNTRY_SYNONYMS: &[(&str, &str)] = &[
    // MENA
    ("uae", "United Arab Emirates"),
    ("u.a.e.", "United Arab Emirates"),
    ("united arab emirates", "United Arab Emirates"),
    ("emirates", "United Arab Emirates"),
    ("emiratos arabes unidos", "United Arab Emirates"),
    ("emiratos árabes unidos", "United Arab Emirates"),
    ("dubai, uae", "United Arab Emirates"),
    ("uae-dubai", "United Arab Emirates"),
    ("ksa", "Saudi Arabia"),
    ("k.s.a.", "Saudi Arabia"),
    ("kingdom of saudi arabia", "Saudi Arabia"),
    ("saudi", "Saudi Arabia"),
    ("arabia saudita", "Saudi Arabia"),
    ("qatar", "Qatar"),
    ("state of qatar", "Qatar"),
    ("doha, qatar", "Qatar"),
    ("bahrain", "Bahrain"),
    ("kingdom of bahrain", "Bahrain"),
    ("manama, bahrain", "Bahrain"),
    ("oman", "Oman"),
    ("sultanate of oman", "Oman"),
    ("muscat, oman", "Oman"),
    ("kuwait", "Kuwait"),
    ("kuwait city, kuwait", "Kuwait"),
    ("egypt", "Egypt"),
    ("arab republic of egypt", "Egypt"),
    ("cairo, egypt", "Egypt"),
    ("jordan", "Jordan"),
    ("hashemite kingdom of jordan", "Jordan"),
    ("amman, jordan", "Jordan"),
    ("lebanon", "Lebanon"),
    ("beirut, lebanon", "Lebanon"),
    ("turkey", "Turkey"),
    ("türkiye", "Turkey"),
    ("turkiye", "Turkey"),
    ("istanbul, turkey", "Turkey"),
    ("israel", "Israel"),
    ("tel aviv, israel", "Israel"),
    // Cities standing in for their country. Dubai and Riyadh are left to the
    // city table.
    ("abu dhabi", "United Arab Emirates"),
    ("sharjah", "United Arab Emirates"),
    ("jeddah", "Saudi Arabia"),
    ("dammam", "Saudi Arabia"),
    ("doha", "Qatar"),
    ("manama", "Bahrain"),
    ("muscat", "Oman"),
    ("kuwait city", "Kuwait"),
    ("cairo", "Egypt"),
    ("amman", "Jordan"),
    ("beirut", "Lebanon"),
    ("istanbul", "Turkey"),
    ("tel aviv", "Israel"),
    ("jerusalem", "Israel"),
    // Other common
    ("usa", "United States"),
    ("u.s.a.", "United States"),
    ("us", "United States"),
    ("u.s.", "United States"),
    ("united states", "United States"),
    ("united states of america", "United States"),
    ("estados unidos", "United States"),
    ("uk", "United Kingdom"),
    ("u.k.", "United Kingdom"),
    ("united kingdom", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("england", "United Kingdom"),
    ("scotland", "United Kingdom"),
    ("wales", "United Kingdom"),
    ("northern ireland", "United Kingdom"),
    ("hong kong", "Hong Kong"),
    ("hong kong sar", "Hong Kong"),
    ("china", "China"),
    ("prc", "China"),
    ("india", "India"),
    ("mexico", "Mexico"),
    ("méxico", "Mexico"),
    ("spain", "Spain"),
    ("españa", "Spain"),
    ("france", "France"),
    ("germany", "Germany"),
    ("deutschland", "Germany"),
    ("switzerland", "Switzerland"),
    ("swiss", "Switzerland"),
    ("schweiz", "Switzerland"),
    ("netherlands", "Netherlands"),
    ("the netherlands", "Netherlands"),
    ("holland", "Netherlands"),
    ("singapore", "Singapore"),
    ("canada", "Canada"),
    ("brazil", "Brazil"),
    ("brasil", "Brazil"),
    // Bare names that would otherwise fuzzy-match a longer country
    ("korea", "South Korea"),
    ("republic of korea", "South Korea"),
    ("america", "United States"),
];

/// Region names and generic words that must never be fuzzy-matched to a
/// country. A location made only of these goes to manual review.
pub const NON_COUNTRY_TERMS: &[&str] = &[
    "africa",
    "asia",
    "europe",
    "middle east",
    "mena",
    "gcc",
    "north america",
    "south america",
    "latin america",
    "central america",
    "island",
    "islands",
    "republic",
    "kingdom",
    "global",
    "worldwide",
];

/// Cities mapped to the country they are in, mostly MENA plus frequent
/// global venture hubs.
pub const CITY_TO_COUNTRY: &[(&str, &str)] = &[
    ("dubai", "United Arab Emirates"),
    ("abu dhabi", "United Arab Emirates"),
    ("sharjah", "United Arab Emirates"),
    ("ajman", "United Arab Emirates"),
    ("ras al khaimah", "United Arab Emirates"),
    ("riyadh", "Saudi Arabia"),
    ("jeddah", "Saudi Arabia"),
    ("dammam", "Saudi Arabia"),
    ("khobar", "Saudi Arabia"),
    ("al khobar", "Saudi Arabia"),
    ("doha", "Qatar"),
    ("manama", "Bahrain"),
    ("muscat", "Oman"),
    ("kuwait city", "Kuwait"),
    ("cairo", "Egypt"),
    ("giza", "Egypt"),
    ("alexandria", "Egypt"),
    ("amman", "Jordan"),
    ("beirut", "Lebanon"),
    ("istanbul", "Turkey"),
    ("ankara", "Turkey"),
    ("tel aviv", "Israel"),
    ("jerusalem", "Israel"),
    ("haifa", "Israel"),
    // Global
    ("london", "United Kingdom"),
    ("paris", "France"),
    ("madrid", "Spain"),
    ("barcelona", "Spain"),
    ("berlin", "Germany"),
    ("munich", "Germany"),
    ("zurich", "Switzerland"),
    ("geneva", "Switzerland"),
    ("amsterdam", "Netherlands"),
    ("new york", "United States"),
    ("nyc", "United States"),
    ("san francisco", "United States"),
    ("palo alto", "United States"),
    ("menlo park", "United States"),
    ("boston", "United States"),
    ("miami", "United States"),
    ("los angeles", "United States"),
    ("austin", "United States"),
    ("toronto", "Canada"),
    ("vancouver", "Canada"),
    ("montreal", "Canada"),
    ("mexico city", "Mexico"),
    ("cdmx", "Mexico"),
    ("guadalajara", "Mexico"),
    ("monterrey", "Mexico"),
    ("singapore", "Singapore"),
    ("hong kong", "Hong Kong"),
];
