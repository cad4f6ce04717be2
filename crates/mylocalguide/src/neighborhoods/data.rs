use super::tables::StreetRange;

const fn r(min: u32, max: u32) -> StreetRange {
    StreetRange::new(min, max)
}

pub(super) const NEIGHBORHOODS: &[(&str, &str)] = &[
    ("The Mission", "Murals, taquerias, and Dolores Park along the Valencia and Mission corridors."),
    ("SoMa", "South of Market warehouses turned galleries, tech offices, and late-night clubs."),
    ("Financial District", "Downtown towers, power-lunch spots, and the Transamerica Pyramid."),
    ("Nob Hill", "Cable-car crest with grand hotels and Grace Cathedral."),
    ("North Beach", "Little Italy cafes, bookshops, and the foot of Telegraph Hill."),
    ("Chinatown", "The oldest Chinatown in North America, entered through the Dragon Gate."),
    ("Union Square", "Central shopping district and theater row."),
    ("Hayes Valley", "Boutiques and beer gardens around Patricia's Green."),
    ("The Castro", "Historic LGBTQ+ neighborhood anchored by the Castro Theatre."),
    ("Haight-Ashbury", "Vintage shops and the legacy of the Summer of Love."),
    ("Lower Haight", "Dive bars, record stores, and brunch east of Divisadero."),
    ("Cole Valley", "Quiet village streets on the edge of Golden Gate Park."),
    ("Marina District", "Waterfront promenade, Chestnut Street shopping, and the Palace of Fine Arts."),
    ("Pacific Heights", "Victorian mansions and Fillmore Street dining."),
    ("Russian Hill", "Steep streets, hidden stairways, and the crooked block of Lombard."),
    ("Noe Valley", "Stroller-friendly 24th Street shops and cafes."),
    ("Potrero Hill", "Sunny hillside with skyline views and neighborhood bistros."),
    ("Dogpatch", "Former shipyard district with breweries and makers."),
    ("Mission Bay", "Ballpark, arena, and new waterfront parks."),
    ("Bernal Heights", "Village feel on Cortland Avenue below Bernal Hill."),
    ("Richmond District", "Dim sum, Clement Street markets, and Lands End trails."),
    ("Sunset District", "Fog, Ocean Beach, and Irving Street noodle shops."),
    ("Tenderloin", "Dense downtown blocks with historic bars and Southeast Asian kitchens."),
    ("Fisherman's Wharf", "Piers, sea lions, sourdough, and Ghirardelli Square."),
    ("Japantown", "Japan Center malls, ramen, and the Peace Pagoda."),
    ("Presidio", "Former army post turned national park with Crissy Field."),
    ("Embarcadero", "Bayfront boulevard from the Ferry Building to the piers."),
    ("Western Addition", "Alamo Square, the Painted Ladies, and the Fillmore jazz district."),
    ("Glen Park", "Canyon trails and a compact village center near BART."),
    ("Excelsior", "Family-run shops and global food along Mission Street's outer stretch."),
    ("Bayview", "Third Street corridor and Hunters Point shoreline."),
];

pub(super) const ZIP_RULES: &[(&str, &[&str])] = &[
    ("94102", &["Tenderloin", "Hayes Valley", "Union Square"]),
    ("94103", &["SoMa"]),
    ("94104", &["Financial District"]),
    ("94105", &["SoMa", "Embarcadero"]),
    ("94107", &["Potrero Hill", "Dogpatch", "Mission Bay"]),
    ("94108", &["Chinatown", "Nob Hill"]),
    ("94109", &["Russian Hill", "Nob Hill", "Tenderloin"]),
    ("94110", &["The Mission"]),
    ("94111", &["Financial District"]),
    ("94112", &["Excelsior"]),
    ("94114", &["The Castro", "Noe Valley"]),
    ("94115", &["Pacific Heights", "Japantown", "Western Addition"]),
    ("94116", &["Sunset District"]),
    ("94117", &["Haight-Ashbury", "Cole Valley", "Lower Haight"]),
    ("94118", &["Richmond District"]),
    ("94121", &["Richmond District"]),
    ("94122", &["Sunset District"]),
    ("94123", &["Marina District"]),
    ("94124", &["Bayview"]),
    ("94129", &["Presidio"]),
    ("94131", &["Glen Park", "Noe Valley"]),
    ("94133", &["North Beach", "Fisherman's Wharf", "Chinatown"]),
    ("94158", &["Mission Bay"]),
];

pub(super) const STREET_RULES: &[(&str, &[StreetRange], &str)] = &[
    ("California St", &[r(1, 699)], "Financial District"),
    ("California St", &[r(700, 1499)], "Nob Hill"),
    ("Market St", &[r(1, 499)], "Financial District"),
    ("Market St", &[r(2000, 2399)], "The Castro"),
    ("Mission St", &[r(1, 1499)], "SoMa"),
    ("Mission St", &[r(1500, 3599)], "The Mission"),
    ("Mission St", &[r(3600, 3999)], "Bernal Heights"),
    ("Mission St", &[r(4000, 5999)], "Excelsior"),
    ("Valencia St", &[r(1, 1399)], "The Mission"),
    ("Folsom St", &[r(1, 1999)], "SoMa"),
    ("Folsom St", &[r(2000, 3299)], "The Mission"),
    ("Howard St", &[r(1, 1799)], "SoMa"),
    ("24th St", &[r(2500, 3899)], "The Mission"),
    ("24th St", &[r(3900, 4299)], "Noe Valley"),
    ("Grant Ave", &[r(1, 399)], "Union Square"),
    ("Grant Ave", &[r(400, 1199)], "Chinatown"),
    ("Grant Ave", &[r(1200, 1799)], "North Beach"),
    ("Columbus Ave", &[r(300, 999)], "North Beach"),
    ("Geary St", &[r(1, 599)], "Union Square"),
    ("Geary Blvd", &[r(1500, 1899)], "Japantown"),
    ("Post St", &[r(1500, 1899)], "Japantown"),
    ("Eddy St", &[r(100, 599)], "Tenderloin"),
    ("Turk St", &[r(1, 499)], "Tenderloin"),
    ("Haight St", &[r(400, 999)], "Lower Haight"),
    ("Haight St", &[r(1400, 1999)], "Haight-Ashbury"),
    ("Cole St", &[r(600, 1099)], "Cole Valley"),
    ("Castro St", &[r(300, 699)], "The Castro"),
    ("Hayes St", &[r(300, 699)], "Hayes Valley"),
    ("Divisadero St", &[r(500, 1199)], "Western Addition"),
    ("Fillmore St", &[r(2000, 3199)], "Pacific Heights"),
    ("Chestnut St", &[r(1800, 2399)], "Marina District"),
    ("Hyde St", &[r(1100, 2699)], "Russian Hill"),
    ("Jefferson St", &[r(1, 699)], "Fisherman's Wharf"),
    ("Steuart St", &[r(1, 199)], "Embarcadero"),
    ("Cortland Ave", &[r(1, 999)], "Bernal Heights"),
    ("Connecticut St", &[r(1, 999)], "Potrero Hill"),
    ("3rd St", &[r(600, 1399)], "Mission Bay"),
    ("3rd St", &[r(2200, 2799)], "Dogpatch"),
    ("3rd St", &[r(4000, 5999)], "Bayview"),
    ("Diamond St", &[r(2600, 2899)], "Glen Park"),
    ("Clement St", &[r(100, 999)], "Richmond District"),
    ("Irving St", &[r(500, 2499)], "Sunset District"),
];

/// First registered keyword wins, so specific landmarks precede broad ones.
pub(super) const LANDMARKS: &[(&str, &str)] = &[
    ("EMBARCADERO CENTER", "Financial District"),
    ("TRANSAMERICA", "Financial District"),
    ("FINANCIAL DISTRICT", "Financial District"),
    ("FERRY BUILDING", "Embarcadero"),
    ("EMBARCADERO", "Embarcadero"),
    ("PIER 39", "Fisherman's Wharf"),
    ("GHIRARDELLI", "Fisherman's Wharf"),
    ("FISHERMAN'S WHARF", "Fisherman's Wharf"),
    ("FISHERMANS WHARF", "Fisherman's Wharf"),
    ("COIT TOWER", "North Beach"),
    ("WASHINGTON SQUARE", "North Beach"),
    ("NORTH BEACH", "North Beach"),
    ("DRAGON GATE", "Chinatown"),
    ("CHINATOWN", "Chinatown"),
    ("GRACE CATHEDRAL", "Nob Hill"),
    ("NOB HILL", "Nob Hill"),
    ("RUSSIAN HILL", "Russian Hill"),
    ("UNION SQUARE", "Union Square"),
    ("TENDERLOIN", "Tenderloin"),
    ("YERBA BUENA", "SoMa"),
    ("MOSCONE", "SoMa"),
    ("SFMOMA", "SoMa"),
    ("SOUTH OF MARKET", "SoMa"),
    ("ORACLE PARK", "Mission Bay"),
    ("CHASE CENTER", "Mission Bay"),
    ("MISSION BAY", "Mission Bay"),
    ("DOLORES PARK", "The Mission"),
    ("MISSION DISTRICT", "The Mission"),
    ("CASTRO THEATRE", "The Castro"),
    ("HARVEY MILK", "The Castro"),
    ("HAYES VALLEY", "Hayes Valley"),
    ("ALAMO SQUARE", "Western Addition"),
    ("PAINTED LADIES", "Western Addition"),
    ("JAPAN CENTER", "Japantown"),
    ("JAPANTOWN", "Japantown"),
    ("LOWER HAIGHT", "Lower Haight"),
    ("HAIGHT-ASHBURY", "Haight-Ashbury"),
    ("HAIGHT ASHBURY", "Haight-Ashbury"),
    ("COLE VALLEY", "Cole Valley"),
    ("PALACE OF FINE ARTS", "Marina District"),
    ("MARINA GREEN", "Marina District"),
    ("PACIFIC HEIGHTS", "Pacific Heights"),
    ("LAFAYETTE PARK", "Pacific Heights"),
    ("CRISSY FIELD", "Presidio"),
    ("PRESIDIO", "Presidio"),
    ("NOE VALLEY", "Noe Valley"),
    ("POTRERO HILL", "Potrero Hill"),
    ("DOGPATCH", "Dogpatch"),
    ("BERNAL HEIGHTS", "Bernal Heights"),
    ("PRECITA PARK", "Bernal Heights"),
    ("GLEN CANYON", "Glen Park"),
    ("GLEN PARK", "Glen Park"),
    ("LANDS END", "Richmond District"),
    ("INNER RICHMOND", "Richmond District"),
    ("OUTER RICHMOND", "Richmond District"),
    ("OCEAN BEACH", "Sunset District"),
    ("INNER SUNSET", "Sunset District"),
    ("OUTER SUNSET", "Sunset District"),
    ("EXCELSIOR", "Excelsior"),
    ("HUNTERS POINT", "Bayview"),
    ("BAYVIEW", "Bayview"),
];

/// Loose shorthand too ambiguous to rank alongside landmarks.
pub(super) const SECONDARY_KEYWORDS: &[(&str, &str)] = &[
    ("THE MISSION", "The Mission"),
    ("CASTRO", "The Castro"),
    ("HAIGHT", "Haight-Ashbury"),
    ("WHARF", "Fisherman's Wharf"),
    ("FIDI", "Financial District"),
    ("SOMA", "SoMa"),
    ("MARINA", "Marina District"),
    ("PAC HEIGHTS", "Pacific Heights"),
    ("POTRERO", "Potrero Hill"),
    ("BERNAL", "Bernal Heights"),
    ("NOPA", "Western Addition"),
    ("J-TOWN", "Japantown"),
    ("RICHMOND", "Richmond District"),
    ("SUNSET", "Sunset District"),
];
