// crates/sosdata-core/src/schema.rs
//
// Static lookup tables that encode years of inconsistent data entry in the
// SOS spreadsheets. These are curated by hand against the yearly exports;
// every entry is an observed historical variant.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Values that mean "not reported" in the raw sheets. Mapped to null at read
/// time, before any transform runs.
pub const NULL_SENTINELS: &[&str] = &["UNK", "Unk", "-"];

/// Column label written by the site normalizer and required in every sheet.
pub const SITE_COLUMN: &str = "Cleanup Site";
/// Event date column, required in every sheet.
pub const DATE_COLUMN: &str = "Date";

/// Exact historical column label -> canonical label. Many-to-one only.
pub const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("Date of Cleanup Event/Fecha", "Date"),
    ("Cleanup Date", "Date"),
    ("Cleanup Site/Sitio de limpieza", "Cleanup Site"),
    (
        "Estimated size of location cleaned (sq miles)",
        "Cleaned size (sq miles)",
    ),
    ("Cleanup Area", "Cleaned size (sq miles)"),
    ("Total Cleanup Duration (hrs)", "Duration (hrs)"),
    ("# of Volunteers", "Adult Volunteers"),
    ("Pounds of Trash Collected", "Pounds of Trash"),
    ("Pounds of Recycle Collected", "Pounds of Recycling"),
    ("County/City where the event was held?", "County/City"),
    ("County", "County/City"),
    ("Appliances (refrigerators, washers, etc.)", "Appliances"),
    ("Beverages Sachets/Pouches", "Beverage Pouches"),
    ("Beverages Sachets", "Beverage Pouches"),
    ("Toys and Beach Accessories", "Beach Toys/Accessories"),
    ("Beach chairs, toys umbrellas", "Beach Toys/Accessories"),
    ("Balloons or ribbon", "Balloons"),
    ("Bandaids or bandages", "Bandaids"),
    ("Clothes, cloth", "Clothes/Cloth"),
    ("Clothes or towels", "Clothes/Cloth"),
    ("Footwear (shoes/slippers)", "Footwear"),
    ("Shoes", "Footwear"),
    ("Glass Pieces and Chunks", "Glass Pieces"),
    // 2022 has bare "Pieces and Chunks"; assumed to be glass.
    ("Pieces and Chunks", "Glass Pieces"),
    ("Disposable lighters", "Lighters"),
    ("Disposable cigarette lighters", "Lighters"),
    ("Paper Newpapers/ Magazines", "Newspapers/Magazines"),
    ("Other Plastic/ Foam Packaging", "Other Plastic/Foam Packaging"),
    (
        "Plastic food wrappers (ie chips or candy)",
        "Plastic food wrappers",
    ),
    ("Polystyrene Foodware (foam)", "Polystyrene Foodware"),
    ("Personal Protective Equipment (masks, gloves)", "PPE"),
    ("Personal Protective Equipment", "PPE"),
    ("Lids (Plastic)", "Plastic Lids"),
    ("Rope (1 yard/meter = 1 piece)", "Rope (yard pieces)"),
    ("Syringes or needles", "Syringes/Needles"),
    ("Utensils (plastic)", "Utensils"),
    ("Forks, Knives, Spoons", "Utensils"),
    ("Wood pallets, pieces and processed wood", "Wood pieces"),
];

/// Canonical item category -> historical source columns whose counts are
/// summed into it. Groupings follow NOAA's ocean debris report where the SOS
/// bundling allows; e.g. NOAA splits fishing line / nets / gear while SOS
/// mixes them, so everything lands in "Fishing Gear".
pub const MERGE_GROUPS: &[(&str, &[&str])] = &[
    (
        "Bags",
        &[
            "Shopping bags",
            "Other Plastic Bags",
            "Paper Bags",
            "Plastic Bags (grocery, shopping)",
            "Plastic Bags (trash) ",
            "Plastic Bags (ziplock, snack)",
            "Grocery Bags (Plastic)",
        ],
    ),
    (
        // Not separated by material.
        "Bottle Caps",
        &[
            "Bottle Caps",
            "Bottle Caps and Rings",
            "Metal Bottle Caps",
            "Plastic Bottle Caps and Rings",
            "Metal bottle caps or can pulls",
            "Bottle Caps (Plastic)",
            "Bottle Caps (Metal)",
        ],
    ),
    ("Cardboard", &["Cardboard", "Paper Cardboard"]),
    (
        "Cans",
        &[
            "Beverage Cans",
            "Beer Cans",
            "Soda Cans",
            "Metal beverage cans",
        ],
    ),
    (
        "E-Waste",
        &["E-waste", "Vape items/ E-smoking devices", "E-cigarettes"],
    ),
    (
        "Fishing Gear",
        &[
            "Fishing gear (lures, nets, etc.)",
            "Fishing Lines, Nets, Traps, Ropes, Pots",
            "Plastic fishing line, nets, lures, floats",
            "Fishing Net & Pieces",
            "Fishing Line (1 yard/meter = 1 piece)",
            "Fishing Buoys, Pots & Traps",
            "Metal fishing hooks or lures",
            "Crab pots",
        ],
    ),
    (
        "Food Containers",
        &[
            "Food containers, cups, plates, bowls",
            "Food containers (plastic)",
            "Food containers (foam)",
            "Food Containers/ Cups/ Plates/ Bowls",
            "Paper food containers, cups, plates",
            "Paper food containers, cups, plates, bowls",
            "Paper/ Cardboard Food containers, cups, plates, bowls",
            "Plastic Polystyrene cups/plates/bowls (foam)",
            "Plastic cups, lids/plates/utensils",
            "Polystyrene Foodware",
            "Styrofoam food containers",
            "Styrofoam Cups, Plates and Bowls ",
            "Cups, Plates (Paper)",
            "Cups, Plates (Plastic)",
            "Cups, Plates (Foam)",
            "Cups & Plates (Paper)",
            "Cups & Plates (Plastic)",
            "Cups & Plates (Foam)",
            "Plastic cups, lids, plates, utensils",
        ],
    ),
    (
        "Personal Hygiene",
        &[
            "Personal Hygiene",
            "Condoms",
            "Diapers",
            "Tampons/Tampon Applicators",
            "Tampons/Applicators",
            "Cotton Bud Sticks (swabs)",
            "Feminine Products",
            "Feminine Hygeine Products",
        ],
    ),
    (
        "Plastic Packaging",
        &[
            "Foam packaging",
            "Other Plastic/Foam Packaging",
            // Assuming this one is plastic.
            "Other Packaging (Clean Swell)",
            "Styrofoam peanuts or packing materials",
        ],
    ),
    (
        "Plastic Bottles",
        &[
            "Plastic Bottles",
            "Other Plastic Bottles (oil, bleach, etc.)",
            "Plastic motor oil bottles",
            "Other Plastic Bottles",
            "Beverage Bottles (Plastic)",
        ],
    ),
    (
        "Plastic Pieces",
        &[
            "Plastic Pieces",
            "Polystyrene Pieces",
            "Foam Dock Pieces",
            "Styrofoam pieces",
            "Foam pieces",
        ],
    ),
    (
        "Plastic To-Go Items",
        &[
            "Plastic To-Go Items",
            "Plastic Polystyrene food \"to-go\" containers",
            "Take Out/Away Containers (Foam)",
            "Take Out/Away Containers (Plastic)",
            "Take Out/Away (Plastic",
            "Take Out/Away (Foam)",
        ],
    ),
    (
        "Smoking/Tobacco",
        &[
            "Smoking, tobacco (not e-waste or butts)",
            "Tobacco Packaging/Wrap",
            "Smoking, tobacco, vape items (not butts)",
            "Cigarette box or wrappers",
            "Other tobacco (packaging, lighter, etc.)",
        ],
    ),
    (
        "Straws/Stirrers",
        &["Straws and stirrers", "Plastic straws or stirrers"],
    ),
    (
        "Other",
        &[
            "Other, small",
            "Other, large",
            "Other Plastics Waste",
            "Other waste (metal, paper, etc.)",
            "Other Trash (Clean Swell)",
            "Other Sum",
        ],
    ),
];

/// Ordered substring rules: any site value containing the key substring is
/// replaced by the canonical name. Applied top to bottom, before the exact
/// alias table.
pub const SITE_SUBSTRING_RULES: &[(&str, &str)] = &[
    ("Bonny Doon Beach", "Bonny Doon"),
    ("Carmel Meadows", "Carmel Meadows"),
    ("Corcoran Lagoon", "Corcoran Lagoon"),
    ("Cowell/Main Beach", "Cowell"),
    ("Del Monte Beach", "Del Monte"),
    ("Elkhorn Slough", "Elkhorn Slough"),
    ("Lighthouse Field State Beach", "Lighthouse"),
    ("Marina State Beach", "Marina State"),
    ("Monterey State Beach", "Monterey State"),
    ("New Brighton State Beach", "New Brighton"),
    ("Panther State Beach", "Panther"),
    ("Palm State Beach", "Palm"),
    ("SLR @ The Tannery Arts Center", "Tannery"),
    ("Twin Lakes State Beach", "Twin Lakes"),
];

/// Compiled list of exact site name variations, applied after the substring
/// pass.
pub static SITE_EXACT_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Three-Mile State Beach", "3-Mile State Beach"),
        ("4 Mile Beach", "4-Mile State Beach"),
        ("Four Mile Beach", "4-Mile State Beach"),
        (
            "Beer Can Beach (also known as Dolphin/Sumner Beach)",
            "Beer Can Beach",
        ),
        ("Black's Beach", "Blacks Beach"),
        ("Capitola City Beach", "Capitola Beach"),
        (
            "20th Ave Beach & Corcoran Lagoon",
            "Corcoran Lagoon @ 20th Ave",
        ),
        ("Coewll and Main Beach", "Cowell/Main Beach"),
        ("Davenport Main Beach", "Davenport Landing Beach"),
        (
            "Elkhorn Slough @ Moss Landing (Monterey Bay Kayaks)",
            "Elkhorn Slough",
        ),
        ("Ford Ord Dunes State Beach", "Fort Ord Dunes State Beach"),
        ("Ft. Ord Dunes State Park", "Fort Ord Dunes State Beach"),
        ("Hidden Beach Park", "Hidden Beach"),
        ("Marina State Beach at Reservation Rd", "Marina State Beach"),
        ("Mitchell's Cove Beach", "Mitchell's Cove"),
        ("Natural Bridges", "Natural Bridges State Beach"),
        (
            "North Del Monte/Tide Avenue/Casa Verde Beach",
            "North Del Monte Tide Ave",
        ),
        (
            "North Ano Nuevo & Cascade Creek",
            "North Ano Nuevo/Cascade Creek",
        ),
        (
            "North Ano Nuevo/ Cascade Creek",
            "North Ano Nuevo/Cascade Creek",
        ),
        ("Rio Del Mar", "Rio Del Mar State Beach"),
        (
            "San Lorenzo River at Felker St. (HWY 1 overpass) to Soquel Ave",
            "SLR @ Felker to Soquel",
        ),
        ("SLR @ Felton Covered Bridge", "SLR @ Felton"),
        (
            "SLR @ Felton Covered Bridge (DT Felton, New Leaf, Cremer House, to Felton Covered Bridge Park)",
            "SLR @ Felton",
        ),
        ("SLR at Laurel St. Bridge", "SLR @ Laurel St"),
        (
            "San Lorenzo R. @ Laurel St to Riverside Ave",
            "SLR @ Laurel St to Riverside Ave",
        ),
        (
            "San Lorenzo R. @ Riverside Ave to Main Beach",
            "SLR @ Riverside Ave to Main Beach",
        ),
        ("SLR at Riverside Ave.", "SLR @ Riverside Ave."),
        ("SLR at Soquel St. Bridge", "SLR @ Soquel St. Bridge"),
        (
            "San Lorenzo River (Soquel bridge to Riverside bridge)",
            "SLR @ Soquel St. to Riverside",
        ),
        (
            "SLR @ Laurel Street Bridge to Riverside Ave",
            "SLR @ Soquel St. to Riverside",
        ),
        (
            "SLR Cleanup @ Soquel Ave to Laurel St.",
            "SLR @ Soquel Ave to Laurel St.",
        ),
        (
            "San Lorenzo R. @ Soquel Ave to Laurel St",
            "SLR @ Soquel Ave to Laurel St.",
        ),
        (
            "SLR: Soquel to Laurel/Broadway",
            "SLR @ Soquel Ave to Laurel St.",
        ),
        (
            "San Lorenzo R. @ Water St to Soquel Ave",
            "SLR @ Water St to Soquel Ave",
        ),
        ("SLR @ Water St to Soquel", "SLR @ Water St to Soquel Ave"),
        (
            "SLR: Water St. Bridge to Soquel",
            "SLR @ Water St to Soquel Ave",
        ),
        (
            "Salinas River State Beach at Molera Rd.",
            "Salinas River State Beach",
        ),
        (
            "Salinas River National Wildlife Reuge",
            "Salinas River National Wildlife Refuge",
        ),
        ("Sand City Beach at West Bay St.", "Sand City Beach"),
        ("Shark Fin Cove", "Shark Fin Cove State Beach"),
        ("Seacliff", "Seacliff State Beach"),
        ("Sunny Cove", "Sunny Cove Beach"),
        ("Sunset Beach", "Sunset State Beach"),
    ])
});
