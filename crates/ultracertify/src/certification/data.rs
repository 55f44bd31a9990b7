use super::domain::{
    BuildingSchedule, CertificationTier, CriterionDefinition, CriterionKind, CriterionOption,
    SelectionMode, Standard, StandardDefinition, TierLevel,
};

const CERTIFIED_COLOR: &str = "#22c55e";
const SILVER_COLOR: &str = "#6b7280";
const GOLD_COLOR: &str = "#eab308";
const PLATINUM_COLOR: &str = "#60a5fa";

pub(crate) fn standard_definitions() -> Vec<StandardDefinition> {
    vec![
        StandardDefinition {
            standard: Standard::NestPlus,
            criteria: nest_plus_criteria(),
            tiers: BuildingSchedule::per_type(tiers([40, 50, 65, 75]), tiers([35, 45, 60, 70])),
        },
        StandardDefinition {
            standard: Standard::Nest,
            criteria: nest_criteria(),
            tiers: BuildingSchedule::per_type(tiers([20, 35, 40, 45]), tiers([20, 30, 35, 40])),
        },
    ]
}

fn tiers(thresholds: [u32; 4]) -> Vec<CertificationTier> {
    let [certified, silver, gold, platinum] = thresholds;
    vec![
        CertificationTier {
            level: TierLevel::Certified,
            min_score: certified,
            color: CERTIFIED_COLOR,
        },
        CertificationTier {
            level: TierLevel::Silver,
            min_score: silver,
            color: SILVER_COLOR,
        },
        CertificationTier {
            level: TierLevel::Gold,
            min_score: gold,
            color: GOLD_COLOR,
        },
        CertificationTier {
            level: TierLevel::Platinum,
            min_score: platinum,
            color: PLATINUM_COLOR,
        },
    ]
}

const fn opt(label: &'static str, points: u32) -> CriterionOption {
    CriterionOption { label, points }
}

/// "1 Credit" .. "N Credits" ladders used by several credits.
fn credit_ladder(max: u32) -> Vec<CriterionOption> {
    const LABELS: [&str; 7] = [
        "1 Credit",
        "2 Credits",
        "3 Credits",
        "4 Credits",
        "5 Credits",
        "6 Credits",
        "7 Credits",
    ];
    LABELS
        .iter()
        .zip(1_u32..)
        .take_while(|(_, points)| *points <= max)
        .map(|(label, points)| opt(*label, points))
        .collect()
}

fn mandatory(
    id: &'static str,
    name: &'static str,
    requirements: &'static str,
    documents: &'static str,
) -> CriterionDefinition {
    CriterionDefinition {
        id,
        name,
        kind: CriterionKind::Mandatory,
        requirements: BuildingSchedule::Uniform(requirements),
        documents,
        points: BuildingSchedule::Uniform(0),
        options: None,
        selection_mode: SelectionMode::Single,
    }
}

fn nest_plus_criteria() -> Vec<CriterionDefinition> {
    vec![
        mandatory(
            "np-local-building-regulations",
            "Local Building Regulations",
            "Approved Plan from local municipal authority.",
            "Approved Plans",
        ),
        mandatory(
            "np-waste-segregation",
            "Waste Segregation - Dry & Wet",
            "Provide 2 separate bins to collect dry and wet waste.",
            "Photographs of 2 separate bins.",
        ),
        mandatory(
            "np-rainwater-harvesting-500l",
            "Rainwater Harvesting 500 Liters",
            "System to capture at least 500 litres from site runoff.",
            "Photograph of rainwater harvesting pits.",
        ),
        CriterionDefinition {
            id: "np-passive-architecture-features",
            name: "Passive Architecture Features",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide any two features mentioned below. For each feature two points (max 4 points): 1. Courtyard 2. Vernacular materials 3. Local Vernacular Elements 4. Any other passive cooling/Heating system 5. Skylights",
            ),
            documents: "Concept description and photographs.",
            points: BuildingSchedule::per_type(4, 2),
            options: Some(BuildingSchedule::per_type(
                vec![opt("One Feature", 2), opt("Two Features", 4)],
                vec![opt("One Feature", 1), opt("Two Features", 2)],
            )),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-top-soil-preservation",
            name: "Top soil Preservation",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Preserve top 150-200 mm of soil during excavation.",
            ),
            documents: "Photographs of top soil preservation.",
            points: BuildingSchedule::per_type(1, 0),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-passive-architecture-setbacks",
            name: "Passive Architecture (Setbacks)",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide minimum of 3 ft setback or as per local norms whichever is higher on 2 sides (1 point) More than 2 sides (2 points)",
            ),
            documents: "Photographs of setback areas.",
            points: BuildingSchedule::Uniform(2),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("2 sides", 1),
                opt("More than 2 sides", 2),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-basic-amenities",
            name: "Basic Amenities",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Access to at least five basic amenities within a 1 km walk.",
            ),
            documents: "Google map showing the distance to amenities.",
            points: BuildingSchedule::Uniform(2),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-vegetation-natural-topography",
            name: "Vegetation and Natural Topography",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide the vegetation either on Ground/ built - up structures as follows: 30 sq.ft - 1 Point, 50 sq.ft - 2 Points, 75 sq.ft - 3 Points, 100 sq.ft - 4 Points. Note: 1. For the Terrace Landscaping only permanent structures are considered. 2. Potted Plants are not considered. 3. 125sq.ft and above qualifies for exemplary/Innovation",
            ),
            documents: "Photographs of landscape; area details.",
            points: BuildingSchedule::Uniform(4),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("30 sq.ft", 1),
                opt("50 sq.ft", 2),
                opt("75 sq.ft", 3),
                opt("100 sq.ft", 4),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-vegetables-fruits",
            name: "Vegetables / Fruits - 2 varieties",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Grow a minimum of two vegetable/fruit species.",
            ),
            documents: "Photographs of the plants.",
            points: BuildingSchedule::per_type(0, 1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-medicinal-plants",
            name: "Medicinal Plants- 2 varieties",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform("Grow a minimum of two medicinal species."),
            documents: "Photographs of the plants.",
            points: BuildingSchedule::per_type(0, 1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-indoor-plants",
            name: "Indoor Plants - 5 Plants (Minimum)",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform("Grow a minimum of 5 indoor plants."),
            documents: "Photographs and a list of the plants.",
            points: BuildingSchedule::Uniform(1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-vehicle-shading",
            name: "Vehicle shading",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide shade for vehicles via tree shade or covered parking.",
            ),
            documents: "Photographs of the vehicle shading.",
            points: BuildingSchedule::per_type(0, 1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-bicycle-commuting",
            name: "Bicycle for commuting",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Use at least one bicycle and provide dedicated parking.",
            ),
            documents: "Photographs of bicycle in its parking space.",
            points: BuildingSchedule::per_type(0, 1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-e-vehicle",
            name: "E-Vehicle/Renewable fuel vehicle",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Use at least one E-vehicle, CNG, LPG, or other renewable fuel vehicle.",
            ),
            documents: "Photographs and registration certificate.",
            points: BuildingSchedule::Uniform(1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-best-practices-construction",
            name: "Best Practices during Construction",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Implement measures during construction (Barrication, Dust Suppression, etc.). Any 2 measures - 1 Point. Any 4 measures - 2 Points.",
            ),
            documents: "Photographs of each measure.",
            points: BuildingSchedule::per_type(2, 0),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Any 2 measures", 1),
                opt("Any 4 measures", 2),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-white-finish",
            name: "White finish",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Use materials like china mosaic or light-colored paint for the roof.",
            ),
            documents: "Photograph of the roof area finish.",
            points: BuildingSchedule::Uniform(2),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-enhanced-rainwater-harvesting",
            name: "Enhanced Rainwater Harvesting and Reuse",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Rainwater harvesting system to capture at least 750 Litres (2 points) & Reuse provision for harvested water (2 points). Note: For an existing well or borewell the project shall be awarded 4 points.",
            ),
            documents: "Photograph of pits and reuse application.",
            points: BuildingSchedule::Uniform(4),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Harvesting (750L)", 2),
                opt("Reuse provision", 2),
                opt("Existing Well / Borewell", 4),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-water-saving-fixtures",
            name: "Water Saving Fixtures",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide efficient water fixtures: Dual flush cistern (3 pts), Tap with aerators (2 pts), Showers with aerators (2 pts), Health faucet with aerators (1 pt)",
            ),
            documents: "Photographs of fixtures.",
            points: BuildingSchedule::Uniform(8),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Dual flush cistern", 3),
                opt("Tap with aerators", 2),
                opt("Showers with aerators", 2),
                opt("Health faucet with aerators", 1),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-water-metering-controllers",
            name: "Water Metering, Water Level Controllers",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide Water metering (1 Point) and Automatic water level controllers for Overhead tank (1 Point)",
            ),
            documents: "Photographs of the meter and controllers.",
            points: BuildingSchedule::Uniform(2),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Water Metering", 1),
                opt("Automatic water level controllers", 1),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-efficient-envelope",
            name: "Efficient Envelope",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Use efficient Wall (3 pts) and Roof (2 pts) assemblies.",
            ),
            documents: "Construction photos and roof details.",
            points: BuildingSchedule::per_type(5, 0),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Wall Assembly", 3),
                opt("Roof Assembly", 2),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-energy-efficient-appliances",
            name: "Energy Efficient Appliances",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Procure 100% BEE / Energy Certified appliances.",
            ),
            documents: "Photographs of appliances with star ratings.",
            points: BuildingSchedule::per_type(4, 10),
            options: Some(BuildingSchedule::per_type(
                vec![
                    opt("LED lights", 1),
                    opt("3 Star Energy efficient fans", 2),
                    opt("Inverter based Refrigerator", 1),
                ],
                vec![
                    opt("LED lights", 2),
                    opt("3 Star Energy efficient fans", 3),
                    opt("Inverter based Refrigerator", 1),
                    opt("3 Star Inverter Air conditioner", 1),
                    opt("5 Star Inverter Air conditioner", 2),
                    opt("Any other energy efficient appliances", 1),
                ],
            )),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-sun-shades",
            name: "Sun shades/ Chajjas",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "All exterior openings must have sun shades of a minimum of 400 mm.",
            ),
            documents: "Photographs of chajjas/sunshades.",
            points: BuildingSchedule::Uniform(1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-alternate-hot-water",
            name: "Alternate Hot Water system",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide Solar/LPG/CNG hot water system for 100% of occupants.",
            ),
            documents: "Photographs and technical cutsheets.",
            points: BuildingSchedule::Uniform(1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-renewable-energy",
            name: "Renewable Energy",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Install an on-site renewable solar energy system. 0.5 kW (1 pt), 1.5 kW (3 pts), 2.5 kW (5 pts).",
            ),
            documents: "Purchase invoice and photos of panels.",
            points: BuildingSchedule::Uniform(5),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("0.5 kW", 1),
                opt("1.5 kW", 3),
                opt("2.5 kW", 5),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-ev-charging",
            name: "Electric vehicle charging",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide an electrical charging socket (min 16A) near parking.",
            ),
            documents: "Photographs of the charging socket.",
            points: BuildingSchedule::Uniform(1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-kitchen-waste-composting",
            name: "Kitchen waste composting",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide a khamba/compost pit and utilize the manure.",
            ),
            documents: "Photographs of the compost pit.",
            points: BuildingSchedule::Uniform(1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-green-procurement",
            name: "Green Procurement - Ecolabelled",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::per_type(
                "Use Green certified materials (1 pt each, max 7).",
                "Use Green certified materials (1 pt each, max 2).",
            ),
            documents: "Photos, cutsheets, and invoices.",
            points: BuildingSchedule::per_type(7, 2),
            options: Some(BuildingSchedule::per_type(credit_ladder(7), credit_ladder(2))),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-local-materials",
            name: "Local Materials",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Procure materials from manufacturers within 500 KM range. 30% of total cost (1 pt), 40% (2 pts), 50% (3 pts).",
            ),
            documents: "Costing sheet and Google map.",
            points: BuildingSchedule::per_type(3, 0),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("30% of total cost", 1),
                opt("40% of total cost", 2),
                opt("50% of total cost", 3),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-daylighting",
            name: "Daylighting",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Ensure 110 Lux daylight in 25% (1 pt) up to 95% (4 pts) of occupied areas.",
            ),
            documents: "Floor plans, photos, and calculation template.",
            points: BuildingSchedule::Uniform(4),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("25% of areas", 1),
                opt("50% of areas", 2),
                opt("75% of areas", 3),
                opt("95% of areas", 4),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-ventilation",
            name: "Ventilation",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide openable windows that are 5% (1 pt) up to 10% (3 pts) of the carpet area.",
            ),
            documents: "Floor plans, photos, and calculation template.",
            points: BuildingSchedule::Uniform(3),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("5% of carpet area", 1),
                opt("7.5% of carpet area", 2),
                opt("10% of carpet area", 3),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-exhaust-system",
            name: "Exhaust System",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide exhaust systems in kitchen and bathrooms: Opening (1 pt) and Fan (1 pt).",
            ),
            documents: "Photographs of openings and fans.",
            points: BuildingSchedule::Uniform(2),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Opening provision", 1),
                opt("Exhaust Fan", 1),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-cross-ventilation",
            name: "Cross Ventilation",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Ensure two openings in each space. Living room/Kitchen (1 point), Each Room (1 Point, Max 2)",
            ),
            documents: "Floor plans and photographs of openings.",
            points: BuildingSchedule::Uniform(3),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Living room/Kitchen", 1),
                opt("Room 1", 1),
                opt("Room 2", 1),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-exterior-views",
            name: "Exterior Views",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Ensure a direct line of sight to the outside from each space. Living room/Kitchen (1 point), Each Room (1 Point, Max 2)",
            ),
            documents: "Photographs of exterior views.",
            points: BuildingSchedule::Uniform(3),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Living room/Kitchen", 1),
                opt("Room 1", 1),
                opt("Room 2", 1),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-house-automation",
            name: "House Automation",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Install automation devices (1 pt each, max 3 for new, max 2 for existing).",
            ),
            documents: "Technical cutsheets and photographs.",
            points: BuildingSchedule::per_type(3, 2),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Lighting Controls", 1),
                opt("CCTV", 1),
                opt("Solar meter", 1),
                opt("Sensors", 1),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "np-green-housekeeping-chemicals",
            name: "Green House Keeping Chemicals",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Procure green certified/organic housekeeping chemicals.",
            ),
            documents: "Photographs and purchase invoices.",
            points: BuildingSchedule::per_type(0, 1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-innovation-exemplary",
            name: "Innovation & Exemplary",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Achieve innovative and exemplary performance.",
            ),
            documents: "Supporting proof documents.",
            points: BuildingSchedule::per_type(5, 3),
            options: Some(BuildingSchedule::per_type(credit_ladder(5), credit_ladder(3))),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "np-igbc-ap",
            name: "IGBC Accredited Professional / Associate",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Involve an IGBC Accredited Professional/AP Associate.",
            ),
            documents: "IGBC AP Certificate.",
            points: BuildingSchedule::Uniform(1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
    ]
}

fn nest_criteria() -> Vec<CriterionDefinition> {
    vec![
        mandatory(
            "n-local-building-regulations",
            "Local Building Regulations",
            "Approved Plan from local municipal authority.",
            "Approved Plans.",
        ),
        mandatory(
            "n-waste-segregation",
            "Waste Segregation - Dry & Wet",
            "Provide 2 separate bins to collect dry and wet waste.",
            "Photographs of 2 separate bins.",
        ),
        CriterionDefinition {
            id: "n-vegetation-or-indoor-plants",
            name: "Vegetation or Indoor Plants",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Vegetation 30 sq. ft, 50 sq. ft or Indoor Plant - 5 no., 10 no.",
            ),
            documents: "Photographs of vegetation/plants.",
            points: BuildingSchedule::Uniform(4),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Vegetation 30 sq.ft OR 5 Indoor Plants", 2),
                opt("Vegetation 50 sq.ft OR 10 Indoor Plants", 4),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-white-finish-roof",
            name: "White finish/Vegetation over Roof",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Use white finish or have vegetation over the roof.",
            ),
            documents: "Photograph of the roof area finish.",
            points: BuildingSchedule::Uniform(2),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-rainwater-harvesting-reuse",
            name: "Rainwater Harvesting and Reuse",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "System to capture rainwater and provision for reuse.",
            ),
            documents: "Photograph of pits and reuse application.",
            points: BuildingSchedule::Uniform(2),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-water-saving-fixtures",
            name: "Water Saving Fixtures",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform("Provide efficient water fixtures."),
            documents: "Photographs of fixtures.",
            points: BuildingSchedule::Uniform(5),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Dual flush cistern (2 pts)", 2),
                opt("Tap with aerators (1 pt)", 1),
                opt("Showers with aerators (1 pt)", 1),
                opt("Health faucet with aerators (1 pt)", 1),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "n-water-metering-controllers",
            name: "Water Metering, Water Level Controllers",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide Water metering and Automatic water level controllers.",
            ),
            documents: "Photographs of the meter and controllers.",
            points: BuildingSchedule::Uniform(2),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Water Metering", 1),
                opt("Water Level Controllers", 1),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "n-efficient-envelope",
            name: "Efficient Envelope",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform("Use efficient Wall and Roof assemblies."),
            documents: "Construction photos and roof details.",
            points: BuildingSchedule::per_type(5, 0),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("Efficient Wall Assembly", 3),
                opt("Efficient Roof Assembly", 2),
            ])),
            selection_mode: SelectionMode::Multiple,
        },
        CriterionDefinition {
            id: "n-energy-efficient-appliances",
            name: "Energy Efficient Appliances",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform("Procure BEE / Energy Certified appliances."),
            documents: "Photographs of appliances with star ratings.",
            points: BuildingSchedule::per_type(5, 7),
            options: Some(BuildingSchedule::per_type(
                zero_then(credit_ladder(5)),
                zero_then(credit_ladder(7)),
            )),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-sunshades-chajjas",
            name: "Sunshades/ Chajjas",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform("All exterior openings must have sun shades."),
            documents: "Photographs of chajjas/sunshades.",
            points: BuildingSchedule::per_type(0, 2),
            options: None,
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-renewable-energy",
            name: "Renewable Energy",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Install on-site renewable energy. 0.5 kW (1 pt), 1 kW (2 pts).",
            ),
            documents: "Purchase invoice and photos of panels.",
            points: BuildingSchedule::Uniform(2),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("0.5 kW", 1),
                opt("1 kW", 2),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-green-procurement",
            name: "Green Procurement - Ecolabelled",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform("Use Green certified materials."),
            documents: "Photos, cutsheets, and invoices.",
            points: BuildingSchedule::per_type(5, 2),
            options: Some(BuildingSchedule::per_type(credit_ladder(5), credit_ladder(2))),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-daylighting",
            name: "Daylighting",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Ensure daylight in occupied areas. 25% (2 pts), 50% (4 pts), 75% (6 pts).",
            ),
            documents: "Floor plans, photos, and calculation template.",
            points: BuildingSchedule::Uniform(6),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("25% of areas", 2),
                opt("50% of areas", 4),
                opt("75% of areas", 6),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-ventilation",
            name: "Ventilation",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide openable windows. 5% (2 pts), 7.5% (4 pts), 10% (6 pts) of carpet area.",
            ),
            documents: "Floor plans, photos, and calculation template.",
            points: BuildingSchedule::Uniform(6),
            options: Some(BuildingSchedule::Uniform(vec![
                opt("5% of carpet area", 2),
                opt("7.5% of carpet area", 4),
                opt("10% of carpet area", 6),
            ])),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-exhaust-system",
            name: "Exhaust System",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Provide exhaust systems in kitchen and bathrooms.",
            ),
            documents: "Photographs of openings and fans.",
            points: BuildingSchedule::Uniform(2),
            options: Some(BuildingSchedule::Uniform(credit_ladder(2))),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-innovation-exemplary",
            name: "Innovation & Exemplary",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Achieve innovative and exemplary performance.",
            ),
            documents: "Supporting proof documents.",
            points: BuildingSchedule::per_type(3, 2),
            options: Some(BuildingSchedule::per_type(credit_ladder(3), credit_ladder(2))),
            selection_mode: SelectionMode::Single,
        },
        CriterionDefinition {
            id: "n-igbc-ap",
            name: "IGBC Accredited Professional / Associate",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::Uniform(
                "Involve an IGBC Accredited Professional/AP Associate.",
            ),
            documents: "IGBC AP Certificate.",
            points: BuildingSchedule::Uniform(1),
            options: None,
            selection_mode: SelectionMode::Single,
        },
    ]
}

fn zero_then(ladder: Vec<CriterionOption>) -> Vec<CriterionOption> {
    let mut options = Vec::with_capacity(ladder.len() + 1);
    options.push(opt("0 Credits", 0));
    options.extend(ladder);
    options
}
