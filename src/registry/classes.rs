//! Known variable classes, keyed by category
//!
//! Hand-maintained. Each class name may appear once across the whole
//! table: the generated `lookup` is a single `match` that denies
//! unreachable patterns, so listing a class under two categories fails
//! to compile.

use super::Category;

macro_rules! variable_classes {
    ($($category:ident => [$($class:literal),* $(,)?]),* $(,)?) => {
        /// Category of a class name, if the class is known
        #[deny(unreachable_patterns)]
        pub(crate) fn lookup(class_name: &str) -> Option<Category> {
            match class_name {
                $($($class)|* => Some(Category::$category),)*
                _ => None,
            }
        }

        /// Class names per category, in declaration order
        pub(crate) const TABLE: &[(Category, &[&str])] = &[
            $((Category::$category, &[$($class),*]),)*
        ];
    };
}

variable_classes! {
    Wf => [
        "MilitaryUseOfMetals",
        "Coppers",
        "Bronzes",
        "Irons",
        "Steels",
        "Javelins",
        "Atlatls",
        "Slings",
        "SelfBows",
        "CompositeBows",
        "Crossbows",
        "TensionSiegeEngines",
        "SlingSiegeEngines",
        "GunpowderSiegeArtilleries",
        "HandheldFirearms",
        "WarClubs",
        "Daggers",
        "Swords",
        "Spears",
        "Polearms",
        "Dogs",
        "Donkeys",
        "Horses",
        "Camels",
        "Elephants",
        "WoodBarkEtcs",
        "LeatherClothes",
        "Shields",
        "Helmets",
        "Breastplates",
        "LimbProtections",
        "ScaledArmors",
        "LaminarArmors",
        "PlateArmors",
        "Chainmails",
        "SmallVesselsCanoesEtcs",
        "MerchantShipsPressedIntoServices",
        "SpecializedMilitaryVessels",
        "SettlementsInADefensivePositions",
        "WoodenPalisades",
        "EarthRamparts",
        "Ditches",
        "Moats",
        "StoneWallsNonMortareds",
        "StoneWallsMortareds",
        "FortifiedCamps",
        "ComplexFortifications",
        "ModernFortifications",
        "LongWalls",
    ],
    Sc => [
        "Ras",
        "PolityTerritories",
        "PolityPopulations",
        "PopulationOfTheLargestSettlements",
        "SettlementHierarchies",
        "AdministrativeLevels",
        "ReligiousLevels",
        "MilitaryLevels",
        "ProfessionalMilitaryOfficers",
        "ProfessionalSoldiers",
        "ProfessionalPriesthoods",
        "FullTimeBureaucrats",
        "ExaminationSystems",
        "MeritPromotions",
        "SpecializedGovernmentBuildings",
        "FormalLegalCodes",
        "Judges",
        "Courts",
        "ProfessionalLawyers",
        "IrrigationSystems",
        "DrinkingWaterSupplySystems",
        "Markets",
        "FoodStorageSites",
        "Roads",
        "Bridges",
        "Canals",
        "Ports",
        "MinesOrQuarries",
        "MnemonicDevices",
        "NonwrittenRecords",
        "WrittenRecords",
        "Scripts",
        "NonPhoneticWritings",
        "PhoneticAlphabeticWritings",
        "ListsTablesAndClassifications",
        "Calendars",
        "SacredTexts",
        "ReligiousLiteratures",
        "PracticalLiteratures",
        "Histories",
        "Philosophies",
        "ScientificLiteratures",
        "Fictions",
        "Articles",
        "Tokens",
        "PreciousMetals",
        "ForeignCoins",
        "IndigenousCoins",
        "PaperCurrencies",
        "Couriers",
        "PostalStations",
        "GeneralPostalServices",
    ],
    General => [
        "PolityResearchAssistants",
        "PolityOriginalNames",
        "PolityAlternativeNames",
        "PolityPeakYears",
        "PolityDurations",
        "PolityDegreeOfCentralizations",
        "PolitySuprapolities",
        "PolityUtmZones",
        "PolityCapitals",
        "PolityLanguages",
        "PolityLinguisticFamilies",
        "PolityReligionFamilies",
        "PolityReligions",
        "PolityRelationshipToPrecedingEntities",
        "PolityPrecedingEntities",
        "PolitySucceedingEntities",
        "PolitySupraculturalEntities",
        "PolityScaleOfSupraculturalInteractions",
        "PolityAlternateReligions",
        "PolityAlternateReligionFamilies",
        "PolityReligiousTraditions",
    ],
    Core => [
        "Polities",
        "Ngas",
        "Capitals",
        "Countries",
        "Citations",
        "References",
        "Sections",
        "Subsections",
        "Variablehierarchies",
        "Religions",
        "Periods",
    ],
    Crisisdb => [
        "ExternalConflicts",
        "InternalConflicts",
        "ExternalConflictSides",
        "AgriculturalPopulations",
        "ArableLands",
        "ArableLandPerFarmers",
        "GrossGrainSharedPerAgriculturalPopulations",
        "NetGrainSharedPerAgriculturalPopulations",
        "MilitaryExpenses",
        "SilverInflows",
        "SilverStocks",
        "TotalPopulations",
        "GdpPerCapitas",
        "DroughtEvents",
        "LocustEvents",
        "SocioeconomicTurmoilEvents",
        "CropFailureEvents",
        "FamineEvents",
        "DiseaseOutbreaks",
        "CrisisConsequences",
        "PowerTransitions",
        "HumanSacrifices",
    ],
    Rt => [
        "OfficialReligions",
        "ElitesReligions",
        "TheoSyncDifRels",
        "SyncRelPraIndBeliefs",
        "ReligiousFragmentations",
        "GovVioFreqRelGrps",
        "GovResPubWors",
        "GovResPubPros",
        "GovResConvs",
        "GovPressConvs",
        "GovResPropOwnForRelGrps",
        "GovObligRelGrpOfcReps",
        "GovResConsRelBuils",
        "GovResRelEdus",
        "GovResCirRelLits",
        "GovDisRelGrpOccFuns",
        "SocVioFreqRelGrps",
        "SocDisRelGrpOccFuns",
        "GovPressConvForAgas",
        "WidespreadReligions",
    ],
}
