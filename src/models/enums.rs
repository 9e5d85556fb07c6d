use serde::{Deserialize, Serialize};

use super::InvalidEnum;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(CancerType {
    Gallbladder => "gallbladder",
    Esophageal => "esophageal",
    Breast => "breast",
    Lung => "lung",
    Colorectal => "colorectal",
    HeadAndNeck => "head_and_neck",
});

impl CancerType {
    /// All supported cancer types, in staging-table order.
    pub const ALL: [CancerType; 6] = [
        CancerType::Gallbladder,
        CancerType::Esophageal,
        CancerType::Breast,
        CancerType::Lung,
        CancerType::Colorectal,
        CancerType::HeadAndNeck,
    ];

    /// Human-readable name for report output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gallbladder => "gallbladder cancer",
            Self::Esophageal => "esophageal cancer",
            Self::Breast => "breast cancer",
            Self::Lung => "lung cancer",
            Self::Colorectal => "colorectal cancer",
            Self::HeadAndNeck => "head and neck cancer",
        }
    }
}

// Deepest tissue layer the tumor is described as reaching.
// Drives T staging for the esophageal and colorectal tables.
str_enum!(TumorDepth {
    Mucosa => "mucosa",
    Submucosa => "submucosa",
    MuscularisPropria => "muscularis_propria",
    Muscularis => "muscularis",
    Subserosa => "subserosa",
    Serosa => "serosa",
    Adventitia => "adventitia",
    AdjacentStructures => "adjacent_structures",
    Unknown => "unknown",
});

str_enum!(TCategory {
    Tx => "Tx",
    T1 => "T1",
    T1b => "T1b",
    T2 => "T2",
    T3 => "T3",
    T4 => "T4",
});

str_enum!(NCategory {
    N0 => "N0",
    N1 => "N1",
    N2 => "N2",
    N3 => "N3",
});

str_enum!(MCategory {
    M0 => "M0",
    M1 => "M1",
});

// AJCC-style stage grouping as emitted by the per-cancer tables.
// IiToIii is the head & neck table's genuine "II-III" range.
str_enum!(StageGroup {
    I => "I",
    II => "II",
    IiToIii => "II-III",
    III => "III",
    IiiA => "IIIA",
    IiiB => "IIIB",
    IV => "IV",
    IvA => "IVA",
    IvB => "IVB",
    IvC => "IVC",
    Unknown => "Unknown",
    NotAvailable => "Not available",
});
