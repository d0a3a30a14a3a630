use strum_macros::{Display, EnumCount, EnumIter, EnumMessage, IntoStaticStr};

/// The five pollutants measured by the Jogja pollutant standards index,
/// in canonical column order.
///
/// The iteration order of this enum *is* the feature-row layout: every
/// feature vector handed to a classifier, and every feature column list
/// inside a model artifact, follows it. Changing the order here is a
/// breaking change to the artifact format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumMessage, IntoStaticStr,
)]
pub enum Pollutant {
    #[strum(
        serialize = "PM10",
        message = "PM10 (coarse particulate matter)",
        detailed_message = "Fine road dust and smoke from vehicle exhaust."
    )]
    Pm10,

    #[strum(
        serialize = "SO2",
        message = "SO2 (sulfur dioxide)",
        detailed_message = "Exhaust gas from industry and diesel vehicles."
    )]
    So2,

    #[strum(
        serialize = "CO",
        message = "CO (carbon monoxide)",
        detailed_message = "Toxic gas from incomplete combustion, mostly tailpipes."
    )]
    Co,

    #[strum(
        serialize = "O3",
        message = "O3 (ground-level ozone)",
        detailed_message = "Formed when sunlight reacts with polluted air."
    )]
    O3,

    #[strum(
        serialize = "NO2",
        message = "NO2 (nitrogen dioxide)",
        detailed_message = "Released by burning fossil fuels."
    )]
    No2,
}

impl Pollutant {
    /// Canonical column name used in feature schemas and artifact files.
    #[inline]
    pub fn column_name(self) -> &'static str {
        self.into()
    }
}
