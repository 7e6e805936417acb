//! Static key map: (variable, season, scenario) → CSV column identifier.
//!
//! Hand-curated against the FullData.csv export. Only the combinations the
//! export actually carries are listed; anything else resolves to `None`.
//! Fire Weather Index entries map to a base prefix, and the extractor
//! appends the `_95` / `_NC` / `_Avg` subtype suffix.

use climrr_protocol::{
    ClimateVariable as V, EmissionPathway, FutureHorizon, Scenario, Season as S,
};

/// One row of the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    pub variable: V,
    pub season: S,
    pub scenario: Scenario,
    pub key: &'static str,
}

impl KeyEntry {
    const fn new(variable: V, season: S, scenario: Scenario, key: &'static str) -> Self {
        Self {
            variable,
            season,
            scenario,
            key,
        }
    }
}

const HIST: Scenario = Scenario::Historical;
const MID45: Scenario = Scenario::future(FutureHorizon::MidCentury, EmissionPathway::Rcp45);
const END45: Scenario = Scenario::future(FutureHorizon::EndCentury, EmissionPathway::Rcp45);
const MID85: Scenario = Scenario::future(FutureHorizon::MidCentury, EmissionPathway::Rcp85);
const END85: Scenario = Scenario::future(FutureHorizon::EndCentury, EmissionPathway::Rcp85);

/// Every addressable column.
pub static KEY_MAP: &[KeyEntry] = &[
    // ===== Simple annuals =====
    KeyEntry::new(V::HeatingDegreeDays, S::Annual, HIST, "hdd_hist"),
    KeyEntry::new(V::HeatingDegreeDays, S::Annual, MID85, "hdd_rcp85_midc"),
    KeyEntry::new(V::CoolingDegreeDays, S::Annual, HIST, "cdd_hist"),
    KeyEntry::new(V::CoolingDegreeDays, S::Annual, MID85, "cdd_rcp85_midc"),
    KeyEntry::new(V::DaysWithoutPrecipitation, S::Annual, HIST, "noprecip_hist"),
    KeyEntry::new(V::DaysWithoutPrecipitation, S::Annual, MID45, "noprecip_rcp45_midc"),
    KeyEntry::new(V::DaysWithoutPrecipitation, S::Annual, END45, "noprecip_rcp45_endc"),
    KeyEntry::new(V::DaysWithoutPrecipitation, S::Annual, MID85, "noprecip_rcp85_midc"),
    KeyEntry::new(V::DaysWithoutPrecipitation, S::Annual, END85, "noprecip_rcp85_endc"),
    KeyEntry::new(V::AnnualPrecipitation, S::Annual, HIST, "precipann_hist"),
    KeyEntry::new(V::AnnualPrecipitation, S::Annual, MID45, "precipann_rcp45_midc"),
    KeyEntry::new(V::AnnualPrecipitation, S::Annual, END45, "precipann_rcp45_endc"),
    KeyEntry::new(V::AnnualPrecipitation, S::Annual, MID85, "precipann_rcp85_midc"),
    KeyEntry::new(V::AnnualPrecipitation, S::Annual, END85, "precipann_rcp85_endc"),
    KeyEntry::new(V::WindSpeed, S::Annual, HIST, "windspeed_hist"),
    KeyEntry::new(V::WindSpeed, S::Annual, MID45, "windspeed_rcp45_midc"),
    KeyEntry::new(V::WindSpeed, S::Annual, END45, "windspeed_rcp45_endc"),
    KeyEntry::new(V::WindSpeed, S::Annual, MID85, "windspeed_rcp85_midc"),
    KeyEntry::new(V::WindSpeed, S::Annual, END85, "windspeed_rcp85_endc"),
    // ===== Temperature max/min: annual =====
    KeyEntry::new(V::AverageMaximumTemperature, S::Annual, HIST, "tempmaxann_hist"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Annual, MID45, "tempmaxann_rcp45_midc"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Annual, END45, "tempmaxann_rcp45_endc"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Annual, MID85, "tempmaxann_rcp85_midc"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Annual, END85, "tempmaxann_rcp85_endc"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Annual, HIST, "tempminann_hist"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Annual, MID45, "tempminann_rcp45_midc"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Annual, END45, "tempminann_rcp45_endc"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Annual, MID85, "tempminann_rcp85_midc"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Annual, END85, "tempminann_rcp85_endc"),
    // ===== Temperature max/min: seasonal =====
    // Column names follow the export verbatim, including its spelling quirks.
    KeyEntry::new(V::AverageMaximumTemperature, S::Winter, HIST, "tempmax_seas_hist_winter"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Winter, MID85, "tempmax_seas_rcp85_midc_winter"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Winter, END85, "tempmax_seas_rcp85_endc_winter"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Winter, HIST, "tempmin_seas_hist_winter"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Winter, MID85, "tempmin_seas_rcp85_midc_winter"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Winter, END85, "tempmin_seas_rcp85_endc_winter"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Spring, HIST, "tempmax_seas_hist_spring"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Spring, MID85, "tempmax_seas_rcp85_mid_spring"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Spring, END85, "tempmax_seas_rcp85_end_spring"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Spring, HIST, "tempmin_seas_hist_spring"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Spring, MID85, "tempmin_seas_rcp85_mid_spring"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Spring, END85, "tempmin_seas_rcp85_end_spring"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Summer, HIST, "tempmax_seas_hist_summer"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Summer, MID85, "tempmax_seas_rcp85_mid_summer"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Summer, END85, "tempmax_seas_rcp85_end_summer"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Summer, HIST, "tempmin_seas_hist_summer"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Summer, MID85, "tempmin_seas_rcp85_mid_summer"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Summer, END85, "tempmin_seas_rcp85_end_summer"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Autumn, HIST, "tempmax_seas_hist_autum"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Autumn, MID85, "tempmax_seas_rcp85_mid_autumn"),
    KeyEntry::new(V::AverageMaximumTemperature, S::Autumn, END85, "tempmax_seas_rcp85_end_autumn"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Autumn, HIST, "tempmin_seas_hist_autum"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Autumn, MID85, "tempmin_seas_rcp85_mid_autumn"),
    KeyEntry::new(V::AverageMinimumTemperature, S::Autumn, END85, "tempmin_seas_rcp85_end_autumn"),
    // ===== Heat index =====
    KeyEntry::new(V::DailyMaxHeatIndex, S::Annual, HIST, "heatindex_HIS_DayMax"),
    KeyEntry::new(V::DailyMaxHeatIndex, S::Annual, MID85, "heatindex_M85_DayMax"),
    KeyEntry::new(V::DailyMaxHeatIndex, S::Annual, END85, "heatindex_E85_DayMax"),
    KeyEntry::new(V::SeasonalMaxHeatIndex, S::Annual, HIST, "heatindex_HIS_SeaMax"),
    KeyEntry::new(V::SeasonalMaxHeatIndex, S::Annual, MID85, "heatindex_M85_SeaMax"),
    KeyEntry::new(V::SeasonalMaxHeatIndex, S::Annual, END85, "heatindex_E85_SeaMax"),
    KeyEntry::new(V::HeatIndexDaysOver95, S::Annual, HIST, "heatindex_HIS_Day95"),
    KeyEntry::new(V::HeatIndexDaysOver95, S::Annual, MID85, "heatindex_M85_Day95"),
    KeyEntry::new(V::HeatIndexDaysOver105, S::Annual, HIST, "heatindex_HIS_Day105"),
    KeyEntry::new(V::HeatIndexDaysOver105, S::Annual, MID85, "heatindex_M85_Day105"),
    // ===== Fire Weather Index (base prefixes) =====
    KeyEntry::new(V::FireWeatherIndex, S::Annual, HIST, "FWIBins_Hist"),
    KeyEntry::new(V::FireWeatherIndex, S::Annual, MID85, "FWIBins_Mid"),
    KeyEntry::new(V::FireWeatherIndex, S::Annual, END85, "FWIBins_End"),
    KeyEntry::new(V::FireWeatherIndex, S::Winter, HIST, "FWIBins_HistWin"),
    KeyEntry::new(V::FireWeatherIndex, S::Winter, MID85, "FWIBins_MidWin"),
    KeyEntry::new(V::FireWeatherIndex, S::Winter, END85, "FWIBins_EndWin"),
    KeyEntry::new(V::FireWeatherIndex, S::Spring, HIST, "FWIBins_HistSpr"),
    KeyEntry::new(V::FireWeatherIndex, S::Spring, MID85, "FWIBins_MidSpr"),
    KeyEntry::new(V::FireWeatherIndex, S::Spring, END85, "FWIBins_EndSpr"),
    KeyEntry::new(V::FireWeatherIndex, S::Summer, HIST, "FWIBins_HistSum"),
    KeyEntry::new(V::FireWeatherIndex, S::Summer, MID85, "FWIBins_MidSum"),
    KeyEntry::new(V::FireWeatherIndex, S::Summer, END85, "FWIBins_EndSum"),
    KeyEntry::new(V::FireWeatherIndex, S::Autumn, HIST, "FWIBins_HistAut"),
    KeyEntry::new(V::FireWeatherIndex, S::Autumn, MID85, "FWIBins_MidAut"),
    KeyEntry::new(V::FireWeatherIndex, S::Autumn, END85, "FWIBins_EndAut"),
];

/// Look up the column for a typed (variable, season, scenario) triple.
pub fn lookup(variable: V, season: S, scenario: Scenario) -> Option<&'static str> {
    KEY_MAP
        .iter()
        .find(|e| e.variable == variable && e.season == season && e.scenario == scenario)
        .map(|e| e.key)
}

/// Pathway assumed when a query implies a projection without naming one.
///
/// RCP4.5, unless the export carries no RCP4.5 column for this variable
/// and season (fire weather, heat index, seasonal temperatures).
pub fn implied_pathway(variable: V, season: S) -> EmissionPathway {
    let has_rcp45 = KEY_MAP.iter().any(|e| {
        e.variable == variable
            && e.season == season
            && matches!(
                e.scenario,
                Scenario::Future {
                    pathway: EmissionPathway::Rcp45,
                    ..
                }
            )
    });
    if has_rcp45 {
        EmissionPathway::Rcp45
    } else {
        EmissionPathway::Rcp85
    }
}

/// Translate display strings (as they appear in the key map) into the
/// column name used in the CSV export.
///
/// Strings are matched exactly; anything that does not name a listed
/// combination yields `None`.
pub fn get_final_data_key(variable: &str, season: &str, scenario: &str) -> Option<&'static str> {
    let variable = variable.parse().ok()?;
    let season = season.parse().ok()?;
    let scenario = scenario.parse().ok()?;
    lookup(variable, season, scenario)
}
