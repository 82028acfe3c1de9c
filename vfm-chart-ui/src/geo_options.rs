//! Serializable configuration for the Google GeoChart renderer.
//!
//! Both maps share the same region setup (US, state-level regions) and the
//! same dataless color; they differ in gradient colors, axis bounds and
//! legend placement. Field names serialize to the camelCase keys the chart
//! API expects.

use serde::Serialize;
use vfm_data::chart_table::ColorRange;

/// Fallback fill for states with no data row.
pub const DATALESS_REGION_COLOR: &str = "#e3e3e3";

/// Light-to-dark purple gradient for the demographic map.
pub const DEMOGRAPHIC_COLORS: [&str; 2] = ["#ddd1e8", "#a65aed"];

/// Light-to-dark blue gradient for the fairness map.
pub const FAIRNESS_COLORS: [&str; 2] = ["#dceff5", "#3480eb"];

/// Fixed axis for demographic percentages. All demographic columns are
/// percentages in roughly this band, so one shared axis keeps toggling
/// between them comparable.
pub const DEMOGRAPHIC_RANGE: ColorRange = ColorRange::new(20.0, 80.0);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAxis {
    pub min_value: f64,
    pub max_value: f64,
    pub colors: [&'static str; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub alignment: &'static str,
}

/// Full options object passed to `renderGeoChart` as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoChartOptions {
    pub region: &'static str,
    pub display_mode: &'static str,
    pub resolution: &'static str,
    pub color_axis: ColorAxis,
    pub dataless_region_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl GeoChartOptions {
    fn us_states(colors: [&'static str; 2], range: ColorRange, legend: Option<Legend>) -> Self {
        Self {
            region: "US",
            display_mode: "regions",
            resolution: "provinces",
            color_axis: ColorAxis {
                min_value: range.min,
                max_value: range.max,
                colors,
            },
            dataless_region_color: DATALESS_REGION_COLOR,
            legend,
        }
    }

    /// Options for the demographic (top) map: fixed percentage axis,
    /// legend in the top-right corner.
    pub fn demographic() -> Self {
        Self::us_states(
            DEMOGRAPHIC_COLORS,
            DEMOGRAPHIC_RANGE,
            Some(Legend {
                position: "top",
                alignment: "end",
            }),
        )
    }

    /// Options for the fairness (bottom) map: axis bounds come from the
    /// active category's fixed range, no legend.
    pub fn fairness(range: ColorRange) -> Self {
        Self::us_states(FAIRNESS_COLORS, range, None)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demographic_options_serialize_with_camel_case_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&GeoChartOptions::demographic().to_json()).unwrap();
        assert_eq!(json["region"], "US");
        assert_eq!(json["displayMode"], "regions");
        assert_eq!(json["resolution"], "provinces");
        assert_eq!(json["colorAxis"]["minValue"], 20.0);
        assert_eq!(json["colorAxis"]["maxValue"], 80.0);
        assert_eq!(json["datalessRegionColor"], "#e3e3e3");
        assert_eq!(json["legend"]["position"], "top");
        assert_eq!(json["legend"]["alignment"], "end");
    }

    #[test]
    fn fairness_options_take_axis_from_the_given_range() {
        let opts = GeoChartOptions::fairness(ColorRange::new(-1.0, 6.0));
        let json: serde_json::Value = serde_json::from_str(&opts.to_json()).unwrap();
        assert_eq!(json["colorAxis"]["minValue"], -1.0);
        assert_eq!(json["colorAxis"]["maxValue"], 6.0);
        assert_eq!(json["colorAxis"]["colors"][1], "#3480eb");
        // No legend on the fairness map
        assert!(json.get("legend").is_none());
    }
}
