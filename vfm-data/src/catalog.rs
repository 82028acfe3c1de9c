//! Static catalog of selectable columns.
//!
//! Every toggle on the page maps a display title to an exact source column
//! header (units embedded, e.g. `"(out of 6)"`). Fairness categories also
//! carry the color-axis range fixed by the category's definition. Grouping
//! mirrors the button rows on the page.

use crate::chart_table::ColorRange;

/// A demographic toggle: display title + source column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemographicCategory {
    pub title: &'static str,
    pub column: &'static str,
}

/// A fairness toggle: display title + source column + fixed gradient range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FairnessCategory {
    pub title: &'static str,
    pub column: &'static str,
    pub range: ColorRange,
}

pub const VOTER_REGISTRATION: DemographicCategory = DemographicCategory {
    title: "Voter Registration",
    column: "Percent of Population that Registered to Vote",
};
pub const VOTER_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Voter Turnout",
    column: "Percentage of Population that Voted",
};
pub const FEMALE_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Female Turnout",
    column: "Percent of Females that Voted",
};
pub const MALE_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Male Turnout",
    column: "Percent of Males that Voted",
};
pub const WHITE_TURNOUT: DemographicCategory = DemographicCategory {
    title: "White Turnout",
    column: "Percent of Whites that Voted",
};
pub const AFRICAN_AMERICAN_TURNOUT: DemographicCategory = DemographicCategory {
    title: "African American Turnout",
    column: "Percent of African Americans that Voted",
};
pub const LATINO_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Latino Turnout",
    column: "Percent of Latinos that Voted",
};
pub const ASIAN_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Asian Turnout",
    column: "Percent of Asians that Voted",
};
pub const AGES_18_24_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Ages 18-24 Turnout",
    column: "Percent of Population Aged 18-24 that Voted",
};
pub const AGES_25_34_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Ages 25-34 Turnout",
    column: "Percent of Population Aged 25-34 that Voted",
};
pub const AGES_35_44_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Ages 35-44 Turnout",
    column: "Percent of Population Aged 35-44 that Voted",
};
pub const AGES_45_64_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Ages 45-64 Turnout",
    column: "Percent of Population Aged 45-64 that Voted",
};
pub const AGES_OVER_65_TURNOUT: DemographicCategory = DemographicCategory {
    title: "Ages Over 65 Turnout",
    column: "Percent of Population 65 or Above that Voted",
};

pub const REPRESENTATION_PARTICIPATION: FairnessCategory = FairnessCategory {
    title: "Representation & Participation Score",
    column: "Representation & Participation Score (out of 6)",
    range: ColorRange::new(0.0, 6.0),
};
pub const ELECTION_SECURITY: FairnessCategory = FairnessCategory {
    title: "Election Security Score",
    column: "Election Security Score (out of 7)",
    range: ColorRange::new(0.0, 7.0),
};
pub const INDEPENDENCE_INTEGRITY: FairnessCategory = FairnessCategory {
    title: "Independence & Integrity Score",
    column: "Independence & Integrity Score (out of 6)",
    range: ColorRange::new(-1.0, 6.0),
};
pub const REGISTRATION_EASE: FairnessCategory = FairnessCategory {
    title: "Ease of Voter Registration",
    column: "Ease of Registering to Vote (out of 5)",
    range: ColorRange::new(-1.0, 5.0),
};
pub const IN_PERSON_EASE: FairnessCategory = FairnessCategory {
    title: "Ease of Voting In-Person",
    column: "Ease of Voting In-Person (out of 5.5)",
    range: ColorRange::new(-2.0, 5.5),
};
pub const MAIL_EASE: FairnessCategory = FairnessCategory {
    title: "Ease of Voting By Mail",
    column: "Ease of Voting By Mail (out of 5)",
    range: ColorRange::new(-2.0, 5.0),
};
pub const OVERALL_FAIRNESS: FairnessCategory = FairnessCategory {
    title: "Overall Voter Fairness Score",
    column: "Overall Voter Fairness Score (out of 34.5)",
    range: ColorRange::new(0.0, 34.5),
};

/// Default selections applied whenever a fresh row set loads.
pub const DEFAULT_DEMOGRAPHIC: DemographicCategory = VOTER_REGISTRATION;
pub const DEFAULT_FAIRNESS: FairnessCategory = OVERALL_FAIRNESS;

/// Demographic toggles, grouped as they appear on the page.
pub const DEMOGRAPHIC_GROUPS: &[&[DemographicCategory]] = &[
    &[VOTER_REGISTRATION, VOTER_TURNOUT],
    &[FEMALE_TURNOUT, MALE_TURNOUT],
    &[
        WHITE_TURNOUT,
        AFRICAN_AMERICAN_TURNOUT,
        LATINO_TURNOUT,
        ASIAN_TURNOUT,
    ],
    &[
        AGES_18_24_TURNOUT,
        AGES_25_34_TURNOUT,
        AGES_35_44_TURNOUT,
        AGES_45_64_TURNOUT,
        AGES_OVER_65_TURNOUT,
    ],
];

/// Fairness toggles, grouped as they appear on the page.
pub const FAIRNESS_GROUPS: &[&[FairnessCategory]] = &[
    &[
        REPRESENTATION_PARTICIPATION,
        ELECTION_SECURITY,
        INDEPENDENCE_INTEGRITY,
    ],
    &[REGISTRATION_EASE, IN_PERSON_EASE, MAIL_EASE],
    &[OVERALL_FAIRNESS],
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_twenty_columns_are_distinct() {
        let mut columns: HashSet<&str> = HashSet::new();
        for group in DEMOGRAPHIC_GROUPS {
            for cat in *group {
                columns.insert(cat.column);
            }
        }
        for group in FAIRNESS_GROUPS {
            for cat in *group {
                columns.insert(cat.column);
            }
        }
        assert_eq!(columns.len(), 20);
    }

    #[test]
    fn fairness_ranges_match_category_definitions() {
        assert_eq!(OVERALL_FAIRNESS.range, ColorRange::new(0.0, 34.5));
        assert_eq!(INDEPENDENCE_INTEGRITY.range, ColorRange::new(-1.0, 6.0));
        assert_eq!(IN_PERSON_EASE.range, ColorRange::new(-2.0, 5.5));
        assert_eq!(MAIL_EASE.range, ColorRange::new(-2.0, 5.0));
    }

    #[test]
    fn defaults_are_registration_and_overall_score() {
        assert_eq!(DEFAULT_DEMOGRAPHIC.title, "Voter Registration");
        assert_eq!(DEFAULT_FAIRNESS.title, "Overall Voter Fairness Score");
    }

    #[test]
    fn button_groupings_match_page_layout() {
        let demo_sizes: Vec<usize> = DEMOGRAPHIC_GROUPS.iter().map(|g| g.len()).collect();
        assert_eq!(demo_sizes, vec![2, 2, 4, 5]);
        let fairness_sizes: Vec<usize> = FAIRNESS_GROUPS.iter().map(|g| g.len()).collect();
        assert_eq!(fairness_sizes, vec![3, 3, 1]);
    }
}
