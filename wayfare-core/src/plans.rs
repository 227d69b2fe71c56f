//! Display cards for travel plans and their days.

use chrono::NaiveDate;
use wayfare_model::{DayPlan, TravelPlan};

const EMPTY_DAY: &str = "Nothing planned yet";

/// One day of a plan, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    /// `"Day 2"`
    pub title: String,
    /// Weekday and date, e.g. `"Tue, Mar 4"`.
    pub subtitle: String,
    /// Activities sorted by time, or a placeholder for an empty day.
    pub lines: Vec<String>,
}

impl DayCard {
    /// Format `day`, sorting its activities by start time.
    pub fn from_day(day: &DayPlan) -> Self {
        let mut activities: Vec<_> = day.activities.iter().collect();
        activities.sort_by_key(|a| a.time);

        let lines = if activities.is_empty() {
            vec![EMPTY_DAY.to_string()]
        } else {
            activities
                .into_iter()
                .map(|activity| {
                    let time = activity.time.format("%H:%M");
                    match &activity.location {
                        Some(location) => {
                            format!("{time} · {} ({location})", activity.title)
                        }
                        None => format!("{time} · {}", activity.title),
                    }
                })
                .collect()
        };

        Self {
            title: format!("Day {}", day.day_number),
            subtitle: day.date.format("%a, %b %-d").to_string(),
            lines,
        }
    }
}

/// Header line for a plan card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    /// Plan title.
    pub title: String,
    /// Destination name.
    pub destination: String,
    /// Number of days.
    pub day_count: usize,
    /// Activities across all days.
    pub activity_count: usize,
    /// `"Mar 3 – Mar 5"`, a single date for one-day plans, empty without days.
    pub date_range: String,
}

impl PlanSummary {
    /// Summarize `plan`.
    pub fn from_plan(plan: &TravelPlan) -> Self {
        let date_range = match (plan.first_date(), plan.last_date()) {
            (Some(first), Some(last)) if first == last => short_date(first),
            (Some(first), Some(last)) => {
                format!("{} – {}", short_date(first), short_date(last))
            }
            _ => String::new(),
        };
        Self {
            title: plan.title.clone(),
            destination: plan.destination.clone(),
            day_count: plan.days.len(),
            activity_count: plan.days.iter().map(|d| d.activities.len()).sum(),
            date_range,
        }
    }

    /// One card per day, in plan order.
    pub fn cards(plan: &TravelPlan) -> Vec<DayCard> {
        plan.days.iter().map(DayCard::from_day).collect()
    }
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use wayfare_model::Activity;

    fn activity(h: u32, title: &str, location: Option<&str>) -> Activity {
        Activity {
            time: NaiveTime::from_hms_opt(h, 0, 0).unwrap(),
            title: title.to_string(),
            location: location.map(str::to_string),
        }
    }

    fn day(n: u32, d: u32, activities: Vec<Activity>) -> DayPlan {
        DayPlan {
            day_number: n,
            date: NaiveDate::from_ymd_opt(2025, 3, d).unwrap(),
            activities,
        }
    }

    #[test]
    fn day_card_sorts_activities_by_time() {
        let card = DayCard::from_day(&day(
            1,
            3,
            vec![
                activity(14, "Tram 28", None),
                activity(9, "Pastries", Some("Belém")),
            ],
        ));
        assert_eq!(card.title, "Day 1");
        assert_eq!(card.subtitle, "Mon, Mar 3");
        assert_eq!(card.lines, vec!["09:00 · Pastries (Belém)", "14:00 · Tram 28"]);
    }

    #[test]
    fn empty_day_has_placeholder_line() {
        let card = DayCard::from_day(&day(2, 4, vec![]));
        assert_eq!(card.lines, vec![EMPTY_DAY]);
    }

    #[test]
    fn summary_counts_and_formats_range() {
        let plan = TravelPlan::new(
            "Long weekend",
            "Lisbon",
            vec![
                day(1, 3, vec![activity(9, "a", None)]),
                day(2, 4, vec![]),
                day(3, 5, vec![activity(9, "b", None), activity(10, "c", None)]),
            ],
        )
        .unwrap();
        let summary = PlanSummary::from_plan(&plan);
        assert_eq!(summary.day_count, 3);
        assert_eq!(summary.activity_count, 3);
        assert_eq!(summary.date_range, "Mar 3 – Mar 5");
        assert_eq!(PlanSummary::cards(&plan).len(), 3);
    }

    #[test]
    fn single_day_range_collapses() {
        let plan = TravelPlan::new("Day trip", "Sintra", vec![day(1, 8, vec![])]).unwrap();
        assert_eq!(PlanSummary::from_plan(&plan).date_range, "Mar 8");
        let empty = TravelPlan::new("Someday", "Anywhere", vec![]).unwrap();
        assert_eq!(PlanSummary::from_plan(&empty).date_range, "");
    }
}
