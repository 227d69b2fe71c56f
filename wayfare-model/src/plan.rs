//! Travel plans broken down into days and timed activities.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ModelError, Result};
use crate::ids::PlanId;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub time: NaiveTime,
    pub title: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    /// 1-based position of the day within its plan.
    pub day_number: u32,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelPlan {
    pub id: PlanId,
    pub title: String,
    pub destination: String,
    pub days: Vec<DayPlan>,
}

impl TravelPlan {
    /// Build a plan, requiring consecutive day numbers starting at 1 and
    /// non-decreasing dates.
    pub fn new(
        title: impl Into<String>,
        destination: impl Into<String>,
        days: Vec<DayPlan>,
    ) -> Result<Self> {
        for (idx, day) in days.iter().enumerate() {
            let expected = idx as u32 + 1;
            if day.day_number != expected {
                return Err(ModelError::InvalidPlan(format!(
                    "day {} found where day {expected} was expected",
                    day.day_number
                )));
            }
        }
        if days.windows(2).any(|pair| pair[1].date < pair[0].date) {
            return Err(ModelError::InvalidPlan(
                "days are not in chronological order".to_string(),
            ));
        }
        Ok(Self {
            id: PlanId::new(),
            title: title.into(),
            destination: destination.into(),
            days,
        })
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }
}
