//! Read-only itinerary cards on the landing page.

pub mod view;

use wayfare_model::TravelPlan;

#[derive(Debug, Default)]
pub struct PlansDomain {
    pub plans: Vec<TravelPlan>,
}

impl PlansDomain {
    pub fn new(plans: Vec<TravelPlan>) -> Self {
        Self { plans }
    }
}
