//! Bundled content shown before any user interaction: featured
//! destinations, a sample itinerary and a few community posts.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use wayfare_model::{
    Activity, Author, DayPlan, Destination, Post, Tag, TravelPlan,
};

pub fn destinations() -> Vec<Destination> {
    vec![
        Destination::new(
            "Kyoto",
            "Japan",
            "Temples, tea houses and autumn maples.",
        ),
        Destination::new(
            "Lisbon",
            "Portugal",
            "Tiled facades and trams up steep hills.",
        ),
        Destination::new(
            "Cusco",
            "Peru",
            "Gateway to the Sacred Valley.",
        ),
        Destination::new(
            "Reykjavik",
            "Iceland",
            "Geothermal pools under the northern lights.",
        ),
        Destination::new(
            "Marrakesh",
            "Morocco",
            "Souks, riads and the Atlas on the horizon.",
        ),
        Destination::new(
            "Queenstown",
            "New Zealand",
            "Lakes, peaks and a bungee or two.",
        ),
        Destination::new(
            "Hoi An",
            "Vietnam",
            "Lantern-lit lanes along the Thu Bon river.",
        ),
    ]
}

pub fn plans() -> Vec<TravelPlan> {
    let Some(days) = kyoto_days() else {
        log::warn!("bundled itinerary has an invalid date or time");
        return Vec::new();
    };
    match TravelPlan::new("Three days in Kyoto", "Kyoto, Japan", days) {
        Ok(plan) => vec![plan],
        Err(err) => {
            log::warn!("bundled itinerary rejected: {err}");
            Vec::new()
        }
    }
}

fn kyoto_days() -> Option<Vec<DayPlan>> {
    Some(vec![
        DayPlan {
            day_number: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 3)?,
            activities: vec![
                activity(9, 0, "Fushimi Inari hike", Some("Fushimi"))?,
                activity(13, 30, "Nishiki market lunch", Some("Nakagyo"))?,
                activity(19, 0, "Pontocho dinner", None)?,
            ],
        },
        DayPlan {
            day_number: 2,
            date: NaiveDate::from_ymd_opt(2025, 3, 4)?,
            activities: vec![
                activity(
                    8,
                    30,
                    "Arashiyama bamboo grove",
                    Some("Arashiyama"),
                )?,
                activity(14, 0, "Kinkaku-ji", Some("Kita"))?,
            ],
        },
        DayPlan {
            day_number: 3,
            date: NaiveDate::from_ymd_opt(2025, 3, 5)?,
            activities: Vec::new(),
        },
    ])
}

fn activity(
    hour: u32,
    minute: u32,
    title: &str,
    location: Option<&str>,
) -> Option<Activity> {
    Some(Activity {
        time: NaiveTime::from_hms_opt(hour, minute, 0)?,
        title: title.to_string(),
        location: location.map(str::to_string),
    })
}

pub fn posts() -> Vec<Post> {
    let now = Utc::now();
    let entries = [
        (
            Author::new("Mira Okafor", "mira"),
            "Caught the first tram up to Alfama before the crowds. Worth the 6am alarm.",
            &["lisbon", "portugal", "earlymorning"][..],
            Duration::hours(2),
        ),
        (
            Author::new("Jonas Berg", "jberg"),
            "Blue Lagoon is lovely but the Sky Lagoon sunset slot is the real win.",
            &["iceland", "reykjavik"][..],
            Duration::hours(9),
        ),
        (
            Author::new("Ana Lucía Quispe", "analu"),
            "Acclimatise a full day in Cusco before any trek. Coca tea helps.",
            &["peru", "hiking", "altitude"][..],
            Duration::days(1),
        ),
    ];

    entries
        .into_iter()
        .map(|(author, body, tags, age)| {
            let tags =
                tags.iter().filter_map(|raw| Tag::parse(raw).ok()).collect();
            let mut post = Post::new(author, body, tags);
            post.created_at = now - age;
            post
        })
        .collect()
}

/// Identity used by the "Sign in" button.
pub fn demo_author() -> Author {
    Author::new("Wayfare Traveler", "traveler")
}
