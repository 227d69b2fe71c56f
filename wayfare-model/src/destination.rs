/// A featured destination shown on the landing page carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub name: String,
    pub country: String,
    pub blurb: String,
}

impl Destination {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        blurb: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            blurb: blurb.into(),
        }
    }
}
