// JSON shapes served by the exhibitions backend. Structured dates can be
// missing when a scraper only managed to capture free-form date text.

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub(crate) struct Exhibition {
    pub(crate) museum: String,
    pub(crate) title: String,
    pub(crate) url: Option<String>,
    pub(crate) date_start: Option<String>,
    pub(crate) date_end: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) raw_dates: Option<String>,
    pub(crate) scraped_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub(crate) struct MuseumStatus {
    pub(crate) museum: String,
    pub(crate) last_scraped: Option<String>,
    pub(crate) count: u32,
}

pub(crate) const MUSEUMS: &[&str] =
    &["british_museum", "design_museum", "kew", "tate", "vam"];

pub(crate) const STATUSES: &[&str] = &["current", "upcoming", "past"];

pub(crate) fn museum_label(museum: &str) -> &str {
    match museum {
        "tate" => "Tate",
        "british_museum" => "British Museum",
        "vam" => "V&A",
        "design_museum" => "Design Museum",
        "kew" => "Kew Gardens",
        other => other,
    }
}
