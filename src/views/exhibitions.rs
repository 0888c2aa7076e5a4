use crate::prelude::*;

use crate::protocol;

pub(crate) fn render(model: &crate::model::Model) -> Vec<Node<crate::Msg>> {
    vec![render_filters(model), render_table(model)]
}

fn render_filters(model: &crate::model::Model) -> Node<crate::Msg> {
    seed::div![
        seed::C!["filters"],
        seed::select![
            seed::attrs! { At::Id => "museum-filter" },
            seed::option![seed::attrs! { At::Value => "" }, "All museums"],
            protocol::MUSEUMS.iter().map(|&museum| {
                seed::option![
                    seed::attrs! {
                        At::Value => museum,
                        At::Selected =>
                            (model.museum_filter() == museum).as_at_value(),
                    },
                    protocol::museum_label(museum),
                ]
            }),
            input_ev(Ev::Change, crate::Msg::MuseumFilterChanged),
        ],
        seed::select![
            seed::attrs! { At::Id => "status-filter" },
            seed::option![seed::attrs! { At::Value => "" }, "All statuses"],
            protocol::STATUSES.iter().map(|&status| {
                seed::option![
                    seed::attrs! {
                        At::Value => status,
                        At::Selected =>
                            (model.status_filter() == status).as_at_value(),
                    },
                    status,
                ]
            }),
            input_ev(Ev::Change, crate::Msg::StatusFilterChanged),
        ],
    ]
}

fn render_table(model: &crate::model::Model) -> Node<crate::Msg> {
    if model.exhibitions().is_empty() {
        return seed::p![seed::C!["empty"], "No exhibitions yet."];
    }
    seed::table![
        seed::thead![seed::tr![
            seed::th!["Museum"],
            seed::th!["Exhibition"],
            seed::th!["Dates"],
            seed::th!["Status"],
        ]],
        seed::tbody![model.exhibitions().iter().map(render_row)],
    ]
}

fn render_row(exhibition: &protocol::Exhibition) -> Node<crate::Msg> {
    seed::tr![
        seed::td![protocol::museum_label(&exhibition.museum)],
        seed::td![render_title(exhibition)],
        seed::td![render_dates(exhibition)],
        seed::td![exhibition.status.as_deref().unwrap_or("")],
    ]
}

fn render_title(exhibition: &protocol::Exhibition) -> Node<crate::Msg> {
    match &exhibition.url {
        Some(url) => seed::a![
            seed::attrs! { At::Href => url.as_str() },
            exhibition.title.as_str(),
        ],
        None => seed::span![exhibition.title.as_str()],
    }
}

fn render_dates(exhibition: &protocol::Exhibition) -> String {
    match (&exhibition.date_start, &exhibition.date_end) {
        (Some(start), Some(end)) => format!("{} to {}", start, end),
        (Some(start), None) => format!("From {}", start),
        _ => exhibition.raw_dates.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exhibition() -> protocol::Exhibition {
        protocol::Exhibition {
            museum: "tate".to_string(),
            title: "Turner on Tour".to_string(),
            url: None,
            date_start: None,
            date_end: None,
            status: Some("current".to_string()),
            raw_dates: None,
            scraped_at: None,
        }
    }

    #[test]
    fn dates_prefer_structured_range() {
        let mut ex = exhibition();
        ex.date_start = Some("2026-03-01".to_string());
        ex.date_end = Some("2026-09-01".to_string());
        ex.raw_dates = Some("Spring to autumn".to_string());
        assert_eq!(render_dates(&ex), "2026-03-01 to 2026-09-01");
    }

    #[test]
    fn dates_fall_back_to_raw_text() {
        let mut ex = exhibition();
        ex.raw_dates = Some("Until 19 February 2026".to_string());
        assert_eq!(render_dates(&ex), "Until 19 February 2026");
    }

    #[test]
    fn open_ended_dates() {
        let mut ex = exhibition();
        ex.date_start = Some("2026-03-01".to_string());
        assert_eq!(render_dates(&ex), "From 2026-03-01");
    }

    #[test]
    fn missing_dates_render_empty() {
        assert_eq!(render_dates(&exhibition()), "");
    }
}
