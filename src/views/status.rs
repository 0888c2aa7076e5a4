use crate::prelude::*;

use crate::protocol;

pub(crate) fn render(model: &crate::model::Model) -> Vec<Node<crate::Msg>> {
    if model.statuses().is_empty() {
        return vec![];
    }
    vec![seed::div![
        seed::C!["scrape-status"],
        model.statuses().iter().map(|status| {
            seed::span![
                seed::C!["museum-status"],
                format!(
                    "{}: {} exhibitions, last scraped {}",
                    protocol::museum_label(&status.museum),
                    status.count,
                    status.last_scraped.as_deref().unwrap_or("never"),
                ),
            ]
        }),
    ]]
}
