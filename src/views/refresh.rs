use crate::prelude::*;

pub(crate) fn render(model: &crate::model::Model) -> Vec<Node<crate::Msg>> {
    vec![seed::button![
        seed::attrs! {
            At::Id => "refresh-btn",
            At::Disabled => model.refreshing().as_at_value(),
        },
        model.button_label(),
        ev(Ev::Click, |_| crate::Msg::RefreshClicked),
    ]]
}
