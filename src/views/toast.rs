use crate::prelude::*;

// One toast node per page; hiding drops the class, the text lingers.
pub(crate) fn render(model: &crate::model::Model) -> Node<crate::Msg> {
    seed::div![
        seed::attrs! { At::Id => "toast" },
        seed::C![seed::IF!(model.toast_visible() => "show")],
        model.toast_message(),
    ]
}
