use crate::prelude::*;

pub(crate) fn render(model: &crate::model::Model) -> Vec<Node<crate::Msg>> {
    let mut page = vec![];
    page.extend(super::status::render(model));
    page.extend(super::refresh::render(model));
    page.extend(super::exhibitions::render(model));
    page.push(super::toast::render(model));
    page
}
