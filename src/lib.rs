mod config;
mod model;
mod prelude;
mod protocol;
mod views;

use crate::prelude::*;
use seed::browser::fetch;
use wasm_bindgen::prelude::*;

const APP_DIV_ID: &str = "app";

pub(crate) enum Msg {
    RefreshClicked,
    RefreshFinished(fetch::Result<fetch::Status>),
    RefreshReset,
    ToastExpired,
    ExhibitionsFetched(fetch::Result<Vec<protocol::Exhibition>>),
    ScrapeStatusFetched(fetch::Result<Vec<protocol::MuseumStatus>>),
    MuseumFilterChanged(String),
    StatusFilterChanged(String),
}

fn init(_: Url, orders: &mut impl Orders<Msg>) -> model::Model {
    let model = model::Model::new(config::Config::load());
    model.load_data(orders);
    model
}

fn update(msg: Msg, model: &mut model::Model, orders: &mut impl Orders<Msg>) {
    model.update(msg, orders);
}

fn view(model: &model::Model) -> Vec<Node<Msg>> {
    views::page::render(model)
}

#[wasm_bindgen(start)]
pub fn start() {
    // Pages without the mount point simply don't get the app.
    let root: web_sys::Element =
        match seed::document().get_element_by_id(APP_DIV_ID) {
            Some(root) => root,
            None => return,
        };
    console_log::init_with_level(log::Level::Debug).unwrap();
    App::start(root, init, update, view);
}
