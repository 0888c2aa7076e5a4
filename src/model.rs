use crate::prelude::*;
use seed::app::cmds;
use seed::browser::fetch;

use crate::config::Config;
use crate::protocol::{Exhibition, MuseumStatus};

pub(crate) const BUTTON_LABEL: &str = "Refresh data";
pub(crate) const BUTTON_LABEL_BUSY: &str = "Refreshing…";

pub(crate) const TOAST_STARTED: &str =
    "Scrape started — reload the page in ~30s to see updates.";
pub(crate) const TOAST_FAILED: &str = "Refresh failed. Check server logs.";
pub(crate) const TOAST_NETWORK: &str = "Network error — is the server running?";

const TOAST_DEFAULT_MS: u32 = 3000;
const TOAST_STARTED_MS: u32 = 5000;
const REENABLE_DELAY_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshOutcome {
    Started,
    ServerFailed,
    NetworkFailed,
}

impl RefreshOutcome {
    fn from_status(code: u16) -> Self {
        if (200..300).contains(&code) {
            Self::Started
        } else {
            Self::ServerFailed
        }
    }

    fn toast(self) -> (&'static str, u32) {
        match self {
            Self::Started => (TOAST_STARTED, TOAST_STARTED_MS),
            Self::ServerFailed => (TOAST_FAILED, TOAST_DEFAULT_MS),
            Self::NetworkFailed => (TOAST_NETWORK, TOAST_DEFAULT_MS),
        }
    }
}

struct Toast {
    message: String,
    visible: bool,
}

pub(crate) struct Model {
    config: Config,
    refreshing: bool,
    toast: Toast,
    exhibitions: Vec<Exhibition>,
    statuses: Vec<MuseumStatus>,
    museum_filter: String,
    status_filter: String,
}

impl Model {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config,
            refreshing: false,
            toast: Toast {
                message: String::new(),
                visible: false,
            },
            exhibitions: vec![],
            statuses: vec![],
            museum_filter: String::new(),
            status_filter: String::new(),
        }
    }

    pub(crate) fn load_data(&self, orders: &mut impl Orders<crate::Msg>) {
        self.fetch_exhibitions(orders);
        self.fetch_scrape_status(orders);
    }

    pub(crate) fn update(
        &mut self,
        msg: crate::Msg,
        orders: &mut impl Orders<crate::Msg>,
    ) {
        match msg {
            crate::Msg::RefreshClicked => {
                log::debug!("refresh requested");
                self.begin_refresh();
                let url = self.config.refresh_url.clone();
                orders.perform_cmd(async move {
                    crate::Msg::RefreshFinished(post_refresh(url).await)
                });
            }
            crate::Msg::RefreshFinished(result) => {
                let outcome = match &result {
                    Ok(status) => RefreshOutcome::from_status(status.code),
                    Err(_) => RefreshOutcome::NetworkFailed,
                };
                if let Err(err) = &result {
                    log::error!("refresh request failed: {:?}", err);
                }
                let (message, duration_ms) = outcome.toast();
                self.show_toast(message);
                orders.perform_cmd(cmds::timeout(duration_ms, || {
                    crate::Msg::ToastExpired
                }));
                orders.perform_cmd(cmds::timeout(REENABLE_DELAY_MS, || {
                    crate::Msg::RefreshReset
                }));
            }
            crate::Msg::RefreshReset => {
                self.reset_button();
            }
            crate::Msg::ToastExpired => {
                self.expire_toast();
            }
            crate::Msg::ExhibitionsFetched(result) => match result {
                Ok(exhibitions) => {
                    log::debug!("got {} exhibitions", exhibitions.len());
                    self.exhibitions = exhibitions;
                }
                Err(err) => {
                    log::error!("error fetching exhibitions: {:?}", err);
                }
            },
            crate::Msg::ScrapeStatusFetched(result) => match result {
                Ok(statuses) => {
                    log::debug!("got scrape status for {} museums", statuses.len());
                    self.statuses = statuses;
                }
                Err(err) => {
                    log::error!("error fetching scrape status: {:?}", err);
                }
            },
            crate::Msg::MuseumFilterChanged(museum) => {
                self.museum_filter = museum;
                self.fetch_exhibitions(orders);
            }
            crate::Msg::StatusFilterChanged(status) => {
                self.status_filter = status;
                self.fetch_exhibitions(orders);
            }
        }
    }

    pub(crate) fn refreshing(&self) -> bool {
        self.refreshing
    }

    pub(crate) fn button_label(&self) -> &'static str {
        if self.refreshing {
            BUTTON_LABEL_BUSY
        } else {
            BUTTON_LABEL
        }
    }

    pub(crate) fn toast_message(&self) -> &str {
        &self.toast.message
    }

    pub(crate) fn toast_visible(&self) -> bool {
        self.toast.visible
    }

    pub(crate) fn exhibitions(&self) -> &[Exhibition] {
        &self.exhibitions
    }

    pub(crate) fn statuses(&self) -> &[MuseumStatus] {
        &self.statuses
    }

    pub(crate) fn museum_filter(&self) -> &str {
        &self.museum_filter
    }

    pub(crate) fn status_filter(&self) -> &str {
        &self.status_filter
    }

    fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    fn reset_button(&mut self) {
        self.refreshing = false;
    }

    // Earlier expiry timers keep running; one can hide a newer message
    // before its own timer fires (matches the shipped behavior).
    fn show_toast(&mut self, message: &str) {
        self.toast.message.clear();
        self.toast.message.push_str(message);
        self.toast.visible = true;
    }

    fn expire_toast(&mut self) {
        self.toast.visible = false;
    }

    fn fetch_exhibitions(&self, orders: &mut impl Orders<crate::Msg>) {
        let url = exhibitions_url(
            &self.config.exhibitions_url,
            &self.museum_filter,
            &self.status_filter,
        );
        orders.perform_cmd(async move {
            crate::Msg::ExhibitionsFetched(fetch_json(url).await)
        });
    }

    fn fetch_scrape_status(&self, orders: &mut impl Orders<crate::Msg>) {
        let url = self.config.status_url.clone();
        orders.perform_cmd(async move {
            crate::Msg::ScrapeStatusFetched(fetch_json(url).await)
        });
    }
}

async fn post_refresh(url: String) -> fetch::Result<fetch::Status> {
    let response = fetch::Request::new(url)
        .method(fetch::Method::Post)
        .fetch()
        .await?;
    Ok(response.status())
}

async fn fetch_json<T>(url: String) -> fetch::Result<T>
where
    T: serde::de::DeserializeOwned + 'static,
{
    fetch::Request::new(url)
        .fetch()
        .await?
        .check_status()?
        .json()
        .await
}

fn exhibitions_url(base: &str, museum: &str, status: &str) -> String {
    let mut params = vec![];
    if !museum.is_empty() {
        params.push(format!("museum={}", museum));
    }
    if !status.is_empty() {
        params.push(format!("status={}", status));
    }
    if params.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model::new(Config::default())
    }

    #[test]
    fn click_disables_button_before_response_arrives() {
        let mut model = model();
        assert!(!model.refreshing());
        assert_eq!(model.button_label(), BUTTON_LABEL);

        model.begin_refresh();
        assert!(model.refreshing());
        assert_eq!(model.button_label(), BUTTON_LABEL_BUSY);
    }

    #[test]
    fn success_status_codes_start_a_scrape() {
        assert_eq!(RefreshOutcome::from_status(200), RefreshOutcome::Started);
        assert_eq!(RefreshOutcome::from_status(202), RefreshOutcome::Started);
        assert_eq!(RefreshOutcome::from_status(299), RefreshOutcome::Started);
        assert_eq!(
            RefreshOutcome::from_status(302),
            RefreshOutcome::ServerFailed
        );
        assert_eq!(
            RefreshOutcome::from_status(404),
            RefreshOutcome::ServerFailed
        );
        assert_eq!(
            RefreshOutcome::from_status(500),
            RefreshOutcome::ServerFailed
        );
    }

    #[test]
    fn started_toast_text_and_duration() {
        let mut model = model();
        model.begin_refresh();

        let (message, duration_ms) = RefreshOutcome::Started.toast();
        model.show_toast(message);

        assert_eq!(
            model.toast_message(),
            "Scrape started — reload the page in ~30s to see updates."
        );
        assert!(model.toast_visible());
        assert_eq!(duration_ms, 5000);
        // The button stays disabled until the reset timer fires.
        assert!(model.refreshing());
    }

    #[test]
    fn server_failure_toast_text_and_duration() {
        let (message, duration_ms) = RefreshOutcome::ServerFailed.toast();
        assert_eq!(message, "Refresh failed. Check server logs.");
        assert_eq!(duration_ms, 3000);
    }

    #[test]
    fn network_failure_toast_text_and_duration() {
        let (message, duration_ms) = RefreshOutcome::NetworkFailed.toast();
        assert_eq!(message, "Network error — is the server running?");
        assert_eq!(duration_ms, 3000);
    }

    #[test]
    fn reset_restores_button_after_any_outcome() {
        let mut model = model();
        model.begin_refresh();
        model.show_toast(TOAST_NETWORK);

        model.reset_button();
        assert!(!model.refreshing());
        assert_eq!(model.button_label(), "Refresh data");
        // The reset timer is scheduled after the branch, never earlier.
        assert_eq!(REENABLE_DELAY_MS, 5000);
    }

    #[test]
    fn reshowing_replaces_the_message() {
        let mut model = model();
        model.show_toast(TOAST_FAILED);
        model.show_toast(TOAST_STARTED);
        assert_eq!(model.toast_message(), TOAST_STARTED);
        assert!(model.toast_visible());
    }

    #[test]
    fn stale_timer_hides_a_newer_toast() {
        let mut model = model();
        model.show_toast(TOAST_FAILED);
        model.show_toast(TOAST_STARTED);

        // First toast's timer firing hides the second message early.
        model.expire_toast();
        assert!(!model.toast_visible());
        assert_eq!(model.toast_message(), TOAST_STARTED);
    }

    #[test]
    fn toast_text_lingers_after_expiry() {
        let mut model = model();
        model.show_toast(TOAST_STARTED);
        model.expire_toast();
        assert!(!model.toast_visible());
        assert_eq!(model.toast_message(), TOAST_STARTED);
    }

    #[test]
    fn exhibitions_url_without_filters() {
        assert_eq!(exhibitions_url("/api/exhibitions", "", ""), "/api/exhibitions");
    }

    #[test]
    fn exhibitions_url_with_filters() {
        assert_eq!(
            exhibitions_url("/api/exhibitions", "tate", ""),
            "/api/exhibitions?museum=tate"
        );
        assert_eq!(
            exhibitions_url("/api/exhibitions", "", "current"),
            "/api/exhibitions?status=current"
        );
        assert_eq!(
            exhibitions_url("/api/exhibitions", "kew", "upcoming"),
            "/api/exhibitions?museum=kew&status=upcoming"
        );
    }
}
