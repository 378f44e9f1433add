use std::sync::{Arc, Mutex};

use crate::{
    config::Config,
    controller::{DisplayState, RenderController},
    fetcher::WeatherFetcher,
    model::LocationCandidate,
    provider::WeatherApi,
    suggest::{SuggestionBox, SuggestionFetcher},
    view::{SharedView, WeatherView, lock},
};

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    Suggestion(usize),
    Submit,
    Elsewhere,
}

/// The complete widget: city input with autocomplete plus the weather card.
#[derive(Debug)]
pub struct WeatherForm<V> {
    view: SharedView<V>,
    controller: RenderController<V>,
    suggestions: SuggestionBox<V>,
}

impl<V: WeatherView> WeatherForm<V> {
    pub fn new(view: V, api: Arc<dyn WeatherApi>, config: &Config) -> Self {
        let view = Arc::new(Mutex::new(view));
        let controller = RenderController::new(
            view.clone(),
            WeatherFetcher::new(api.clone()),
            config.icon_style,
        );
        let suggestions = SuggestionBox::new(
            view.clone(),
            SuggestionFetcher::new(api, config.suggestion_limit),
            config.debounce(),
        );

        Self {
            view,
            controller,
            suggestions,
        }
    }

    pub fn view(&self) -> &SharedView<V> {
        &self.view
    }

    pub fn state(&self) -> &DisplayState {
        self.controller.state()
    }

    /// The user edited the input; `text` is its new content.
    pub fn input_changed(&mut self, text: &str) {
        lock(&self.view).set_input(text);
        self.suggestions.input_changed();
    }

    /// Route a click. Anything outside the input closes the suggestion list.
    pub fn click(&mut self, target: ClickTarget) -> Option<LocationCandidate> {
        match target {
            ClickTarget::Input => None,
            ClickTarget::Suggestion(index) => {
                let picked = self.suggestions.select(index);
                self.suggestions.dismiss();
                picked
            }
            ClickTarget::Submit | ClickTarget::Elsewhere => {
                self.suggestions.dismiss();
                None
            }
        }
    }

    pub async fn submit(&mut self) -> &DisplayState {
        self.controller.submit().await
    }

    pub fn suggestions(&self) -> Vec<LocationCandidate> {
        self.suggestions.candidates()
    }

    /// Wait until a debounced suggestion lookup has been rendered.
    pub async fn settle_suggestions(&mut self) {
        self.suggestions.settle().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        testing::{FakeApi, Reply, candidate, rainy_bergen},
        view::{MemoryView, Panel, Slot},
    };

    fn form(api: Arc<FakeApi>) -> WeatherForm<MemoryView> {
        WeatherForm::new(MemoryView::default(), api, &Config::default())
    }

    fn api() -> Arc<FakeApi> {
        Arc::new(FakeApi::new(
            vec![
                candidate("Bergen", Some("Vestland"), "NO", 60.39, 5.32),
                candidate("Bergen", Some("North Holland"), "NL", 52.67, 4.7),
            ],
            Reply::Ok(rainy_bergen()),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn pick_suggestion_then_submit() {
        let api = api();
        let mut form = form(api.clone());

        form.input_changed("Ber");
        form.settle_suggestions().await;
        assert_eq!(form.suggestions().len(), 2);

        let picked = form.click(ClickTarget::Suggestion(0)).expect("suggestion exists");
        assert_eq!(picked.country, "NO");
        assert_eq!(lock(form.view()).input(), "Bergen, NO");

        let state = form.submit().await.clone();

        assert!(matches!(state, DisplayState::Result(_)));
        assert_eq!(
            api.geocode_queries(),
            vec!["Ber".to_string(), "Bergen, NO".to_string()]
        );
        assert_eq!(lock(form.view()).slot(Slot::City), "Bergen, NO");
    }

    #[tokio::test(start_paused = true)]
    async fn outside_click_hides_list_but_input_click_keeps_it() {
        let mut form = form(api());

        form.input_changed("Ber");
        form.settle_suggestions().await;
        assert!(lock(form.view()).is_visible(Panel::Suggestions));

        assert!(form.click(ClickTarget::Input).is_none());
        assert!(lock(form.view()).is_visible(Panel::Suggestions));

        form.click(ClickTarget::Elsewhere);
        assert!(!lock(form.view()).is_visible(Panel::Suggestions));
    }

    #[tokio::test(start_paused = true)]
    async fn submit_click_dismisses_suggestions() {
        let mut form = form(api());

        form.input_changed("Ber");
        form.settle_suggestions().await;
        form.click(ClickTarget::Submit);

        assert!(!lock(form.view()).is_visible(Panel::Suggestions));
        assert_eq!(form.state(), &DisplayState::Idle);
    }

    #[tokio::test]
    async fn empty_submit_never_calls_api() {
        let api = api();
        let mut form = form(api.clone());

        form.input_changed("   ");
        form.suggestions.cancel();
        let state = form.submit().await.clone();

        assert_eq!(
            state,
            DisplayState::Error("Please enter a city name.".into())
        );
        assert_eq!(api.total_calls(), 0);
    }
}
