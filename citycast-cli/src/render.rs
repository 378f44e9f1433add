use citycast_core::{MemoryView, Panel, Slot};

/// Terminal rendering of whatever the card currently shows.
pub fn render_card(view: &MemoryView) -> String {
    if !view.is_visible(Panel::Card) {
        return String::new();
    }

    if view.is_visible(Panel::Error) {
        return format!("Error: {}", view.slot(Slot::Error));
    }

    let header = [view.slot(Slot::Icon), view.slot(Slot::City)]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![header];
    lines.extend(
        [
            Slot::Temperature,
            Slot::Description,
            Slot::FeelsLike,
            Slot::Humidity,
            Slot::Wind,
            Slot::Country,
        ]
        .into_iter()
        .map(|slot| view.slot(slot))
        .filter(|text| !text.is_empty())
        .map(|text| format!("  {text}")),
    );

    lines.join("\n")
}
