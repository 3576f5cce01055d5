use crate::domain::model::Place;
use crate::domain::ports::{Container, InputField};

pub const NO_RESULTS_MESSAGE: &str = "No recommendations found.";

/// Replaces the container content with one card per place, or the placeholder when
/// there are none, and shows it.
pub fn render<C: Container + ?Sized>(container: &mut C, items: &[&Place], no_results: &str) {
    container.clear();

    if items.is_empty() {
        container.push_placeholder(no_results);
    } else {
        for place in items {
            container.push_card(place);
        }
    }

    container.set_visible(true);
}

pub fn reset<C, I>(container: &mut C, input: &mut I)
where
    C: Container + ?Sized,
    I: InputField + ?Sized,
{
    input.clear();
    hide(container);
}

pub fn hide<C: Container + ?Sized>(container: &mut C) {
    container.set_visible(false);
    container.clear();
}
