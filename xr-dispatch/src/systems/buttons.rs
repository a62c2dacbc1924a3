use crate::{
    components::Handedness,
    contexts::{Button, ButtonEvent, InputContext},
};

/// Every button that changed state this frame: left hand first, then right, each in
/// [`Button::ALL`] order. Buttons that either frame doesn't report are skipped.
pub fn button_events(input_context: &InputContext) -> Vec<ButtonEvent> {
    [Handedness::Left, Handedness::Right]
        .into_iter()
        .flat_map(|handedness| {
            let input = input_context.hand(handedness);
            Button::ALL.into_iter().filter_map(move |button| {
                input.button_edge(button).map(|edge| ButtonEvent {
                    handedness,
                    button,
                    edge,
                })
            })
        })
        .collect()
}
