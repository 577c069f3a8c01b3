// SPDX-License-Identifier: MPL-2.0
//! Transport controls for the slideshow.
//!
//! Provides a toolbar with previous/next buttons, a play-pause toggle, a
//! position slider bound to the deck length, and the current index label. The
//! toolbar is a pure projection of [`PlaybackState`]; every interaction goes
//! back up as a [`Message`].

use crate::deck::Deck;
use crate::i18n::fluent::I18n;
use crate::playback::PlaybackState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, row, slider, text, tooltip, Row, Text};
use iced::{Alignment, Element, Length};

/// Slider step: one diagram at a time.
const SLIDER_STEP: f64 = 1.0;

/// Messages emitted by the transport widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Step to the next diagram.
    Next,

    /// Step to the previous diagram.
    Previous,

    /// Toggle play mode.
    TogglePlay,

    /// Slider moved to a new position during a drag. Fired once per distinct
    /// value; an unchanged value is dropped by the update loop.
    SliderMoved(f64),

    /// Slider released: the drag committed at its final position.
    SliderReleased,
}

/// View context for rendering the transport bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the transport toolbar for `playback` over `deck`. The slider
/// maximum is always the deck's last index.
pub fn view<'a>(
    ctx: ViewContext<'a>,
    playback: &PlaybackState,
    deck: &Deck,
) -> Element<'a, Message> {
    let prev_button = button(Text::new(ctx.i18n.tr("controls-previous")))
        .on_press(Message::Previous)
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let toggle_label = if playback.playing() {
        ctx.i18n.tr("controls-pause")
    } else {
        ctx.i18n.tr("controls-play")
    };
    let toggle_button = button(Text::new(toggle_label))
        .on_press(Message::TogglePlay)
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));
    // Highlight the toggle while play mode runs.
    let toggle_button: Element<'_, Message> = if playback.playing() {
        toggle_button.style(styles::button::selected).into()
    } else {
        toggle_button.into()
    };

    let next_button = button(Text::new(ctx.i18n.tr("controls-next")))
        .on_press(Message::Next)
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let position = slider(
        0.0..=deck.last_index() as f64,
        playback.index() as f64,
        Message::SliderMoved,
    )
    .on_release(Message::SliderReleased)
    .step(SLIDER_STEP)
    .width(Length::FillPortion(1));
    let position = tooltip(
        position,
        Text::new(ctx.i18n.tr("controls-slider-tooltip")).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(4);

    let index_label = text(format_position(playback.index(), deck.len()))
        .size(typography::CAPTION)
        .width(Length::Shrink);

    let controls: Row<'a, Message> = row![
        prev_button,
        toggle_button,
        next_button,
        position,
        index_label,
    ]
    .spacing(spacing::XS)
    .padding(spacing::XS)
    .align_y(Alignment::Center);

    container(controls)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Formats the index label, e.g. `"3 / 9"` for index 3 of a 10-diagram deck.
/// The zero-based index is shown, matching the slider scale.
fn format_position(index: usize, deck_len: usize) -> String {
    format!("{} / {}", index, deck_len.saturating_sub(1))
}
