// SPDX-License-Identifier: MPL-2.0
//! The diagram stage: the surface the rendered graphs are shown on.
//!
//! During a crossfade the outgoing diagram stays fully opaque underneath while
//! the incoming one fades in on top. Zoom is deliberately not offered;
//! diagrams always scale to fit the pane.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::render::RenderedGraph;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, svg, Column, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the stage (only from the empty state).
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Ask the application to open a deck via the file dialog.
    OpenDeckRequested,
}

/// View context for rendering the stage.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// What the stage should draw this frame.
pub struct StageView<'a> {
    /// Diagram currently on screen, if any.
    pub current: Option<&'a RenderedGraph>,
    /// Diagram fading in over the current one, if a crossfade is in flight.
    pub incoming: Option<&'a RenderedGraph>,
    /// Eased opacity of the incoming diagram, in `[0, 1]`.
    pub incoming_opacity: f32,
    /// Render or deck failure to surface instead of a diagram.
    pub error: Option<&'a Error>,
}

pub fn view<'a>(ctx: ViewContext<'a>, stage: StageView<'a>) -> Element<'a, Message> {
    if let Some(error) = stage.error {
        return error_view(ctx.i18n, error);
    }

    if stage.current.is_none() && stage.incoming.is_none() {
        return empty_view(ctx.i18n);
    }

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    if let Some(current) = stage.current {
        layers = layers.push(diagram(current, 1.0));
    }
    if let Some(incoming) = stage.incoming {
        layers = layers.push(diagram(incoming, stage.incoming_opacity));
    }

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::stage)
        .into()
}

fn diagram<'a>(graph: &RenderedGraph, opacity: f32) -> Element<'a, Message> {
    svg(graph.handle())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain)
        .opacity(opacity)
        .into()
}

/// Shown when no deck is loaded (empty deck or startup without an argument).
fn empty_view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("empty-state-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenDeckRequested);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn error_view<'a>(i18n: &I18n, error: &Error) -> Element<'a, Message> {
    // Deck problems get their own headline; everything else surfaced on the
    // stage is a layout failure.
    let title_key = match error {
        Error::Graph(_) => "error-render-title",
        _ => "error-deck-title",
    };

    let title = Text::new(i18n.tr(title_key))
        .size(typography::BODY)
        .color(palette::ERROR_500);

    let details = Text::new(error.to_string())
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(details);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::stage)
        .into()
}
