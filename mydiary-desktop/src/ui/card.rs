use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{font, Color, Element, Font, Length};
use mydiary_core::Entry;

const DELETE_RED: Color = Color::from_rgb(0.86, 0.08, 0.08);

pub(crate) fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// One bordered card: title and a delete control on top, the body below.
pub fn entry_card<'a, Message: Clone + 'a>(
    entry: &'a Entry,
    on_delete: impl Fn(i64) -> Message,
) -> Element<'a, Message> {
    let delete = button(text("Delete").color(DELETE_RED))
        .style(button::text)
        .on_press(on_delete(entry.id));

    let header = row![text(&entry.title).size(20).font(bold()), horizontal_space(), delete]
        .align_y(iced::Alignment::Center);

    container(column![header, text(&entry.entry)].spacing(5))
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
