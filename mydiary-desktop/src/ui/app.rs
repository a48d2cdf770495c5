use crate::tasks::{self, SharedJournal};
use crate::ui::card::{bold, entry_card};
use iced::widget::{
    button, center, column, container, mouse_area, opaque, scrollable, stack, text, text_input,
    Column, Space,
};
use iced::{Color, Element, Length, Task, Theme};
use mydiary_core::{DiarySession, Journal, Listing, Notice};

pub struct DiaryApp {
    journal: SharedJournal,
    session: DiarySession,
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    EntryChanged(String),
    AddEntry,
    DeleteEntry(i64),
    DismissNotice,
    SchemaReady(Result<(), String>),
    EntriesLoaded(Result<Listing, String>),
}

impl DiaryApp {
    /// Builds the screen and schedules schema creation followed by the first load.
    pub fn new(journal: Journal) -> (Self, Task<Message>) {
        let journal = tasks::share(journal);
        let startup = Task::perform(tasks::ensure_schema(journal.clone()), Message::SchemaReady);
        (
            Self {
                journal,
                session: DiarySession::new(),
            },
            startup,
        )
    }

    pub fn session(&self) -> &DiarySession {
        &self.session
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TitleChanged(title) => {
                self.session.set_title_draft(title);
                Task::none()
            }
            Message::EntryChanged(body) => {
                self.session.set_body_draft(body);
                Task::none()
            }
            Message::AddEntry => match self.session.take_submission() {
                Some(draft) => Task::perform(
                    tasks::add_entry(self.journal.clone(), draft),
                    Message::EntriesLoaded,
                ),
                None => Task::none(),
            },
            Message::DeleteEntry(id) => Task::perform(
                tasks::delete_entry(self.journal.clone(), id),
                Message::EntriesLoaded,
            ),
            Message::DismissNotice => {
                self.session.dismiss_notice();
                Task::none()
            }
            Message::SchemaReady(result) => {
                // Not fatal; the load below still runs.
                if let Err(e) = result {
                    self.session.report_store_error(e);
                }
                Task::perform(tasks::load_entries(self.journal.clone()), Message::EntriesLoaded)
            }
            Message::EntriesLoaded(listing) => {
                if let Ok(listing) = &listing {
                    log::info!("data fetched ({} entries)", listing.entries.len());
                }
                self.session.apply_reload(listing);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let session = &self.session;

        let mut form = column![
            text("My Diary").size(30).font(bold()),
            Space::with_height(Length::Fixed(10.0)),
            text("Title").size(20),
            text_input("Write your title", session.title_draft()).on_input(Message::TitleChanged),
            text("Entry").size(20),
            text_input("Write your entry...", session.body_draft())
                .on_input(Message::EntryChanged)
                .on_submit(Message::AddEntry),
            button(text("Add Entry"))
                .on_press(Message::AddEntry)
                .width(Length::Fill),
        ]
        .spacing(6);

        if let Some(status) = session.status() {
            form = form.push(text(status).color(Color::from_rgb(0.75, 0.1, 0.1)));
        }

        let cards = Column::with_children(
            session
                .entries()
                .iter()
                .map(|entry| entry_card(entry, Message::DeleteEntry)),
        )
        .spacing(15);

        let list = scrollable(cards).height(Length::Fill);
        let content = container(column![form, Space::with_height(Length::Fixed(10.0)), list])
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill);

        match session.notice() {
            Some(notice) => modal(content, notice_dialog(notice), Message::DismissNotice),
            None => content.into(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn notice_dialog(notice: &Notice) -> Element<'_, Message> {
    container(
        column![
            text(&notice.title).size(22).font(bold()),
            text(&notice.message),
            button(text("OK")).on_press(Message::DismissNotice),
        ]
        .spacing(12),
    )
    .width(Length::Fixed(320.0))
    .padding(16)
    .style(container::rounded_box)
    .into()
}

/// Lays `content` over `base`, dimming and blocking everything underneath.
fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.6,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

pub fn run(journal: Journal) -> iced::Result {
    iced::application("My Diary", DiaryApp::update, DiaryApp::view)
        .theme(DiaryApp::theme)
        .run_with(move || DiaryApp::new(journal))
}
