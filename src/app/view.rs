use super::messages::Message;
use super::state::{
    App, DisplayLanguage, LIST_SCROLL_ID, MENU_WIDTH_PX, PROGRESS_BAR_WIDTH_PX, Screen,
};
use crate::config::ThemeMode;
use crate::deck::Question;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Space, button, column, container, horizontal_space, mouse_area, progress_bar, row,
    scrollable, stack, text,
};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Cards => self.card_screen(),
            Screen::BookmarkList => self.bookmark_list_screen(),
        }
    }

    fn card_screen(&self) -> Element<'_, Message> {
        let mut content: Column<'_, Message> = column![
            self.progress_header(),
            self.question_card(),
            self.navigation_controls(),
        ]
        .padding(16)
        .spacing(12);

        if let Some(notice) = &self.notice {
            content = content.push(
                container(text(notice.text).size(14))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );
        }

        if self.menu.is_visible() {
            stack([content.into(), self.side_menu()]).into()
        } else {
            content.into()
        }
    }

    fn progress_header(&self) -> Element<'_, Message> {
        let menu_button = button(text("Menu")).on_press(Message::ToggleMenu);
        let badge = container(text(self.card.language.badge()).size(16))
            .padding([6, 10])
            .style(container::rounded_box);

        let percent_label = format!("{}%", (self.progress() * 100.0).round() as u32);
        let progress = column![
            text(self.position_label()).size(18),
            row![
                progress_bar(0.0..=1.0, self.progress())
                    .width(Length::Fixed(PROGRESS_BAR_WIDTH_PX))
                    .height(Length::Fixed(8.0)),
                text(percent_label).size(14),
            ]
            .spacing(8)
            .align_y(Vertical::Center),
        ]
        .spacing(4)
        .align_x(Horizontal::Right);

        let mut header = row![menu_button, badge]
            .spacing(10)
            .align_y(Vertical::Center)
            .width(Length::Fill);
        if self.bookmarks.unsynced {
            header = header.push(text("not synced").size(12));
        }
        header.push(horizontal_space()).push(progress).into()
    }

    fn question_card(&self) -> Element<'_, Message> {
        let sentence = text(self.card_text().to_string())
            .size(self.config.card_font_size as f32)
            .align_x(Horizontal::Center)
            .width(Length::Fill);

        container(sentence)
            .width(Length::Fill)
            .height(Length::FillPortion(1))
            .align_y(Vertical::Center)
            .padding(20)
            .into()
    }

    fn navigation_controls(&self) -> Element<'_, Message> {
        let prev_button = if self.card.is_first() {
            button(text("Previous"))
        } else {
            button(text("Previous")).on_press(Message::PreviousQuestion)
        };

        let next_button = if self.card.is_last(self.deck.len()) {
            button(text("Next"))
        } else {
            button(text("Next")).on_press(Message::NextQuestion)
        };

        let star = button(text(if self.current_is_bookmarked() {
            "★"
        } else {
            "☆"
        }))
        .on_press(Message::ToggleBookmark);

        let mut controls = row![prev_button, star]
            .spacing(10)
            .align_y(Vertical::Center);
        if self.card.language == DisplayLanguage::English {
            let speak_label = if self.speech.is_speaking() {
                "Speaking…"
            } else {
                "Speak"
            };
            controls = controls.push(button(text(speak_label)).on_press(Message::SpeakCurrent));
        }
        controls = controls.push(next_button);

        container(controls)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }

    fn side_menu(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day mode"
        } else {
            "Night mode"
        };

        let slide = (MENU_WIDTH_PX * self.menu.progress).max(1.0);
        let panel = container(
            column![
                text("Menu").size(22),
                button(text("Bookmarks"))
                    .on_press(Message::OpenBookmarkList)
                    .width(Length::Fill),
                button(text(theme_label))
                    .on_press(Message::ToggleTheme)
                    .width(Length::Fill),
                button(text("Quit"))
                    .on_press(Message::SafeQuit)
                    .width(Length::Fill),
            ]
            .spacing(8)
            .padding(16),
        )
        .width(Length::Fixed(slide))
        .height(Length::Fill)
        .style(container::rounded_box);

        let scrim = mouse_area(Space::new(Length::Fill, Length::Fill))
            .on_press(Message::CloseMenu);

        row![panel, scrim].into()
    }

    fn bookmark_list_screen(&self) -> Element<'_, Message> {
        let header = row![
            button(text("Back")).on_press(Message::CloseBookmarkList),
            horizontal_space(),
            text("Bookmarks").size(20),
            horizontal_space(),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let bookmarked = self.bookmarked_questions();
        let body: Element<'_, Message> = if bookmarked.is_empty() {
            container(
                column![
                    text("No bookmarks yet").size(18),
                    text("Tap the star on a card to add one").size(14),
                ]
                .spacing(8)
                .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
        } else {
            let rows: Vec<Element<'_, Message>> =
                bookmarked.into_iter().map(bookmark_row).collect();
            scrollable(Column::with_children(rows).spacing(8).padding(4))
                .id(LIST_SCROLL_ID.clone())
                .height(Length::Fill)
                .into()
        };

        column![header, body].padding(16).spacing(12).into()
    }
}

fn bookmark_row(question: &Question) -> Element<'_, Message> {
    button(
        column![
            text(question.jp.as_str()).size(16),
            text(question.en.as_str()).size(14),
        ]
        .spacing(4),
    )
    .on_press(Message::JumpToQuestion(question.id))
    .width(Length::Fill)
    .into()
}
