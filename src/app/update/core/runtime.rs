use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Event;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::window;

impl App {
    pub(in crate::app::update) fn run_effect(&mut self, effect: Effect) -> iced::Task<Message> {
        match effect {
            Effect::SaveConfig => {
                self.save_deck_config();
                iced::Task::none()
            }
            Effect::SaveBookmarks => {
                self.persist_bookmarks();
                iced::Task::none()
            }
            Effect::Speak { text } => {
                self.start_speech(&text);
                iced::Task::none()
            }
            Effect::StopSpeech => {
                self.stop_playback();
                iced::Task::none()
            }
            Effect::QuitSafely => {
                self.save_deck_config();
                self.persist_bookmarks();
                self.stop_playback();
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::PointerMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}
