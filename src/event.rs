//! Window notifications the application reacts to, and what it does about them.

/// Menu command that opens the About box.
pub const IDM_ABOUT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Paint,
    Resize { width: i32, height: i32 },
    Command(usize),
    Destroy,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Repaint the client area now.
    Paint,
    /// Mark the whole client area dirty so the next paint redraws everything.
    Invalidate,
    ShowAbout,
    Quit,
    /// Hand the message back to the default window procedure.
    Default,
}

pub fn dispatch(event: Event) -> Action {
    match event {
        Event::Paint => Action::Paint,
        Event::Resize { .. } => Action::Invalidate,
        Event::Command(IDM_ABOUT) => Action::ShowAbout,
        Event::Command(_) => Action::Default,
        Event::Destroy => Action::Quit,
        Event::Other => Action::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_is_the_only_handled_command() {
        assert_eq!(dispatch(Event::Command(IDM_ABOUT)), Action::ShowAbout);
        assert_eq!(dispatch(Event::Command(IDM_ABOUT + 1)), Action::Default);
        assert_eq!(dispatch(Event::Command(0)), Action::Default);
    }

    #[test]
    fn lifecycle_events() {
        assert_eq!(dispatch(Event::Paint), Action::Paint);
        assert_eq!(dispatch(Event::Resize { width: 0, height: 0 }), Action::Invalidate);
        assert_eq!(dispatch(Event::Resize { width: 800, height: 600 }), Action::Invalidate);
        assert_eq!(dispatch(Event::Destroy), Action::Quit);
        assert_eq!(dispatch(Event::Other), Action::Default);
    }
}
