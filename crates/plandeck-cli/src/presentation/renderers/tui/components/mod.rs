mod alert;
mod footer;
mod form;
mod table;

pub(crate) use alert::AlertComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use form::EntryFormComponent;
pub(crate) use table::TaskTableComponent;

use super::app::AppState;
use ratatui::{layout::Rect, Frame};

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}
