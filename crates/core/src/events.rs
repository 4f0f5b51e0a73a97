//! Field notifications
//!
//! The field never calls out while it mutates. It queues [`FieldEvent`]s in
//! emission order and the owner hands them to observers afterwards, either with
//! [`Field::dispatch`](crate::Field::dispatch) or by draining them.

use crate::figure::Figure;
use crate::snapshot::FieldSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Grid or current figure changed
    Changed(FieldSnapshot),
    /// Rows removed by one landing
    RowFilled(u32),
    /// The figure that will be played next
    NextFigureChanged(Figure),
    /// A figure could not enter the field; the game is over
    TopRowFilled,
}

impl FieldEvent {
    /// Forward this event to the matching observer method
    pub fn notify<O: FieldObserver + ?Sized>(&self, observer: &mut O) {
        match self {
            FieldEvent::Changed(snapshot) => observer.on_field_changed(snapshot),
            FieldEvent::RowFilled(count) => observer.on_row_filled(*count),
            FieldEvent::NextFigureChanged(figure) => observer.on_next_figure_changed(figure),
            FieldEvent::TopRowFilled => observer.on_top_row_filled(),
        }
    }
}

/// Consumer of field notifications. Every method defaults to a no-op.
pub trait FieldObserver {
    fn on_field_changed(&mut self, _snapshot: &FieldSnapshot) {}

    fn on_row_filled(&mut self, _count: u32) {}

    fn on_next_figure_changed(&mut self, _figure: &Figure) {}

    fn on_top_row_filled(&mut self) {}
}

/// Records every event it sees
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<FieldEvent>,
}

impl FieldObserver for EventLog {
    fn on_field_changed(&mut self, snapshot: &FieldSnapshot) {
        self.events.push(FieldEvent::Changed(snapshot.clone()));
    }

    fn on_row_filled(&mut self, count: u32) {
        self.events.push(FieldEvent::RowFilled(count));
    }

    fn on_next_figure_changed(&mut self, figure: &Figure) {
        self.events.push(FieldEvent::NextFigureChanged(figure.clone()));
    }

    fn on_top_row_filled(&mut self) {
        self.events.push(FieldEvent::TopRowFilled);
    }
}

impl EventLog {
    pub fn row_filled_counts(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FieldEvent::RowFilled(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    pub fn saw_top_row_filled(&self) -> bool {
        self.events.iter().any(|e| matches!(e, FieldEvent::TopRowFilled))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
