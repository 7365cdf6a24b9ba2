//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod edit;
mod geometry;
mod resize;
mod selection;
mod sync;
mod ui;

use crate::commands::Cmd;
use crate::messages::{Msg, UiMsg};
use crate::model::GridModel;
use crate::tracing::SelectionSnapshot;

use tracing::{debug, span, trace, Level};

pub use edit::update_edit;
pub use geometry::update_geometry;
pub use resize::update_resize;
pub use selection::update_selection;
pub use sync::{update_sync, DELETE_FAILED, UPDATE_FAILED};
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// Runs to completion; any remote work is returned as a command.
pub fn update(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    // Skip logging for noisy periodic messages
    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::Tick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before = SelectionSnapshot::from_model(model);

    let result = match msg {
        Msg::Geometry(m) => update_geometry(model, m),
        Msg::Resize(m) => update_resize(model, m),
        Msg::Selection(m) => update_selection(model, m),
        Msg::Edit(m) => update_edit(model, m),
        Msg::Sync(m) => update_sync(model, m),
        Msg::Ui(m) => update_ui(model, m),
    };

    let after = SelectionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        trace!(target: "selection", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Selection::SelectCell { row: 1, col: 2, extend: false }`
/// - `Sync::Inserted(lead-id)`
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::SyncMsg;

    match msg {
        Msg::Geometry(m) => format!("Geometry::{:?}", m),
        Msg::Resize(m) => format!("Resize::{:?}", m),
        Msg::Selection(m) => format!("Selection::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        // Row payloads are too large to log whole
        Msg::Sync(SyncMsg::Loaded(Ok(rows))) => format!("Sync::Loaded(Ok({} rows))", rows.len()),
        Msg::Sync(SyncMsg::Inserted(lead)) => format!("Sync::Inserted({})", lead.id),
        Msg::Sync(m) => format!("Sync::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
    }
}
