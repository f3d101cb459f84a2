use crate::domain::chart::ChartPoint;
use crate::domain::state::ViewState;
use crate::global_signals;
use futures::future::AbortHandle;
use leptos::*;
use once_cell::sync::OnceCell;

/// Tooltip under the cursor: the hovered point and where to draw the box.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
    pub point: ChartPoint,
    pub x: f64,
    pub y: f64,
}

pub struct Globals {
    /// Latest immutable snapshot; replaced wholesale on every transition.
    pub view_state: RwSignal<ViewState>,
    pub tooltip: RwSignal<Option<TooltipData>>,
    /// Abort handle of the fetch that is still in flight, if any.
    pub fetch_abort: RwSignal<Option<AbortHandle>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        view_state: create_rw_signal(ViewState::new()),
        tooltip: create_rw_signal(None),
        fetch_abort: create_rw_signal(None),
    })
}

global_signals! {
    pub view_state => view_state: ViewState,
    pub tooltip => tooltip: Option<TooltipData>,
    pub fetch_abort => fetch_abort: Option<AbortHandle>,
}
