use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    LoadSchedule,
    LoadCatalog,
    LoadRequests,
    SaveDraft,
    SubmitRequest,
    CancelRequest,
    CheckInterrupt,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
