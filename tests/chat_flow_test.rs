use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

use saankhya_kiosk::content::Content;
use saankhya_kiosk::core::cmd_executor::CmdExecutor;
use saankhya_kiosk::core::msg::{chat::ChatMsg, Msg};
use saankhya_kiosk::core::state::chat::{ChatView, Sender};
use saankhya_kiosk::{update, AppState};

fn initial_state() -> AppState {
    AppState::new(Content::embedded_default().unwrap()).unwrap()
}

#[test]
fn test_full_question_and_answer_flow() {
    let state = initial_state();

    let (state, _) = update(Msg::Chat(ChatMsg::Open), state);
    assert!(state.chat.is_visible());
    assert!(matches!(state.chat.view(), ChatView::Categories));

    let (state, cmds) = update(
        Msg::Chat(ChatMsg::SelectCategory("Fees".to_string())),
        state,
    );
    assert!(cmds.is_empty());
    assert!(matches!(state.chat.view(), ChatView::Questions("Fees")));

    let (state, cmds) = update(
        Msg::Chat(ChatMsg::SelectQuestion("How much are the fees?".to_string())),
        state,
    );
    assert!(cmds.is_empty());

    // Transcript grew by exactly one question/answer pair
    let transcript = state.chat.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].sender, Sender::User);
    assert_eq!(transcript[0].text, "How much are the fees?");
    assert_eq!(transcript[1].sender, Sender::Bot);
    assert!(transcript[1].text.contains("fee structure"));
}

#[test]
fn test_unknown_selections_leave_transcript_untouched() {
    let state = initial_state();
    let (state, _) = update(Msg::Chat(ChatMsg::Open), state);

    let (state, cmds) = update(
        Msg::Chat(ChatMsg::SelectCategory("Homework".to_string())),
        state,
    );
    assert_eq!(cmds.len(), 1);
    assert!(matches!(state.chat.view(), ChatView::Categories));

    let (state, _) = update(
        Msg::Chat(ChatMsg::SelectCategory("Timings".to_string())),
        state,
    );
    let (state, cmds) = update(
        Msg::Chat(ChatMsg::SelectQuestion("How much are the fees?".to_string())),
        state,
    );
    assert_eq!(cmds.len(), 1);
    assert!(state.chat.transcript().is_empty());
}

#[test]
fn test_back_navigation_keeps_transcript() {
    let state = initial_state();
    let (state, _) = update(Msg::Chat(ChatMsg::Open), state);
    let (state, _) = update(
        Msg::Chat(ChatMsg::SelectCategory("Fees".to_string())),
        state,
    );
    let (state, _) = update(
        Msg::Chat(ChatMsg::SelectQuestion("How much are the fees?".to_string())),
        state,
    );

    let (state, _) = update(Msg::Chat(ChatMsg::BackToQuestions), state);
    assert!(matches!(state.chat.view(), ChatView::Questions("Fees")));
    assert_eq!(state.chat.transcript().len(), 2);

    let (state, _) = update(Msg::Chat(ChatMsg::BackToCategories), state);
    assert!(matches!(state.chat.view(), ChatView::Categories));
    assert_eq!(state.chat.transcript().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_close_resets_session_after_settle_delay() {
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
    let executor = CmdExecutor::new(msg_tx);

    let state = initial_state();
    let (state, _) = update(Msg::Chat(ChatMsg::Open), state);
    let (state, _) = update(
        Msg::Chat(ChatMsg::SelectCategory("Fees".to_string())),
        state,
    );
    let (state, cmds) = update(Msg::Chat(ChatMsg::Close), state);
    executor.execute_commands(&cmds).unwrap();

    // The timer fires and its message flows back through update
    let msg = msg_rx.recv().await.unwrap();
    let (state, cmds) = update(msg, state);

    assert!(cmds.is_empty());
    assert!(!state.chat.is_visible());
    assert!(state.chat.transcript().is_empty());
    assert_eq!(state.chat.selected_category(), None);
}

#[tokio::test(start_paused = true)]
async fn test_reopen_before_settle_cancels_the_reset() {
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
    let executor = CmdExecutor::new(msg_tx);

    let state = initial_state();
    let (state, _) = update(Msg::Chat(ChatMsg::Open), state);
    let (state, _) = update(
        Msg::Chat(ChatMsg::SelectCategory("Fees".to_string())),
        state,
    );
    let (state, _) = update(
        Msg::Chat(ChatMsg::SelectQuestion("How much are the fees?".to_string())),
        state,
    );

    let (state, cmds) = update(Msg::Chat(ChatMsg::Close), state);
    executor.execute_commands(&cmds).unwrap();

    // Reopen before the timer fires
    let (state, _) = update(Msg::Chat(ChatMsg::Open), state);

    let msg = msg_rx.recv().await.unwrap();
    let (state, _) = update(msg, state);

    // The stale reset must not wipe the restored session
    assert!(state.chat.is_visible());
    assert_eq!(state.chat.transcript().len(), 2);
    assert_eq!(state.chat.selected_category(), Some("Fees"));
}

#[test]
fn test_stale_reset_generation_is_ignored_without_timers() {
    let state = initial_state();
    let (state, _) = update(Msg::Chat(ChatMsg::Open), state);
    let (state, _) = update(Msg::Chat(ChatMsg::Close), state);
    let (state, _) = update(Msg::Chat(ChatMsg::Open), state);
    let (state, _) = update(Msg::Chat(ChatMsg::Close), state);

    // First close's timer fires late; generation 1 is stale by now
    let (state, cmds) = update(Msg::Chat(ChatMsg::ResetFired { generation: 1 }), state);
    assert_eq!(cmds.len(), 1);

    // The second close's reset still applies
    let (state, cmds) = update(Msg::Chat(ChatMsg::ResetFired { generation: 2 }), state);
    assert!(cmds.is_empty());
    assert!(state.chat.transcript().is_empty());
}
