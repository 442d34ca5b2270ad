//! End-to-end board flows over in-memory adapters.

use super::helpers::{TestBoard, board_with, echo, lane_ids};
use laneboard::board::{
    adapters::memory::RecordingRemoteEcho,
    domain::{Lane, TaskEdit, TaskForm, TaskId},
    services::{BoardError, BoardPhase, DragState},
};
use rstest::{fixture, rstest};

#[fixture]
async fn board(echo: RecordingRemoteEcho) -> TestBoard {
    let mut board = board_with(&echo);
    board.load().await.expect("initial load succeeds");
    board
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn initial_load_groups_tasks_by_completion(#[future] board: TestBoard) {
    let board = board.await;

    assert_eq!(board.phase(), &BoardPhase::Ready);
    assert_eq!(lane_ids(&board, Lane::Pending), vec![1, 3, 5, 6]);
    assert!(lane_ids(&board, Lane::InProgress).is_empty());
    assert_eq!(lane_ids(&board, Lane::Completed), vec![2, 4]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_travels_across_every_lane(#[future] board: TestBoard) {
    let mut board = board.await;
    let created = board
        .create(TaskForm::new("Plan sprint", "Draft goals"))
        .expect("create succeeds");
    assert_eq!(lane_ids(&board, Lane::Pending).first(), Some(&created.id().value()));

    for (lane_id, lane) in [
        ("in-progress", Lane::InProgress),
        ("completed", Lane::Completed),
        ("pending", Lane::Pending),
    ] {
        let payload = board.start_drag(created.id()).expect("drag starts");
        let moved = board.drop(&payload, lane_id).expect("drop succeeds");

        assert_eq!(moved.lane(), lane);
        assert_eq!(moved.completed(), lane == Lane::Completed);
        assert!(lane_ids(&board, lane).contains(&created.id().value()));
        assert_eq!(board.drag_state(), DragState::Idle);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_keeps_lane_and_identifier(#[future] board: TestBoard) {
    let mut board = board.await;
    let payload = board.start_drag(TaskId::new(3)).expect("drag starts");
    board.drop(&payload, "in-progress").expect("drop succeeds");

    let edited = board
        .update(TaskEdit::new(TaskId::new(3), "Watch Casablanca", "With popcorn"))
        .expect("update succeeds");

    assert_eq!(edited.id(), TaskId::new(3));
    assert_eq!(edited.lane(), Lane::InProgress);
    assert_eq!(edited.description(), "With popcorn");
    assert_eq!(lane_ids(&board, Lane::InProgress), vec![3]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmed_delete_removes_task_from_its_lane(#[future] board: TestBoard) {
    let mut board = board.await;

    board.request_delete(TaskId::new(2)).expect("task exists");
    board.confirm_delete().expect("confirmation succeeds");

    assert_eq!(lane_ids(&board, Lane::Completed), vec![4]);
    assert_eq!(board.store().len(), 5);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn requesting_delete_for_unknown_task_fails(#[future] board: TestBoard) {
    let mut board = board.await;

    let result = board.request_delete(TaskId::new(404));

    assert!(matches!(result, Err(BoardError::Store(_))));
    assert_eq!(board.pending_deletion(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_drag_changes_nothing(#[future] board: TestBoard) {
    let mut board = board.await;
    let before = board.store().tasks().to_vec();

    board.start_drag(TaskId::new(1)).expect("drag starts");
    board.cancel_drag();

    assert_eq!(board.drag_state(), DragState::Idle);
    assert_eq!(board.store().tasks(), before.as_slice());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn locally_created_ids_start_at_seed(#[future] board: TestBoard) {
    let mut board = board.await;

    let first = board
        .create(TaskForm::new("First", ""))
        .expect("create succeeds");
    let second = board
        .create(TaskForm::new("Second", ""))
        .expect("create succeeds");

    assert_eq!(first.id(), TaskId::new(200));
    assert_eq!(second.id(), TaskId::new(201));
    assert_eq!(lane_ids(&board, Lane::Pending), vec![201, 200, 1, 3, 5, 6]);
}
