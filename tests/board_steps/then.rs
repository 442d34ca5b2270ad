//! Then steps for kanban board BDD scenarios.

use super::world::{BoardWorld, parse_lane, run_async};
use eyre::eyre;
use laneboard::board::{
    domain::{TaskForm, TaskId},
    services::{BoardError, BoardPhase},
};
use rstest_bdd_macros::then;

fn parse_ids(raw: &str) -> Result<Vec<TaskId>, eyre::Report> {
    raw.split(',')
        .map(|part| {
            part.parse::<TaskId>()
                .map_err(|err| eyre!("invalid task id in scenario: {err}"))
        })
        .collect()
}

#[then(r#"lane "{lane}" shows tasks "{ids}""#)]
fn lane_shows_tasks(world: &BoardWorld, lane: String, ids: String) -> Result<(), eyre::Report> {
    let expected = parse_ids(&ids)?;
    let actual = world.board()?.lane(parse_lane(&lane)?).ids();
    if actual != expected {
        return Err(eyre!("lane {lane}: expected {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"lane "{lane}" is empty"#)]
fn lane_is_empty(world: &BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let view = world.board()?.lane(parse_lane(&lane)?);
    if !view.is_empty() {
        return Err(eyre!("lane {lane} holds {:?}", view.ids()));
    }
    Ok(())
}

#[then("the last change is rejected")]
fn last_change_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_change {
        Some(Err(_)) => Ok(()),
        Some(Ok(task)) => Err(eyre!("expected a rejection, task {} changed", task.id())),
        None => Err(eyre!("no change was attempted")),
    }
}

#[then("task {id:u64} is marked completed")]
fn task_marked_completed(world: &BoardWorld, id: u64) -> Result<(), eyre::Report> {
    let task = world
        .board()?
        .store()
        .get(TaskId::new(id))
        .ok_or_else(|| eyre!("task {id} is missing"))?;
    if !task.completed() {
        return Err(eyre!("task {id} is in {} but not completed", task.lane()));
    }
    Ok(())
}

#[then(r#"task {id:u64} is titled "{title}""#)]
fn task_titled(world: &BoardWorld, id: u64, title: String) -> Result<(), eyre::Report> {
    let task = world
        .board()?
        .store()
        .get(TaskId::new(id))
        .ok_or_else(|| eyre!("task {id} is missing"))?;
    if task.title().as_str() != title {
        return Err(eyre!("task {id} is titled {:?}", task.title().as_str()));
    }
    Ok(())
}

#[then("the remote service received {count:usize} changes")]
fn remote_received(world: &mut BoardWorld, count: usize) -> Result<(), eyre::Report> {
    run_async(world.board_mut()?.flush_echoes());
    let received = world.echo.received().len();
    if received != count {
        return Err(eyre!("expected {count} remote changes, found {received}"));
    }
    Ok(())
}

#[then("the board is in the failed phase")]
fn board_failed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let phase = world.board()?.phase();
    if !matches!(phase, BoardPhase::Failed { .. }) {
        return Err(eyre!("expected failed phase, found {phase}"));
    }
    Ok(())
}

#[then("adding a task is refused because the board is not ready")]
fn adding_refused(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let result = world.board_mut()?.create(TaskForm::new("Too late", ""));
    if !matches!(result, Err(BoardError::NotReady(_))) {
        return Err(eyre!("expected NotReady, got {result:?}"));
    }
    Ok(())
}
