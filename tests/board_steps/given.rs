//! Given steps for kanban board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use laneboard::board::{
    adapters::memory::RecordingRemoteEcho,
    domain::{RemoteTodo, TaskId},
    ports::RemoteEchoError,
};
use rstest_bdd_macros::given;

#[given(r#"the upstream has a pending task {id:u64} titled "{title}""#)]
fn upstream_pending_task(world: &mut BoardWorld, id: u64, title: String) {
    world.upstream.push(RemoteTodo::new(id, title, false));
}

#[given(r#"the upstream has a completed task {id:u64} titled "{title}""#)]
fn upstream_completed_task(world: &mut BoardWorld, id: u64, title: String) {
    world.upstream.push(RemoteTodo::new(id, title, true));
}

#[given("the upstream is unavailable")]
fn upstream_unavailable(world: &mut BoardWorld) {
    world.upstream_down = true;
}

#[given("the remote service rejects every change")]
fn remote_rejects_changes(world: &mut BoardWorld) {
    world.echo = RecordingRemoteEcho::failing(RemoteEchoError::Status(500));
}

#[given("the board has been loaded")]
fn board_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.load_board().wrap_err("initial load in scenario setup")?;
    Ok(())
}

#[given(r#"task {id:u64} has been dragged to the "{lane}" lane"#)]
fn task_dragged(world: &mut BoardWorld, id: u64, lane: String) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    let payload = board.start_drag(TaskId::new(id))?;
    board
        .drop(&payload, &lane)
        .wrap_err("drag in scenario setup")?;
    Ok(())
}
