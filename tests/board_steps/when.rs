//! When steps for kanban board BDD scenarios.

use super::world::{BoardWorld, run_async};
use laneboard::board::{
    domain::{TaskEdit, TaskForm, TaskId},
    services::DragPayload,
};
use rstest_bdd_macros::when;

#[when("the board loads")]
fn board_loads(world: &mut BoardWorld) {
    // Outcome is inspected through the phase in later steps.
    world.load_board().ok();
}

#[when(r#"I add a task titled "{title}""#)]
fn add_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let result = world.board_mut()?.create(TaskForm::new(title, ""));
    world.last_change = Some(result);
    Ok(())
}

#[when(r#"I edit task {id:u64} to be titled "{title}""#)]
fn edit_task(world: &mut BoardWorld, id: u64, title: String) -> Result<(), eyre::Report> {
    let result = world
        .board_mut()?
        .update(TaskEdit::new(TaskId::new(id), title, ""));
    world.last_change = Some(result);
    Ok(())
}

#[when(r#"I drag task {id:u64} to the "{lane}" lane"#)]
fn drag_task(world: &mut BoardWorld, id: u64, lane: String) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    let payload = board.start_drag(TaskId::new(id))?;
    let result = board.drop(&payload, &lane);
    world.last_change = Some(result);
    Ok(())
}

#[when(r#"I drop the text "{text}" on the "{lane}" lane"#)]
fn drop_text(world: &mut BoardWorld, text: String, lane: String) -> Result<(), eyre::Report> {
    let result = world
        .board_mut()?
        .drop(&DragPayload::from_text(text), &lane);
    world.last_change = Some(result);
    Ok(())
}

#[when("I confirm deletion of task {id:u64}")]
fn confirm_deletion(world: &mut BoardWorld, id: u64) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    board.request_delete(TaskId::new(id))?;
    board.confirm_delete()?;
    run_async(board.flush_echoes());
    Ok(())
}
