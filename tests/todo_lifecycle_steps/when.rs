//! When steps for to-do lifecycle BDD scenarios.

use super::world::{ToDoWorld, run_async};
use crate::todo_helpers::utc;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todo_keeper::todo::{domain::ToDoId, services::ToDoRequest};

#[when(r#"the incoming items for "{range}" are requested"#)]
fn incoming_items_requested(world: &mut ToDoWorld, range: String) -> Result<(), eyre::Report> {
    world.last_incoming = run_async(world.manager.get_incoming_named(&range))
        .wrap_err("query incoming items")?;
    Ok(())
}

#[when(r#"the to-do item "{title}" is marked completed"#)]
fn item_marked_completed(world: &mut ToDoWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_for(&title)?;
    run_async(world.manager.mark_completed(id)).wrap_err("mark scenario item completed")?;
    Ok(())
}

#[when("an unknown to-do item is updated with an invalid payload")]
fn unknown_item_updated(world: &mut ToDoWorld) {
    let invalid = ToDoRequest::new("", "", utc(2001, 1, 1, 0, 0)).with_percentage_done(-5);
    world.last_error = run_async(world.manager.update(ToDoId::new(9_999), invalid)).err();
}

#[when(r#"the percentage of "{title}" is set to {percentage:i32}"#)]
fn percentage_set(
    world: &mut ToDoWorld,
    title: String,
    percentage: i32,
) -> Result<(), eyre::Report> {
    let id = world.id_for(&title)?;
    world.last_error = run_async(world.manager.set_percentage_done(id, percentage)).err();
    Ok(())
}
